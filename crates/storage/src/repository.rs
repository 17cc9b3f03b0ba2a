use async_trait::async_trait;
use quiz_core::model::{
    AnswerOption, AnswerPair, PhysicalQuantities, Question, QuestionDraft, QuestionError,
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by question sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("duplicate question id: {0}")]
    DuplicateId(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("question source unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    InvalidQuestion(#[from] QuestionError),
}

/// Persisted shape of a question in a question bank file.
///
/// Field names follow the bank format (`imageUrl`, `physicalQuantities`,
/// `correctAnswer`) so banks can be authored by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub id: String,
    pub number: u32,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub options: Vec<AnswerOption>,
    pub physical_quantities: PhysicalQuantities,
    pub correct_answer: AnswerPair,
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            id: question.id().as_str().to_owned(),
            number: question.number(),
            text: question.text().to_owned(),
            image_url: question.image_url().map(str::to_owned),
            options: question.options().to_vec(),
            physical_quantities: question.quantities().clone(),
            correct_answer: question.correct_answer(),
        }
    }

    /// Convert the record back into a validated domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the record fails validation.
    pub fn into_question(self) -> Result<Question, QuestionError> {
        QuestionDraft {
            id: self.id,
            number: self.number,
            text: self.text,
            image_url: self.image_url,
            options: self.options,
            quantities: self.physical_quantities,
            correct: self.correct_answer,
        }
        .validate()
    }
}

/// Read-only source of the ordered question list for a test.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Load every question in test order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read or holds invalid questions.
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    questions: Arc<Mutex<Vec<Question>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(Mutex::new(questions)),
        }
    }

    /// Append a question at the end of the test.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the lock is poisoned.
    pub fn push(&self, question: Question) -> Result<(), StorageError> {
        let mut guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        guard.push(question);
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(guard.clone())
    }
}

/// Question source behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
}

impl Storage {
    /// Storage backed by the question bank bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the bundled bank fails to parse.
    pub fn builtin() -> Result<Self, StorageError> {
        Ok(Self {
            questions: Arc::new(crate::json::JsonQuestionBank::builtin()?),
        })
    }

    /// Storage backed by a JSON question bank on disk.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be read or parsed.
    pub async fn json_file(path: impl AsRef<std::path::Path>) -> Result<Self, StorageError> {
        Ok(Self {
            questions: Arc::new(crate::json::JsonQuestionBank::from_path(path).await?),
        })
    }
}
