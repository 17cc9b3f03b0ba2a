//! JSON question banks.
//!
//! A bank is a top-level array of [`QuestionRecord`]s in test order.

use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;
use quiz_core::model::Question;
use tracing::{debug, info, warn};

use crate::repository::{QuestionRecord, QuestionRepository, StorageError};

const BUILTIN_BANK: &str = include_str!("../data/questions.json");

/// A fully parsed and validated question bank.
#[derive(Debug, Clone)]
pub struct JsonQuestionBank {
    questions: Vec<Question>,
}

impl JsonQuestionBank {
    /// Parse a bank from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` for malformed JSON,
    /// `StorageError::InvalidQuestion` for records that fail validation and
    /// `StorageError::DuplicateId` when two records share an id.
    pub fn parse(json: &str) -> Result<Self, StorageError> {
        let records: Vec<QuestionRecord> = serde_json::from_str(json)?;
        let mut seen = HashSet::with_capacity(records.len());
        let mut questions = Vec::with_capacity(records.len());

        for record in records {
            let question = record.into_question()?;
            if !seen.insert(question.id().clone()) {
                return Err(StorageError::DuplicateId(question.id().to_string()));
            }
            questions.push(question);
        }

        debug!(count = questions.len(), "parsed question bank");
        Ok(Self { questions })
    }

    /// The bank compiled into this crate.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the bundled bank is malformed.
    pub fn builtin() -> Result<Self, StorageError> {
        Self::parse(BUILTIN_BANK)
    }

    /// Read and parse a bank from disk.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file cannot be read, otherwise see [`Self::parse`].
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let bank = Self::parse(&json)?;
        if bank.is_empty() {
            warn!(path = %path.display(), "question bank has no questions");
        } else {
            info!(path = %path.display(), count = bank.len(), "loaded question bank");
        }
        Ok(bank)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

#[async_trait]
impl QuestionRepository for JsonQuestionBank {
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        Ok(self.questions.clone())
    }
}
