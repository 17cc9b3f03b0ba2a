use std::sync::Arc;

use quiz_core::model::Question;
use storage::repository::{InMemoryRepository, QuestionRepository};
use tracing::info;

use super::service::TestSession;
use crate::error::SessionError;

/// Loads the question bank and starts test sessions from it.
///
/// Hides the repository from the UI; the UI only sees `TestSession`s.
#[derive(Clone)]
pub struct QuestionBankService {
    questions: Arc<dyn QuestionRepository>,
}

impl QuestionBankService {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    #[must_use]
    pub fn in_memory(questions: Vec<Question>) -> Self {
        Self::new(Arc::new(InMemoryRepository::with_questions(questions)))
    }

    /// Load every question in test order.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` on repository failures.
    pub async fn load_questions(&self) -> Result<Vec<Question>, SessionError> {
        Ok(self.questions.list_questions().await?)
    }

    /// Start a fresh attempt over the whole bank.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the bank has no questions and
    /// `SessionError::Storage` on repository failures.
    pub async fn start_test(&self) -> Result<TestSession, SessionError> {
        let questions = self.load_questions().await?;
        let session = TestSession::new(questions)?;
        info!(questions = session.total(), "test started");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use storage::repository::StorageError;

    struct FailingRepo;

    #[async_trait]
    impl QuestionRepository for FailingRepo {
        async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
            Err(StorageError::Unavailable("fail".to_string()))
        }
    }

    #[tokio::test]
    async fn empty_bank_cannot_start() {
        let service = QuestionBankService::in_memory(Vec::new());
        let err = service.start_test().await.unwrap_err();
        assert!(matches!(err, SessionError::Empty));
    }

    #[tokio::test]
    async fn storage_errors_propagate() {
        let service = QuestionBankService::new(Arc::new(FailingRepo));
        let err = service.start_test().await.unwrap_err();
        assert!(matches!(err, SessionError::Storage(StorageError::Unavailable(_))));
    }

    #[tokio::test]
    async fn builtin_bank_starts_a_session() {
        let bank = storage::JsonQuestionBank::builtin().unwrap();
        let expected = bank.len();
        let service = QuestionBankService::new(Arc::new(bank));
        let session = service.start_test().await.unwrap();
        assert_eq!(session.total(), expected);
        assert_eq!(session.current_index(), 0);
    }
}
