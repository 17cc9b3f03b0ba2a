//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by test sessions and the question bank service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for the test")]
    Empty,
    #[error("test already completed")]
    Completed,
    #[error("test is still in progress")]
    NotFinished,
    #[error("question index {index} is out of range for {total} questions")]
    OutOfRange { index: usize, total: usize },
    #[error("an answer needs at least one selection")]
    EmptyAnswer,
    #[error("option value {value} is not offered by the current question")]
    UnknownOption { value: u32 },
    #[error(transparent)]
    Storage(#[from] StorageError),
}
