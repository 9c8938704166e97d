//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use tables_core::generator::GeneratorError;
use tables_core::model::{QuestionError, QuizResultError};

/// Errors emitted by quiz session operations.
///
/// The sequencing variants (`Completed`, `AlreadyAnswered`, `NotYetAnswered`,
/// `NotComplete`) signal a caller protocol violation: questions are answered
/// one at a time, in order, answer before advance. They are never retryable;
/// the sensible reaction is to reset the session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("quiz already completed")]
    Completed,

    #[error("question {index} already has an answer")]
    AlreadyAnswered { index: usize },

    #[error("question {index} has not been answered yet")]
    NotYetAnswered { index: usize },

    #[error("quiz is not complete yet")]
    NotComplete,

    #[error(transparent)]
    Question(#[from] QuestionError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Result(#[from] QuizResultError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
