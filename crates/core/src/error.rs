use thiserror::Error;

use crate::generator::GeneratorError;
use crate::model::{QuestionError, QuizResultError, QuizSettingsError, TableError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    QuizResult(#[from] QuizResultError),
    #[error(transparent)]
    QuizSettings(#[from] QuizSettingsError),
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}
