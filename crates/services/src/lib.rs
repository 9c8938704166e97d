#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use tables_core::Clock;

pub use error::SessionError;
pub use quiz::{
    AnswerFeedback, QuizLoopService, QuizProgress, QuizResultListItem, QuizResultService,
    QuizSession, Score,
};
