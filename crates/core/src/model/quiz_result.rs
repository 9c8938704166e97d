use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{QuizResultId, UserId};
use crate::model::table::TableNumber;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizResultError {
    #[error("quiz result must cover at least one question")]
    EmptyQuiz,

    #[error("correct answers ({correct}) exceed total questions ({total})")]
    CountMismatch { correct: u32, total: u32 },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// The record the quiz core emits when a session completes.
///
/// Identifier and creation timestamp are assigned by the storage
/// collaborator, not by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResultDraft {
    user_id: UserId,
    table: TableNumber,
    correct_answers: u32,
    total_questions: u32,
}

impl QuizResultDraft {
    /// Creates a draft result.
    ///
    /// # Errors
    ///
    /// Returns `QuizResultError::EmptyQuiz` if `total_questions` is zero, or
    /// `QuizResultError::CountMismatch` if `correct_answers` exceeds it.
    pub fn new(
        user_id: UserId,
        table: TableNumber,
        correct_answers: u32,
        total_questions: u32,
    ) -> Result<Self, QuizResultError> {
        if total_questions == 0 {
            return Err(QuizResultError::EmptyQuiz);
        }
        if correct_answers > total_questions {
            return Err(QuizResultError::CountMismatch {
                correct: correct_answers,
                total: total_questions,
            });
        }

        Ok(Self {
            user_id,
            table,
            correct_answers,
            total_questions,
        })
    }

    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub fn table(&self) -> TableNumber {
        self.table
    }

    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }
}

//
// ─── STORED RESULT ─────────────────────────────────────────────────────────────
//

/// A quiz result as persisted: the draft fields plus the identifier and
/// timestamp the store assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    id: QuizResultId,
    user_id: UserId,
    table: TableNumber,
    correct_answers: u32,
    total_questions: u32,
    recorded_at: DateTime<Utc>,
}

impl QuizResult {
    /// Attaches a store-assigned identity to a draft.
    #[must_use]
    pub fn from_draft(
        id: QuizResultId,
        draft: &QuizResultDraft,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id: draft.user_id(),
            table: draft.table(),
            correct_answers: draft.correct_answers(),
            total_questions: draft.total_questions(),
            recorded_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuizResultId {
        self.id
    }

    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub fn table(&self) -> TableNumber {
        self.table
    }

    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
