use chrono::{DateTime, Utc};
use std::sync::Arc;

use storage::repository::QuizResultRepository;
use tables_core::model::{QuizResult, QuizResultId, TableNumber, UserId};

use crate::error::SessionError;

/// Presentation-agnostic list item for a stored quiz result.
///
/// No pre-formatted strings and no locale assumptions; the UI formats
/// timestamps and percentages as it sees fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResultListItem {
    pub id: QuizResultId,
    pub user_id: UserId,
    pub table: TableNumber,
    pub correct_answers: u32,
    pub total_questions: u32,
    pub recorded_at: DateTime<Utc>,
}

impl QuizResultListItem {
    #[must_use]
    pub fn from_result(result: &QuizResult) -> Self {
        Self {
            id: result.id(),
            user_id: result.user_id(),
            table: result.table(),
            correct_answers: result.correct_answers(),
            total_questions: result.total_questions(),
            recorded_at: result.recorded_at(),
        }
    }
}

/// Read facade over stored quiz results.
///
/// Collections come back unordered; callers sort for display.
#[derive(Clone)]
pub struct QuizResultService {
    results: Arc<dyn QuizResultRepository>,
}

impl QuizResultService {
    #[must_use]
    pub fn new(results: Arc<dyn QuizResultRepository>) -> Self {
        Self { results }
    }

    /// All results recorded for a user.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` on repository failures.
    pub async fn list_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<QuizResultListItem>, SessionError> {
        let results = self.results.results_by_user(user_id).await?;
        Ok(results.iter().map(QuizResultListItem::from_result).collect())
    }

    /// All results recorded for a table.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` on repository failures.
    pub async fn list_by_table(
        &self,
        table: TableNumber,
    ) -> Result<Vec<QuizResultListItem>, SessionError> {
        let results = self.results.results_by_table(table).await?;
        Ok(results.iter().map(QuizResultListItem::from_result).collect())
    }

    /// All results recorded for a user on one table.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` on repository failures.
    pub async fn list_by_user_and_table(
        &self,
        user_id: UserId,
        table: TableNumber,
    ) -> Result<Vec<QuizResultListItem>, SessionError> {
        let results = self
            .results
            .results_by_user_and_table(user_id, table)
            .await?;
        Ok(results.iter().map(QuizResultListItem::from_result).collect())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
