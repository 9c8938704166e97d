use thiserror::Error;

use crate::model::table::MULTIPLICAND_MAX;

/// Fewest questions a quiz can hold.
pub const QUESTION_COUNT_MIN: u8 = 1;
/// Most questions a quiz can hold. Bounded by the distinct multiplicand
/// pool, since one quiz never repeats a multiplicand.
pub const QUESTION_COUNT_MAX: u8 = MULTIPLICAND_MAX;
/// Question count used when the caller does not pick one.
pub const DEFAULT_QUESTION_COUNT: u8 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSettingsError {
    #[error("question count must be between 1 and 12, got {provided}")]
    InvalidQuestionCount { provided: u8 },
}

/// Configuration for one quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    question_count: u8,
}

impl QuizSettings {
    /// Creates settings with a custom question count.
    ///
    /// # Errors
    ///
    /// Returns `QuizSettingsError::InvalidQuestionCount` if the count is
    /// outside 1-12.
    pub fn new(question_count: u8) -> Result<Self, QuizSettingsError> {
        if !(QUESTION_COUNT_MIN..=QUESTION_COUNT_MAX).contains(&question_count) {
            return Err(QuizSettingsError::InvalidQuestionCount {
                provided: question_count,
            });
        }
        Ok(Self { question_count })
    }

    #[must_use]
    pub fn question_count(&self) -> u8 {
        self.question_count
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten_questions() {
        assert_eq!(QuizSettings::default().question_count(), 10);
    }

    #[test]
    fn accepts_counts_within_pool() {
        assert_eq!(QuizSettings::new(1).unwrap().question_count(), 1);
        assert_eq!(QuizSettings::new(12).unwrap().question_count(), 12);
    }

    #[test]
    fn rejects_counts_outside_pool() {
        let err = QuizSettings::new(0).unwrap_err();
        assert_eq!(err, QuizSettingsError::InvalidQuestionCount { provided: 0 });

        let err = QuizSettings::new(13).unwrap_err();
        assert_eq!(err, QuizSettingsError::InvalidQuestionCount { provided: 13 });
    }
}
