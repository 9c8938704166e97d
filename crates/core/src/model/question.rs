use thiserror::Error;

use crate::model::table::{MULTIPLICAND_MAX, MULTIPLICAND_MIN, TableNumber};

/// Number of answer options presented with every question.
pub const OPTION_COUNT: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("multiplicand must be between 1 and 12, got {provided}")]
    InvalidMultiplicand { provided: u8 },

    #[error("answer options must be strictly positive, got {provided}")]
    NonPositiveOption { provided: u32 },

    #[error("answer options must be distinct, {provided} appears twice")]
    DuplicateOption { provided: u32 },

    #[error("none of the options equals the correct answer {expected}")]
    MissingCorrectOption { expected: u32 },

    #[error("option index must be between 0 and 3, got {provided}")]
    InvalidOptionIndex { provided: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One multiple-choice prompt: `table × multiplicand = ?` with four options.
///
/// Instances are immutable once built. The constructor checks every
/// structural invariant, so holders of a `Question` never re-validate:
/// the options are four distinct strictly-positive values, exactly one of
/// which is the product, and `correct_index` points at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    multiplicand: u8,
    correct_answer: u32,
    options: [u32; OPTION_COUNT],
    correct_index: usize,
}

impl Question {
    /// Builds a question for `table × multiplicand` from a fixed option set.
    ///
    /// `correct_index` is located by searching `options` for the product.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the multiplicand is outside 1-12, any
    /// option is zero or repeated, or no option equals the product.
    pub fn new(
        table: TableNumber,
        multiplicand: u8,
        options: [u32; OPTION_COUNT],
    ) -> Result<Self, QuestionError> {
        if !(MULTIPLICAND_MIN..=MULTIPLICAND_MAX).contains(&multiplicand) {
            return Err(QuestionError::InvalidMultiplicand {
                provided: multiplicand,
            });
        }

        for (position, &option) in options.iter().enumerate() {
            if option == 0 {
                return Err(QuestionError::NonPositiveOption { provided: option });
            }
            if options[..position].contains(&option) {
                return Err(QuestionError::DuplicateOption { provided: option });
            }
        }

        let correct_answer = table.product(multiplicand);
        let correct_index = options
            .iter()
            .position(|&option| option == correct_answer)
            .ok_or(QuestionError::MissingCorrectOption {
                expected: correct_answer,
            })?;

        Ok(Self {
            multiplicand,
            correct_answer,
            options,
            correct_index,
        })
    }

    #[must_use]
    pub fn multiplicand(&self) -> u8 {
        self.multiplicand
    }

    #[must_use]
    pub fn correct_answer(&self) -> u32 {
        self.correct_answer
    }

    #[must_use]
    pub fn options(&self) -> &[u32; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// The option value at `index`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::InvalidOptionIndex` if `index` is not 0-3.
    pub fn option(&self, index: usize) -> Result<u32, QuestionError> {
        self.options
            .get(index)
            .copied()
            .ok_or(QuestionError::InvalidOptionIndex { provided: index })
    }
}

//
// ─── ANSWERED QUESTION ─────────────────────────────────────────────────────────
//

/// Record of a single answered question.
///
/// Appended once per question, in question order; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredQuestion {
    prompt_label: String,
    user_answer: u32,
    correct_answer: u32,
    is_correct: bool,
}

impl AnsweredQuestion {
    /// Records the option chosen for `question` within `table`'s quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::InvalidOptionIndex` if `option_index` is not 0-3.
    pub fn from_choice(
        table: TableNumber,
        question: &Question,
        option_index: usize,
    ) -> Result<Self, QuestionError> {
        let user_answer = question.option(option_index)?;

        Ok(Self {
            prompt_label: format!("{} × {}", table, question.multiplicand()),
            user_answer,
            correct_answer: question.correct_answer(),
            is_correct: option_index == question.correct_index(),
        })
    }

    #[must_use]
    pub fn prompt_label(&self) -> &str {
        &self.prompt_label
    }

    #[must_use]
    pub fn user_answer(&self) -> u32 {
        self.user_answer
    }

    #[must_use]
    pub fn correct_answer(&self) -> u32 {
        self.correct_answer
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn table(value: u8) -> TableNumber {
        TableNumber::new(value).unwrap()
    }

    #[test]
    fn question_locates_correct_index() {
        let question = Question::new(table(5), 7, [33, 35, 36, 40]).unwrap();

        assert_eq!(question.correct_answer(), 35);
        assert_eq!(question.correct_index(), 1);
        assert_eq!(question.options()[question.correct_index()], 35);
    }

    #[test]
    fn question_rejects_invalid_multiplicand() {
        let err = Question::new(table(5), 13, [60, 65, 66, 70]).unwrap_err();
        assert_eq!(err, QuestionError::InvalidMultiplicand { provided: 13 });

        let err = Question::new(table(5), 0, [1, 2, 3, 4]).unwrap_err();
        assert_eq!(err, QuestionError::InvalidMultiplicand { provided: 0 });
    }

    #[test]
    fn question_rejects_zero_option() {
        let err = Question::new(table(5), 7, [35, 0, 36, 40]).unwrap_err();
        assert_eq!(err, QuestionError::NonPositiveOption { provided: 0 });
    }

    #[test]
    fn question_rejects_duplicate_options() {
        let err = Question::new(table(5), 7, [35, 36, 36, 40]).unwrap_err();
        assert_eq!(err, QuestionError::DuplicateOption { provided: 36 });
    }

    #[test]
    fn question_rejects_missing_correct_option() {
        let err = Question::new(table(5), 7, [33, 34, 36, 40]).unwrap_err();
        assert_eq!(err, QuestionError::MissingCorrectOption { expected: 35 });
    }

    #[test]
    fn answered_question_records_correct_choice() {
        let question = Question::new(table(9), 4, [34, 35, 36, 38]).unwrap();
        let answer = AnsweredQuestion::from_choice(table(9), &question, 2).unwrap();

        assert!(answer.is_correct());
        assert_eq!(answer.user_answer(), 36);
        assert_eq!(answer.correct_answer(), 36);
        assert_eq!(answer.prompt_label(), "9 × 4");
    }

    #[test]
    fn answered_question_records_wrong_choice() {
        let question = Question::new(table(9), 4, [34, 35, 36, 38]).unwrap();
        let answer = AnsweredQuestion::from_choice(table(9), &question, 0).unwrap();

        assert!(!answer.is_correct());
        assert_eq!(answer.user_answer(), 34);
        assert_eq!(answer.correct_answer(), 36);
    }

    #[test]
    fn answered_question_rejects_out_of_range_index() {
        let question = Question::new(table(9), 4, [34, 35, 36, 38]).unwrap();
        let err = AnsweredQuestion::from_choice(table(9), &question, 4).unwrap_err();

        assert_eq!(err, QuestionError::InvalidOptionIndex { provided: 4 });
    }
}
