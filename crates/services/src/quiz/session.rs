use rand::Rng;

use tables_core::generator::QuestionGenerator;
use tables_core::model::{
    AnsweredQuestion, Question, QuizResultDraft, QuizSettings, TableNumber, UserId,
};

use super::progress::{QuizProgress, Score};
use crate::error::SessionError;

//
// ─── ANSWER FEEDBACK ───────────────────────────────────────────────────────────
//

/// What the caller needs to render feedback before advancing: whether the
/// chosen option was right, and the value of the correct answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub is_correct: bool,
    pub correct_answer: u32,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz session for one multiplication table.
///
/// Owns a generated question batch and steps through it one question at a
/// time: each question is answered exactly once, in order, and the cursor
/// only moves on an explicit [`advance`](Self::advance). Constructing a
/// session selects its table; selecting a different table means constructing
/// a new session, and [`reset`](Self::reset) restarts the current one with a
/// fresh batch.
#[derive(Debug)]
pub struct QuizSession {
    table: TableNumber,
    question_count: u8,
    questions: Vec<Question>,
    answers: Vec<AnsweredQuestion>,
    current: usize,
}

impl QuizSession {
    /// Starts a session: generates `settings.question_count()` questions for
    /// `table` and places the cursor on the first one.
    ///
    /// # Errors
    ///
    /// Propagates generation failures via `SessionError::Generator`.
    pub fn start<R: Rng + ?Sized>(
        table: TableNumber,
        settings: &QuizSettings,
        generator: &QuestionGenerator,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let question_count = settings.question_count();
        let questions = generator.generate(table, question_count, rng)?;

        Ok(Self {
            table,
            question_count,
            questions,
            answers: Vec::new(),
            current: 0,
        })
    }

    /// Discards all progress and regenerates a fresh batch for the same table.
    ///
    /// # Errors
    ///
    /// Propagates generation failures via `SessionError::Generator`. On
    /// error the session is left untouched.
    pub fn reset<R: Rng + ?Sized>(
        &mut self,
        generator: &QuestionGenerator,
        rng: &mut R,
    ) -> Result<(), SessionError> {
        let questions = generator.generate(self.table, self.question_count, rng)?;

        self.questions = questions;
        self.answers.clear();
        self.current = 0;
        Ok(())
    }

    /// Records the answer for the current question.
    ///
    /// Returns the feedback the caller renders before advancing.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` after the last question has been
    /// passed, `SessionError::AlreadyAnswered` if the current question
    /// already has an answer, and `SessionError::Question` if `option_index`
    /// is not 0-3.
    pub fn record_answer(&mut self, option_index: usize) -> Result<AnswerFeedback, SessionError> {
        if self.answers.len() > self.current {
            return Err(SessionError::AlreadyAnswered {
                index: self.current,
            });
        }
        let Some(question) = self.questions.get(self.current) else {
            return Err(SessionError::Completed);
        };

        let answer = AnsweredQuestion::from_choice(self.table, question, option_index)?;
        let feedback = AnswerFeedback {
            is_correct: answer.is_correct(),
            correct_answer: answer.correct_answer(),
        };

        self.answers.push(answer);
        Ok(feedback)
    }

    /// Moves the cursor to the next question.
    ///
    /// Reaching the end of the batch completes the session; a complete
    /// session accepts no further answers until [`reset`](Self::reset).
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished
    /// and `SessionError::NotYetAnswered` if the current question has no
    /// answer yet.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        if self.answers.len() <= self.current {
            return Err(SessionError::NotYetAnswered {
                index: self.current,
            });
        }

        self.current += 1;
        Ok(())
    }

    /// The score derived from the answer log.
    ///
    /// Recomputed on every call, so it can never drift from the recorded
    /// answers; `correct + incorrect` always equals the number of answers.
    #[must_use]
    pub fn score(&self) -> Score {
        let correct = self.answers.iter().filter(|a| a.is_correct()).count();
        let incorrect = self.answers.len() - correct;

        Score {
            correct: u32::try_from(correct).unwrap_or(u32::MAX),
            incorrect: u32::try_from(incorrect).unwrap_or(u32::MAX),
            total: u32::try_from(self.questions.len()).unwrap_or(u32::MAX),
        }
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    /// Builds the persistable record of a completed quiz.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` while questions remain.
    pub fn build_result(&self, user_id: UserId) -> Result<QuizResultDraft, SessionError> {
        if !self.is_complete() {
            return Err(SessionError::NotComplete);
        }

        let score = self.score();
        Ok(QuizResultDraft::new(
            user_id,
            self.table,
            score.correct,
            score.total,
        )?)
    }

    #[must_use]
    pub fn table(&self) -> TableNumber {
        self.table
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &[AnsweredQuestion] {
        &self.answers
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions that have already been answered.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of questions the cursor has not passed yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.current)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
