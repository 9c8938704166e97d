use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::model::{
    MULTIPLICAND_MAX, MULTIPLICAND_MIN, QUESTION_COUNT_MAX, QUESTION_COUNT_MIN, Question,
    QuestionError, TableNumber,
};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GeneratorError {
    #[error("question count must be between 1 and 12, got {provided}")]
    InvalidQuestionCount { provided: u8 },

    #[error("offset radii must satisfy 0 < initial <= max, got {initial}..{max}")]
    InvalidOffsetRadii { initial: u32, max: u32 },

    #[error("could not collect 3 distinct distractors around answer {correct_answer}")]
    DistractorPoolExhausted { correct_answer: u32 },

    #[error(transparent)]
    Question(#[from] QuestionError),
}

//
// ─── GENERATOR ─────────────────────────────────────────────────────────────────
//

/// Distractors needed per question (one option is the correct answer).
const DISTRACTOR_COUNT: usize = 3;

/// Draws attempted at one offset radius before widening.
const DRAWS_PER_RADIUS: u32 = 32;

const DEFAULT_INITIAL_RADIUS: u32 = 5;
const DEFAULT_MAX_RADIUS: u32 = 80;

/// Builds batches of multiple-choice questions for one multiplication table.
///
/// Each batch draws its multiplicands from a shuffled `1..=12` pool, so a
/// batch never repeats a multiplicand. Distractors are rejection-sampled
/// from a symmetric offset window around the correct product, starting at
/// ±5 and doubling up to ±80 whenever a window runs dry. The widening keeps
/// the sampling loop bounded; a batch that still cannot fill its option set
/// at the widest window fails with `DistractorPoolExhausted`.
///
/// The generator owns no randomness. Callers inject any [`Rng`], which makes
/// batches reproducible under test with a seeded [`rand::rngs::StdRng`].
///
/// # Examples
///
/// ```
/// # use tables_core::generator::QuestionGenerator;
/// # use tables_core::model::TableNumber;
/// # use rand::SeedableRng;
/// let generator = QuestionGenerator::new();
/// let table = TableNumber::new(7)?;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(11);
///
/// let questions = generator.generate(table, 10, &mut rng)?;
/// assert_eq!(questions.len(), 10);
/// # Ok::<(), tables_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QuestionGenerator {
    initial_offset_radius: u32,
    max_offset_radius: u32,
}

impl QuestionGenerator {
    /// Creates a generator with the default ±5 → ±80 offset policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            initial_offset_radius: DEFAULT_INITIAL_RADIUS,
            max_offset_radius: DEFAULT_MAX_RADIUS,
        }
    }

    /// Creates a generator with a custom offset widening policy.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::InvalidOffsetRadii` unless
    /// `0 < initial <= max`.
    pub fn with_offset_radii(initial: u32, max: u32) -> Result<Self, GeneratorError> {
        if initial == 0 || max < initial {
            return Err(GeneratorError::InvalidOffsetRadii { initial, max });
        }
        Ok(Self {
            initial_offset_radius: initial,
            max_offset_radius: max,
        })
    }

    /// Generates `count` questions for `table`.
    ///
    /// The multiplicands are a uniformly random `count`-subset of `1..=12`
    /// (pairwise distinct); each question's option order is an independent
    /// uniform permutation.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::InvalidQuestionCount` if `count` is outside
    /// 1-12, or `GeneratorError::DistractorPoolExhausted` if a question's
    /// distractor set cannot be filled within the widening bound.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        table: TableNumber,
        count: u8,
        rng: &mut R,
    ) -> Result<Vec<Question>, GeneratorError> {
        if !(QUESTION_COUNT_MIN..=QUESTION_COUNT_MAX).contains(&count) {
            return Err(GeneratorError::InvalidQuestionCount { provided: count });
        }

        let mut pool: Vec<u8> = (MULTIPLICAND_MIN..=MULTIPLICAND_MAX).collect();
        pool.shuffle(rng);
        pool.truncate(usize::from(count));

        let mut questions = Vec::with_capacity(pool.len());
        for multiplicand in pool {
            questions.push(self.build_question(table, multiplicand, rng)?);
        }
        Ok(questions)
    }

    fn build_question<R: Rng + ?Sized>(
        &self,
        table: TableNumber,
        multiplicand: u8,
        rng: &mut R,
    ) -> Result<Question, GeneratorError> {
        let correct = table.product(multiplicand);
        let mut options = self.pick_distractors(correct, rng)?;
        options.push(correct);
        options.shuffle(rng);

        let options = [options[0], options[1], options[2], options[3]];
        Ok(Question::new(table, multiplicand, options)?)
    }

    /// Collects 3 distinct strictly-positive values near `correct`, none of
    /// them equal to `correct` itself.
    fn pick_distractors<R: Rng + ?Sized>(
        &self,
        correct: u32,
        rng: &mut R,
    ) -> Result<Vec<u32>, GeneratorError> {
        let mut distractors: Vec<u32> = Vec::with_capacity(DISTRACTOR_COUNT);
        let mut radius = self.initial_offset_radius;
        let mut draws = 0_u32;

        while distractors.len() < DISTRACTOR_COUNT {
            if draws >= DRAWS_PER_RADIUS {
                if radius >= self.max_offset_radius {
                    return Err(GeneratorError::DistractorPoolExhausted {
                        correct_answer: correct,
                    });
                }
                radius = (radius * 2).min(self.max_offset_radius);
                draws = 0;
            }
            draws += 1;

            let window = i64::from(radius);
            let offset = rng.random_range(-window..=window);
            if offset == 0 {
                continue;
            }

            let candidate = i64::from(correct) + offset;
            let Ok(candidate) = u32::try_from(candidate) else {
                continue;
            };
            if candidate == 0 || candidate == correct || distractors.contains(&candidate) {
                continue;
            }
            distractors.push(candidate);
        }

        Ok(distractors)
    }
}

impl Default for QuestionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
