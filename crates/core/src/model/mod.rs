mod ids;
mod question;
mod quiz_result;
mod quiz_settings;
mod table;

pub use ids::{ParseIdError, QuizResultId, UserId};
pub use question::{AnsweredQuestion, OPTION_COUNT, Question, QuestionError};
pub use quiz_result::{QuizResult, QuizResultDraft, QuizResultError};
pub use quiz_settings::{
    DEFAULT_QUESTION_COUNT, QUESTION_COUNT_MAX, QUESTION_COUNT_MIN, QuizSettings,
    QuizSettingsError,
};
pub use table::{
    MULTIPLICAND_MAX, MULTIPLICAND_MIN, TABLE_MAX, TABLE_MIN, TableError, TableNumber, TableRow,
};
