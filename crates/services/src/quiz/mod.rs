mod progress;
mod session;
mod view;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::SessionError;
pub use progress::{QuizProgress, Score};
pub use session::{AnswerFeedback, QuizSession};
pub use view::{QuizResultListItem, QuizResultService};
pub use workflow::QuizLoopService;
