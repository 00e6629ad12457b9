mod question;
mod session;

pub use question::{ChoiceError, ChoiceSet, Question, QuestionKind};
pub use session::{Phase, QuizSession};
