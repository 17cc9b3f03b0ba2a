mod answer;
mod ids;
mod question;
mod trend;

pub use answer::{AnswerPair, AnswerRecord, Slot};
pub use ids::QuestionId;
pub use question::{AnswerOption, PhysicalQuantities, Question, QuestionDraft, QuestionError};
pub use trend::{Trend, option_label};
