mod progress;
mod review;
mod service;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::{QuestionStatus, SessionProgress};
pub use review::{ReviewEntry, ReviewStatus, SlotReview};
pub use service::{Navigation, TestPhase, TestSession};
pub use workflow::QuestionBankService;
