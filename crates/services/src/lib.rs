#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;
pub mod timer;

pub use sessions as session;

pub use error::SessionError;
pub use timer::{SessionClock, TICK_PERIOD, TickTimer, Ticks};

pub use sessions::{
    Navigation, QuestionBankService, QuestionStatus, ReviewEntry, ReviewStatus, SessionProgress,
    SlotReview, TestPhase, TestSession,
};
