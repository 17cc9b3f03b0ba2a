/// Navigation status of a single question, derived on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionStatus {
    /// The question on screen. Takes precedence over correctness.
    Current,
    Unanswered,
    Correct,
    Incorrect,
}

impl QuestionStatus {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            QuestionStatus::Current => "current",
            QuestionStatus::Unanswered => "unanswered",
            QuestionStatus::Correct => "correct",
            QuestionStatus::Incorrect => "incorrect",
        }
    }
}

/// Aggregated view of test progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// 1-based position of the current question.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub is_finished: bool,
}

impl SessionProgress {
    /// Share of the test reached so far, in percent (0.0..=100.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fill_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.position as f64 / self.total as f64 * 100.0
    }
}
