//! Aggregate scoring for a finished test.

/// Number of correct answers out of the total question count.
///
/// The percentage is derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    correct: usize,
    total: usize,
}

/// Coarse rating used to colour the percentage on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            ScoreBand::Good => "score-good",
            ScoreBand::Fair => "score-fair",
            ScoreBand::Poor => "score-poor",
        }
    }
}

impl Score {
    /// `correct` is clamped to `total`.
    #[must_use]
    pub fn new(correct: usize, total: usize) -> Self {
        Self {
            correct: correct.min(total),
            total,
        }
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whole percent, rounding halves up (1/8 -> 13). An empty test scores 0.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let rounded = (200 * self.correct + self.total) / (2 * self.total);
        u32::try_from(rounded).unwrap_or(100)
    }

    #[must_use]
    pub fn band(&self) -> ScoreBand {
        match self.percentage() {
            80.. => ScoreBand::Good,
            60..=79 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }
}
