use crate::model::question::AnswerOption;

/// How a physical quantity changes. These are the canonical option values
/// used by every question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    Increases,
    Decreases,
    Unchanged,
}

impl Trend {
    pub const ALL: [Trend; 3] = [Trend::Increases, Trend::Decreases, Trend::Unchanged];

    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Trend::Increases => 1,
            Trend::Decreases => 2,
            Trend::Unchanged => 3,
        }
    }

    #[must_use]
    pub const fn from_value(value: u32) -> Option<Self> {
        match value {
            1 => Some(Trend::Increases),
            2 => Some(Trend::Decreases),
            3 => Some(Trend::Unchanged),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Trend::Increases => "increases",
            Trend::Decreases => "decreases",
            Trend::Unchanged => "does not change",
        }
    }

    /// The three canonical options in display order.
    #[must_use]
    pub fn standard_options() -> Vec<AnswerOption> {
        Self::ALL
            .iter()
            .map(|trend| AnswerOption::new(trend.label(), trend.value()))
            .collect()
    }
}

/// Display label for an option value; unknown values (including "unanswered") map to "".
#[must_use]
pub fn option_label(value: u32) -> &'static str {
    Trend::from_value(value).map_or("", Trend::label)
}
