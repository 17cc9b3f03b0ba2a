use quiz_core::model::{AnswerPair, Slot, option_label};
use services::{ReviewEntry, ReviewStatus, TestSession};

use crate::vm::time_fmt::format_elapsed;

pub const NOT_ANSWERED_MARKER: &str = "— Not answered";
const EMPTY_SLOT_LABEL: &str = "—";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub correct_label: String,
    pub percentage_label: String,
    pub band_class: &'static str,
    pub time_label: String,
    pub toggle_label: &'static str,
}

#[must_use]
pub fn map_results(session: &TestSession) -> ResultsVm {
    let score = session.score();
    let review_open = session.is_review_open();
    ResultsVm {
        correct_label: format!("{} of {}", score.correct(), score.total()),
        percentage_label: format!("{}%", score.percentage()),
        band_class: score.band().css_class(),
        time_label: format_elapsed(session.elapsed()),
        toggle_label: if review_open {
            "Hide answers"
        } else {
            "Show answers"
        },
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewValueVm {
    pub quantity: String,
    pub label: String,
    pub is_wrong: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewEntryVm {
    pub key: String,
    pub heading: String,
    pub text: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    /// `None` renders the "not answered" marker.
    pub submitted: Option<Vec<ReviewValueVm>>,
    pub expected: Option<Vec<ReviewValueVm>>,
}

fn slot_label(value: u32) -> String {
    if value == AnswerPair::UNANSWERED {
        EMPTY_SLOT_LABEL.to_string()
    } else {
        option_label(value).to_string()
    }
}

impl From<&ReviewEntry> for ReviewEntryVm {
    fn from(entry: &ReviewEntry) -> Self {
        let (status_label, status_class) = match entry.status {
            ReviewStatus::Correct => ("✓ Correct", "correct"),
            ReviewStatus::Incorrect => ("✗ Incorrect", "incorrect"),
            ReviewStatus::Unanswered => ("Not answered", "unanswered"),
        };

        let submitted = entry.submitted.map(|slots| {
            slots
                .iter()
                .map(|slot| ReviewValueVm {
                    quantity: entry.quantities.name(slot.slot).to_string(),
                    label: slot_label(slot.value),
                    is_wrong: slot.is_wrong,
                })
                .collect()
        });

        let expected = entry.expected.map(|pair| {
            Slot::ALL
                .iter()
                .map(|&slot| ReviewValueVm {
                    quantity: entry.quantities.name(slot).to_string(),
                    label: slot_label(pair.get(slot)),
                    is_wrong: false,
                })
                .collect()
        });

        Self {
            key: entry.question_id.to_string(),
            heading: format!("Question {}", entry.index + 1),
            text: entry.text.clone(),
            status_label,
            status_class,
            submitted,
            expected,
        }
    }
}

#[must_use]
pub fn map_review_entries(entries: &[ReviewEntry]) -> Vec<ReviewEntryVm> {
    entries.iter().map(ReviewEntryVm::from).collect()
}
