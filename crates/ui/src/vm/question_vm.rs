use quiz_core::model::{AnswerPair, Question, Slot};

/// Correctness marker on a single option. An option carries at most one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    None,
    Correct,
    Wrong,
}

impl OptionMark {
    #[must_use]
    pub const fn marker(self) -> Option<&'static str> {
        match self {
            OptionMark::None => None,
            OptionMark::Correct => Some("✓"),
            OptionMark::Wrong => Some("✗"),
        }
    }

    #[must_use]
    pub const fn marker_class(self) -> &'static str {
        match self {
            OptionMark::None => "",
            OptionMark::Correct => "correct-marker",
            OptionMark::Wrong => "wrong-marker",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub slot: Slot,
    pub value: u32,
    pub label: String,
    pub selected: bool,
    pub mark: OptionMark,
    pub disabled: bool,
    /// The pair reported upward when this option is picked.
    pub emits: AnswerPair,
}

impl OptionVm {
    #[must_use]
    pub fn class(&self) -> String {
        let mut class = String::from("option");
        if self.selected {
            class.push_str(" selected");
        }
        match self.mark {
            OptionMark::None => {}
            OptionMark::Correct => class.push_str(" correct"),
            OptionMark::Wrong => class.push_str(" wrong"),
        }
        class
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionGroupVm {
    pub slot: Slot,
    pub quantity: String,
    pub options: Vec<OptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub heading: String,
    pub text: String,
    pub image_url: Option<String>,
    pub reveal: bool,
    pub groups: Vec<OptionGroupVm>,
}

fn mark_for(reveal: bool, option_value: u32, selected: u32, correct: u32) -> OptionMark {
    if !reveal {
        OptionMark::None
    } else if option_value == correct {
        OptionMark::Correct
    } else if option_value == selected {
        OptionMark::Wrong
    } else {
        OptionMark::None
    }
}

/// Build the render model for one question.
///
/// With `reveal` set every input is disabled, the keyed option of each group is
/// marked correct and a differing selection is marked wrong.
#[must_use]
pub fn map_question(question: &Question, answer: AnswerPair, reveal: bool) -> QuestionVm {
    let correct = question.correct_answer();
    let groups = Slot::ALL
        .iter()
        .map(|&slot| {
            let selected = answer.get(slot);
            let options = question
                .options()
                .iter()
                .map(|option| OptionVm {
                    slot,
                    value: option.value,
                    label: option.label.clone(),
                    selected: option.value == selected,
                    mark: mark_for(reveal, option.value, selected, correct.get(slot)),
                    disabled: reveal,
                    emits: answer.with(slot, option.value),
                })
                .collect();
            OptionGroupVm {
                slot,
                quantity: question.quantities().name(slot).to_string(),
                options,
            }
        })
        .collect();

    QuestionVm {
        heading: format!("Question {}", question.number()),
        text: question.text().to_string(),
        image_url: question.image_url().map(str::to_string),
        reveal,
        groups,
    }
}

/// The image to show, if any. A URL that already failed to load stays hidden
/// together with its container.
#[must_use]
pub fn visible_image(image_url: Option<&str>, failed: Option<&str>) -> Option<String> {
    image_url
        .filter(|url| Some(*url) != failed)
        .map(str::to_string)
}
