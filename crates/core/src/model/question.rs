use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::answer::{AnswerPair, AnswerRecord, Slot};
use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question id cannot be empty")]
    EmptyId,

    #[error("question {id}: text cannot be empty")]
    EmptyText { id: String },

    #[error("question {id}: at least one option is required")]
    NoOptions { id: String },

    #[error("question {id}: option value 0 is reserved for unanswered")]
    ReservedOptionValue { id: String },

    #[error("question {id}: duplicate option value {value}")]
    DuplicateOptionValue { id: String, value: u32 },

    #[error("question {id}: physical quantity names cannot be empty")]
    EmptyQuantityName { id: String },

    #[error("question {id}: correct {slot} value {value} is not one of the options")]
    CorrectValueNotAnOption { id: String, slot: Slot, value: u32 },
}

//
// ─── OPTIONS & QUANTITIES ──────────────────────────────────────────────────────
//

/// A selectable choice shown in both option groups of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub value: u32,
}

impl AnswerOption {
    #[must_use]
    pub fn new(label: impl Into<String>, value: u32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Names of the two quantities a question asks about, e.g. "pressure" and "volume".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[String; 2]", into = "[String; 2]")]
pub struct PhysicalQuantities {
    first: String,
    second: String,
}

impl PhysicalQuantities {
    #[must_use]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    #[must_use]
    pub fn second(&self) -> &str {
        &self.second
    }

    #[must_use]
    pub fn name(&self, slot: Slot) -> &str {
        match slot {
            Slot::First => &self.first,
            Slot::Second => &self.second,
        }
    }
}

impl From<[String; 2]> for PhysicalQuantities {
    fn from([first, second]: [String; 2]) -> Self {
        Self { first, second }
    }
}

impl From<PhysicalQuantities> for [String; 2] {
    fn from(quantities: PhysicalQuantities) -> Self {
        [quantities.first, quantities.second]
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Unvalidated question input, typically produced by a question bank loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: String,
    pub number: u32,
    pub text: String,
    pub image_url: Option<String>,
    pub options: Vec<AnswerOption>,
    pub quantities: PhysicalQuantities,
    pub correct: AnswerPair,
}

impl QuestionDraft {
    /// Validate the draft and produce an immutable `Question`.
    ///
    /// A blank image reference is treated as "no image".
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when ids, text, options or the answer key are malformed.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let id = self.id.trim().to_string();
        if id.is_empty() {
            return Err(QuestionError::EmptyId);
        }
        if self.text.trim().is_empty() {
            return Err(QuestionError::EmptyText { id });
        }
        if self.options.is_empty() {
            return Err(QuestionError::NoOptions { id });
        }

        let mut seen = HashSet::with_capacity(self.options.len());
        for option in &self.options {
            if option.value == AnswerPair::UNANSWERED {
                return Err(QuestionError::ReservedOptionValue { id });
            }
            if !seen.insert(option.value) {
                return Err(QuestionError::DuplicateOptionValue {
                    id,
                    value: option.value,
                });
            }
        }

        if self.quantities.first().trim().is_empty() || self.quantities.second().trim().is_empty()
        {
            return Err(QuestionError::EmptyQuantityName { id });
        }

        for slot in Slot::ALL {
            let value = self.correct.get(slot);
            if !seen.contains(&value) {
                return Err(QuestionError::CorrectValueNotAnOption { id, slot, value });
            }
        }

        let image_url = self.image_url.filter(|url| !url.trim().is_empty());

        Ok(Question {
            id: QuestionId::new(id),
            number: self.number,
            text: self.text,
            image_url,
            options: self.options,
            quantities: self.quantities,
            correct: self.correct,
        })
    }
}

/// A validated, immutable test question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    number: u32,
    text: String,
    image_url: Option<String>,
    options: Vec<AnswerOption>,
    quantities: PhysicalQuantities,
    correct: AnswerPair,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    #[must_use]
    pub fn quantities(&self) -> &PhysicalQuantities {
        &self.quantities
    }

    #[must_use]
    pub fn correct_answer(&self) -> AnswerPair {
        self.correct
    }

    /// Grade a submitted pair against this question's key.
    #[must_use]
    pub fn evaluate(&self, answer: AnswerPair) -> AnswerRecord {
        AnswerRecord::evaluate(answer, self.correct)
    }

    /// True when the submitted value for `slot` differs from the key.
    #[must_use]
    pub fn is_slot_wrong(&self, answer: AnswerPair, slot: Slot) -> bool {
        answer.get(slot) != self.correct.get(slot)
    }
}
