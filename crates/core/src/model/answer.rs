use serde::{Deserialize, Serialize};
use std::fmt;

//
// ─── SLOT ──────────────────────────────────────────────────────────────────────
//

/// One of the two physical quantities a question asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    /// Both slots in display order.
    pub const ALL: [Slot; 2] = [Slot::First, Slot::Second];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }

    /// Stable name used for radio groups and CSS hooks.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Slot::First => "first",
            Slot::Second => "second",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//
// ─── ANSWER PAIR ───────────────────────────────────────────────────────────────
//

/// The two selections a user makes for one question.
///
/// A value of [`AnswerPair::UNANSWERED`] means nothing was picked for that slot yet.
/// Serialized as a two-element array to match question bank files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct AnswerPair {
    first: u32,
    second: u32,
}

impl AnswerPair {
    pub const UNANSWERED: u32 = 0;

    #[must_use]
    pub const fn new(first: u32, second: u32) -> Self {
        Self { first, second }
    }

    /// A pair with neither slot selected.
    #[must_use]
    pub const fn unanswered() -> Self {
        Self::new(Self::UNANSWERED, Self::UNANSWERED)
    }

    #[must_use]
    pub const fn first(&self) -> u32 {
        self.first
    }

    #[must_use]
    pub const fn second(&self) -> u32 {
        self.second
    }

    #[must_use]
    pub const fn get(&self, slot: Slot) -> u32 {
        match slot {
            Slot::First => self.first,
            Slot::Second => self.second,
        }
    }

    /// Returns a copy with `slot` replaced by `value`; the other slot is kept.
    #[must_use]
    pub const fn with(self, slot: Slot, value: u32) -> Self {
        match slot {
            Slot::First => Self::new(value, self.second),
            Slot::Second => Self::new(self.first, value),
        }
    }

    #[must_use]
    pub const fn is_answered(&self, slot: Slot) -> bool {
        self.get(slot) != Self::UNANSWERED
    }
}

impl From<[u32; 2]> for AnswerPair {
    fn from(values: [u32; 2]) -> Self {
        Self::new(values[0], values[1])
    }
}

impl From<AnswerPair> for [u32; 2] {
    fn from(pair: AnswerPair) -> Self {
        [pair.first, pair.second]
    }
}

//
// ─── ANSWER RECORD ─────────────────────────────────────────────────────────────
//

/// A submitted answer together with its correctness.
///
/// Only constructible through [`AnswerRecord::evaluate`], so `is_correct` always
/// agrees with the stored pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord {
    answer: AnswerPair,
    is_correct: bool,
}

impl AnswerRecord {
    /// Grades `answer` against the expected pair. Both slots must match.
    #[must_use]
    pub fn evaluate(answer: AnswerPair, expected: AnswerPair) -> Self {
        Self {
            answer,
            is_correct: answer == expected,
        }
    }

    #[must_use]
    pub fn answer(&self) -> AnswerPair {
        self.answer
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}
