use std::collections::BTreeMap;
use std::sync::Arc;

use quiz_core::model::{AnswerPair, AnswerRecord, Question, Slot};
use quiz_core::{Elapsed, Score};
use tracing::debug;

use super::progress::{QuestionStatus, SessionProgress};
use super::review::ReviewEntry;
use crate::error::SessionError;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Where the test currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestPhase {
    /// Questions are being answered; the clock is running.
    Active,
    /// Results are on screen; the clock is frozen. The review overlay can be toggled.
    Results { review_open: bool },
}

/// Result of moving forward through the test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved(usize),
    Finished,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory state of one attempt at a test.
///
/// Owns the current position, the submitted answers and the elapsed time.
/// Correctness, statuses and the score are derived from the stored answers on
/// every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSession {
    questions: Arc<[Question]>,
    current: usize,
    answers: BTreeMap<usize, AnswerPair>,
    elapsed: Elapsed,
    phase: TestPhase,
}

impl TestSession {
    /// Create a session positioned on the first question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn new(questions: impl Into<Arc<[Question]>>) -> Result<Self, SessionError> {
        let questions = questions.into();
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            questions,
            current: 0,
            answers: BTreeMap::new(),
            elapsed: Elapsed::default(),
            phase: TestPhase::Active,
        })
    }

    /// Total number of questions in this test.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.total()
    }

    /// The stored answer for the current question, or an empty pair.
    #[must_use]
    pub fn current_answer(&self) -> AnswerPair {
        self.answers
            .get(&self.current)
            .copied()
            .unwrap_or_else(AnswerPair::unanswered)
    }

    /// The graded answer for `index`, if the user has selected anything there.
    #[must_use]
    pub fn record(&self, index: usize) -> Option<AnswerRecord> {
        let answer = self.answers.get(&index)?;
        let question = self.questions.get(index)?;
        Some(question.evaluate(*answer))
    }

    #[must_use]
    pub fn elapsed(&self) -> Elapsed {
        self.elapsed
    }

    #[must_use]
    pub fn phase(&self) -> TestPhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, TestPhase::Results { .. })
    }

    #[must_use]
    pub fn is_review_open(&self) -> bool {
        matches!(self.phase, TestPhase::Results { review_open: true })
    }

    /// Number of questions with at least one selection.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            position: self.current + 1,
            total: self.total(),
            answered: self.answered_count(),
            is_finished: self.is_finished(),
        }
    }

    fn ensure_active(&self) -> Result<(), SessionError> {
        if self.is_finished() {
            return Err(SessionError::Completed);
        }
        Ok(())
    }

    /// Select `value` for `slot` on the current question, keeping the other slot.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once results are shown and
    /// `SessionError::UnknownOption` if the question does not offer `value`.
    pub fn select_option(&mut self, slot: Slot, value: u32) -> Result<AnswerRecord, SessionError> {
        let answer = self.current_answer().with(slot, value);
        self.set_answer(answer)
    }

    /// Store a whole answer pair for the current question, as reported by the
    /// question view. Either slot may still be unanswered, but not both.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once results are shown,
    /// `SessionError::EmptyAnswer` when neither slot is selected and
    /// `SessionError::UnknownOption` if a slot holds a value the question does not offer.
    pub fn set_answer(&mut self, answer: AnswerPair) -> Result<AnswerRecord, SessionError> {
        self.ensure_active()?;
        if !answer.is_answered(Slot::First) && !answer.is_answered(Slot::Second) {
            return Err(SessionError::EmptyAnswer);
        }

        let question = &self.questions[self.current];
        for slot in Slot::ALL {
            let value = answer.get(slot);
            let offered = question.options().iter().any(|option| option.value == value);
            if answer.is_answered(slot) && !offered {
                return Err(SessionError::UnknownOption { value });
            }
        }

        self.answers.insert(self.current, answer);
        Ok(question.evaluate(answer))
    }

    /// Advance to the next question, or show results from the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once results are shown.
    pub fn go_next(&mut self) -> Result<Navigation, SessionError> {
        self.ensure_active()?;
        if self.is_last() {
            self.phase = TestPhase::Results { review_open: false };
            debug!(
                elapsed_secs = self.elapsed.as_secs(),
                answered = self.answered_count(),
                "test finished"
            );
            return Ok(Navigation::Finished);
        }
        self.current += 1;
        Ok(Navigation::Moved(self.current))
    }

    /// Step back one question; stays put on the first question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once results are shown.
    pub fn go_prev(&mut self) -> Result<usize, SessionError> {
        self.ensure_active()?;
        self.current = self.current.saturating_sub(1);
        Ok(self.current)
    }

    /// Jump straight to any question, answered or not.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::OutOfRange` for an invalid index and
    /// `SessionError::Completed` once results are shown.
    pub fn jump_to(&mut self, index: usize) -> Result<usize, SessionError> {
        self.ensure_active()?;
        if index >= self.total() {
            return Err(SessionError::OutOfRange {
                index,
                total: self.total(),
            });
        }
        self.current = index;
        Ok(self.current)
    }

    /// Show or hide the answer review. Returns the new visibility.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` while the test is still active.
    pub fn toggle_review(&mut self) -> Result<bool, SessionError> {
        match self.phase {
            TestPhase::Active => Err(SessionError::NotFinished),
            TestPhase::Results { review_open } => {
                let review_open = !review_open;
                self.phase = TestPhase::Results { review_open };
                debug!(review_open, "review toggled");
                Ok(review_open)
            }
        }
    }

    /// Count one second of test time. Returns false once the clock is frozen.
    pub fn tick(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.elapsed.tick();
        true
    }

    /// Discard every answer and start over on the first question.
    pub fn restart(&mut self) {
        self.current = 0;
        self.answers.clear();
        self.elapsed = Elapsed::default();
        self.phase = TestPhase::Active;
        debug!(total = self.total(), "test restarted");
    }

    /// Navigation status of question `index`.
    #[must_use]
    pub fn status(&self, index: usize) -> QuestionStatus {
        if index == self.current {
            return QuestionStatus::Current;
        }
        match self.record(index) {
            None => QuestionStatus::Unanswered,
            Some(record) if record.is_correct() => QuestionStatus::Correct,
            Some(_) => QuestionStatus::Incorrect,
        }
    }

    #[must_use]
    pub fn statuses(&self) -> Vec<QuestionStatus> {
        (0..self.total()).map(|index| self.status(index)).collect()
    }

    /// Unanswered questions never count as correct.
    #[must_use]
    pub fn score(&self) -> Score {
        let correct = (0..self.total())
            .filter_map(|index| self.record(index))
            .filter(AnswerRecord::is_correct)
            .count();
        Score::new(correct, self.total())
    }

    #[must_use]
    pub fn review(&self) -> Vec<ReviewEntry> {
        self.questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                ReviewEntry::build(index, question, self.answers.get(&index).copied())
            })
            .collect()
    }
}
