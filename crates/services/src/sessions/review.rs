use quiz_core::model::{AnswerPair, PhysicalQuantities, Question, QuestionId, Slot};

/// Outcome badge for one question on the review screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Correct,
    Incorrect,
    Unanswered,
}

/// One slot of a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotReview {
    pub slot: Slot,
    pub value: u32,
    /// The submitted value differs from the key for this slot.
    pub is_wrong: bool,
}

/// Presentation-agnostic review row for a single question.
///
/// Holds option values, not labels; the UI maps values to display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry {
    pub index: usize,
    pub question_id: QuestionId,
    pub text: String,
    pub quantities: PhysicalQuantities,
    pub status: ReviewStatus,
    /// `None` when the question was never answered.
    pub submitted: Option<[SlotReview; 2]>,
    /// The answer key, present whenever the question was not answered correctly.
    pub expected: Option<AnswerPair>,
}

impl ReviewEntry {
    #[must_use]
    pub fn build(index: usize, question: &Question, answer: Option<AnswerPair>) -> Self {
        let record = answer.map(|answer| question.evaluate(answer));
        let status = match record {
            Some(record) if record.is_correct() => ReviewStatus::Correct,
            Some(_) => ReviewStatus::Incorrect,
            None => ReviewStatus::Unanswered,
        };

        let submitted = record.map(|record| {
            let answer = record.answer();
            Slot::ALL.map(|slot| SlotReview {
                slot,
                value: answer.get(slot),
                is_wrong: question.is_slot_wrong(answer, slot),
            })
        });

        let expected = match status {
            ReviewStatus::Correct => None,
            ReviewStatus::Incorrect | ReviewStatus::Unanswered => Some(question.correct_answer()),
        };

        Self {
            index,
            question_id: question.id().clone(),
            text: question.text().to_owned(),
            quantities: question.quantities().clone(),
            status,
            submitted,
            expected,
        }
    }
}
