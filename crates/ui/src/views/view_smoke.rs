use quiz_core::model::{AnswerPair, PhysicalQuantities, QuestionDraft, Trend};
use services::TestSession;

use super::test_harness::{
    TEST_TITLE, question, setup_question_view, setup_results_view, setup_test_view,
    three_questions,
};

fn finished_session(review_open: bool) -> TestSession {
    let mut session = TestSession::new(three_questions()).unwrap();
    session.set_answer(AnswerPair::new(1, 2)).unwrap();
    session.go_next().unwrap();
    session.set_answer(AnswerPair::new(2, 1)).unwrap();
    session.go_next().unwrap();
    session.go_next().unwrap();
    if review_open {
        session.toggle_review().unwrap();
    }
    session
}

#[tokio::test(flavor = "current_thread")]
async fn test_view_smoke_renders_first_question() {
    let mut harness = setup_test_view(three_questions());
    let html = harness.render_until("Question 1 of 3").await;

    assert!(html.contains(TEST_TITLE), "missing title in {html}");
    assert!(html.contains("Question 1 of 3"), "missing progress in {html}");
    assert!(html.contains("Time: 0:00"), "missing timer in {html}");
    assert!(html.contains("width: 33.3%"), "missing progress fill in {html}");
    assert!(html.contains("case 1"), "missing prompt in {html}");
    assert!(html.contains("Pressure"), "missing quantity in {html}");
    assert!(html.contains("does not change"), "missing option label in {html}");
    assert!(html.contains("← Back"), "missing back button in {html}");
    assert!(html.contains("Next →"), "missing next button in {html}");
    assert!(html.contains("question-button current"), "missing grid in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn test_view_smoke_clock_runs_while_answering() {
    let mut harness = setup_test_view(three_questions());
    let html = harness.render_until("Question 1 of 3").await;
    assert!(html.contains("Time: 0:00"), "clock should start at zero in {html}");

    tokio::time::sleep(std::time::Duration::from_secs(3)).await;
    let html = harness.render_until("Time: 0:03").await;
    assert!(html.contains("Time: 0:03"), "clock did not advance in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn test_view_smoke_reports_empty_bank() {
    let mut harness = setup_test_view(Vec::new());
    let html = harness.render_until("This test has no questions.").await;
    assert!(html.contains("This test has no questions."), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_marks_answers_in_reveal_mode() {
    let harness = setup_question_view(
        question("q", 4, AnswerPair::new(1, 2)),
        AnswerPair::new(1, 3),
        true,
    );
    let html = harness.render();

    assert!(html.contains("Question 4"), "missing heading in {html}");
    assert!(
        html.contains("The correct answer is highlighted in green"),
        "missing banner in {html}"
    );
    assert!(html.contains("option selected correct"), "missing correct pick in {html}");
    assert!(html.contains("option selected wrong"), "missing wrong pick in {html}");
    assert_eq!(html.matches("correct-marker").count(), 2, "one key per group in {html}");
    assert_eq!(html.matches("wrong-marker").count(), 1, "one wrong mark in {html}");
    assert!(html.contains("disabled"), "inputs should be disabled in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_hides_markers_while_answering() {
    let harness = setup_question_view(
        question("q", 1, AnswerPair::new(1, 2)),
        AnswerPair::new(3, 0),
        false,
    );
    let html = harness.render();

    assert!(html.contains("option selected"), "missing selection in {html}");
    assert!(!html.contains("correct-marker"), "unexpected marker in {html}");
    assert!(!html.contains("highlighted in green"), "unexpected banner in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_renders_image() {
    let question = QuestionDraft {
        id: "img".into(),
        number: 1,
        text: "Look at the diagram".into(),
        image_url: Some("images/diagram.png".into()),
        options: Trend::standard_options(),
        quantities: PhysicalQuantities::new("Current", "Voltage"),
        correct: AnswerPair::new(1, 1),
    }
    .validate()
    .unwrap();
    let harness = setup_question_view(question, AnswerPair::unanswered(), false);
    let html = harness.render();
    assert!(html.contains("image-container"), "missing container in {html}");
    assert!(html.contains("images/diagram.png"), "missing image in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_score_and_review() {
    let harness = setup_results_view(finished_session(true));
    let html = harness.render();

    assert!(html.contains("Test results"), "missing heading in {html}");
    assert!(html.contains("1 of 3"), "missing count in {html}");
    assert!(html.contains("33%"), "missing percentage in {html}");
    assert!(html.contains("score-poor"), "missing band in {html}");
    assert!(html.contains("Time: "), "missing time in {html}");
    assert!(html.contains("Hide answers"), "missing toggle in {html}");
    assert!(html.contains("Start over"), "missing restart in {html}");
    assert!(html.contains("Answer review"), "missing review in {html}");
    assert!(html.contains("✓ Correct"), "missing correct badge in {html}");
    assert!(html.contains("✗ Incorrect"), "missing incorrect badge in {html}");
    assert!(html.contains("— Not answered"), "missing unanswered marker in {html}");
    assert_eq!(html.matches("Correct answer:").count(), 2, "key for q2 and q3 in {html}");
    assert!(html.contains("review-value wrong"), "missing wrong slot flag in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_hides_review_until_toggled() {
    let harness = setup_results_view(finished_session(false));
    let html = harness.render();

    assert!(html.contains("Show answers"), "missing toggle in {html}");
    assert!(!html.contains("Answer review"), "review should be hidden in {html}");
}
