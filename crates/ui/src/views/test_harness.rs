use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{AnswerPair, PhysicalQuantities, Question, QuestionDraft, Trend};
use services::{QuestionBankService, TestSession};

use crate::context::{UiApp, build_app_context};
use crate::views::{QuestionView, ResultsView, TestView};
use crate::vm::{map_results, map_review_entries};

pub const TEST_TITLE: &str = "Physics test";

#[derive(Clone)]
struct TestApp {
    bank: Arc<QuestionBankService>,
}

impl UiApp for TestApp {
    fn test_title(&self) -> String {
        TEST_TITLE.to_string()
    }

    fn question_bank(&self) -> Arc<QuestionBankService> {
        Arc::clone(&self.bank)
    }
}

pub fn question(id: &str, number: u32, correct: AnswerPair) -> Question {
    QuestionDraft {
        id: id.into(),
        number,
        text: format!("How do the quantities change in case {number}?"),
        image_url: None,
        options: Trend::standard_options(),
        quantities: PhysicalQuantities::new("Pressure", "Volume"),
        correct,
    }
    .validate()
    .expect("valid question")
}

pub fn three_questions() -> Vec<Question> {
    vec![
        question("q1", 1, AnswerPair::new(1, 2)),
        question("q2", 2, AnswerPair::new(2, 3)),
        question("q3", 3, AnswerPair::new(3, 1)),
    ]
}

// ─── Harness components ────────────────────────────────────────────────────

#[derive(Props, Clone)]
struct TestViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for TestViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn TestViewHarness(props: TestViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { TestView {} }
}

#[component]
fn QuestionHarness(question: Question, answer: AnswerPair, reveal: bool) -> Element {
    rsx! {
        QuestionView { question, answer, reveal, on_change: move |_| {} }
    }
}

#[component]
fn ResultsHarness(session: TestSession) -> Element {
    let results = map_results(&session);
    let review = session
        .is_review_open()
        .then(|| map_review_entries(&session.review()));
    rsx! {
        ResultsView {
            results,
            review,
            on_toggle_review: move |()| {},
            on_restart: move |()| {},
        }
    }
}

// ─── Harness ───────────────────────────────────────────────────────────────

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive pending work until `needle` shows up or the attempts run out.
    pub async fn render_until(&mut self, needle: &str) -> String {
        for _ in 0..10 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_test_view(questions: Vec<Question>) -> ViewHarness {
    let app = Arc::new(TestApp {
        bank: Arc::new(QuestionBankService::in_memory(questions)),
    });
    let mut harness = ViewHarness {
        dom: VirtualDom::new_with_props(TestViewHarness, TestViewHarnessProps { app }),
    };
    harness.rebuild();
    harness
}

pub fn setup_question_view(question: Question, answer: AnswerPair, reveal: bool) -> ViewHarness {
    let mut harness = ViewHarness {
        dom: VirtualDom::new_with_props(
            QuestionHarness,
            QuestionHarnessProps {
                question,
                answer,
                reveal,
            },
        ),
    };
    harness.rebuild();
    harness
}

pub fn setup_results_view(session: TestSession) -> ViewHarness {
    let mut harness = ViewHarness {
        dom: VirtualDom::new_with_props(ResultsHarness, ResultsHarnessProps { session }),
    };
    harness.rebuild();
    harness
}
