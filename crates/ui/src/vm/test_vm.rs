use services::TestSession;

use crate::vm::time_fmt::format_timer;

#[derive(Clone, Debug, PartialEq)]
pub struct TestHeaderVm {
    pub progress_label: String,
    pub timer_label: String,
    pub fill_style: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavButtonVm {
    pub index: usize,
    pub label: String,
    pub title: String,
    pub class: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationVm {
    pub can_go_back: bool,
    pub next_label: &'static str,
    pub buttons: Vec<NavButtonVm>,
}

#[must_use]
pub fn map_test_header(session: &TestSession) -> TestHeaderVm {
    let progress = session.progress();
    TestHeaderVm {
        progress_label: format!("Question {} of {}", progress.position, progress.total),
        timer_label: format_timer(session.elapsed()),
        fill_style: format!("width: {:.1}%", progress.fill_percent()),
    }
}

#[must_use]
pub fn map_navigation(session: &TestSession) -> NavigationVm {
    let buttons = session
        .statuses()
        .into_iter()
        .enumerate()
        .map(|(index, status)| NavButtonVm {
            index,
            label: (index + 1).to_string(),
            title: format!("Question {}", index + 1),
            class: format!("question-button {}", status.css_class()),
        })
        .collect();

    NavigationVm {
        can_go_back: session.current_index() > 0,
        next_label: if session.is_last() { "Finish" } else { "Next →" },
        buttons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{AnswerPair, PhysicalQuantities, QuestionDraft, Slot, Trend};

    fn session(count: u32) -> TestSession {
        let questions: Vec<_> = (1..=count)
            .map(|number| {
                QuestionDraft {
                    id: format!("q{number}"),
                    number,
                    text: "Text".into(),
                    image_url: None,
                    options: Trend::standard_options(),
                    quantities: PhysicalQuantities::new("A", "B"),
                    correct: AnswerPair::new(1, 1),
                }
                .validate()
                .unwrap()
            })
            .collect();
        TestSession::new(questions).unwrap()
    }

    #[test]
    fn header_reports_position_and_time() {
        let mut session = session(3);
        session.tick();
        let header = map_test_header(&session);
        assert_eq!(header.progress_label, "Question 1 of 3");
        assert_eq!(header.timer_label, "Time: 0:01");
        assert_eq!(header.fill_style, "width: 33.3%");
    }

    #[test]
    fn navigation_labels_follow_position() {
        let mut session = session(2);
        let nav = map_navigation(&session);
        assert!(!nav.can_go_back);
        assert_eq!(nav.next_label, "Next →");

        session.select_option(Slot::First, 1).unwrap();
        session.select_option(Slot::Second, 1).unwrap();
        session.go_next().unwrap();
        let nav = map_navigation(&session);
        assert!(nav.can_go_back);
        assert_eq!(nav.next_label, "Finish");
        assert_eq!(nav.buttons[0].class, "question-button correct");
        assert_eq!(nav.buttons[1].class, "question-button current");
        assert_eq!(nav.buttons[1].label, "2");
        assert_eq!(nav.buttons[1].title, "Question 2");
    }
}
