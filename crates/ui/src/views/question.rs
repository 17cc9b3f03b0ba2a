use dioxus::prelude::*;
use quiz_core::model::{AnswerPair, Question};

use crate::vm::{map_question, visible_image};

/// One question with two independent option groups.
///
/// Holds no test state: the caller owns the answer and receives every change
/// through `on_change` as a complete pair.
#[component]
pub fn QuestionView(
    question: Question,
    answer: AnswerPair,
    on_change: EventHandler<AnswerPair>,
    #[props(default)] reveal: bool,
) -> Element {
    // Render-only: remembers which image failed so it stays hidden.
    let mut failed_image = use_signal(|| None::<String>);
    let vm = map_question(&question, answer, reveal);
    let image = visible_image(vm.image_url.as_deref(), failed_image.read().as_deref());

    rsx! {
        div { class: "question",
            h3 { class: "question-number", "{vm.heading}" }
            div { class: "question-text", "{vm.text}" }

            if let Some(url) = image {
                div { class: "image-container",
                    img {
                        src: "{url}",
                        alt: "Illustration for the question",
                        onerror: move |_| failed_image.set(Some(url.clone())),
                    }
                }
            }

            if vm.reveal {
                div { class: "correct-answer-banner", "The correct answer is highlighted in green" }
            }

            div { class: "answer-section",
                for group in vm.groups {
                    div { key: "{group.slot}", class: "answer-column",
                        h4 { class: "quantity-title", "{group.quantity}" }
                        div { class: "options",
                            for option in group.options {
                                label { key: "{option.slot}-{option.value}", class: "{option.class()}",
                                    input {
                                        r#type: "radio",
                                        name: "{option.slot}",
                                        value: "{option.value}",
                                        checked: option.selected,
                                        disabled: option.disabled,
                                        onchange: move |_| on_change.call(option.emits),
                                    }
                                    span { "{option.label}" }
                                    if let Some(marker) = option.mark.marker() {
                                        span { class: option.mark.marker_class(), " {marker}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
