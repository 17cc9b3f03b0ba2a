use dioxus::prelude::*;

use crate::vm::{NOT_ANSWERED_MARKER, ResultsVm, ReviewEntryVm, ReviewValueVm};

#[component]
pub fn ResultsView(
    results: ResultsVm,
    review: Option<Vec<ReviewEntryVm>>,
    on_toggle_review: EventHandler<()>,
    on_restart: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "results",
            h2 { "Test results" }
            div { class: "results-summary",
                p { "Correct answers: "
                    strong { "{results.correct_label}" }
                }
                p { "Score: "
                    strong { class: results.band_class, "{results.percentage_label}" }
                }
                p { "Time: "
                    strong { "{results.time_label}" }
                }
            }
            div { class: "results-actions",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_toggle_review.call(()),
                    "{results.toggle_label}"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_restart.call(()),
                    "Start over"
                }
            }

            if let Some(entries) = review {
                div { class: "review",
                    h3 { "Answer review" }
                    for entry in entries {
                        ReviewEntryCard { key: "{entry.key}", entry: entry.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ReviewEntryCard(entry: ReviewEntryVm) -> Element {
    rsx! {
        div { class: "review-entry {entry.status_class}",
            div { class: "review-entry-header",
                span { class: "review-entry-heading", "{entry.heading}" }
                span { class: "review-status {entry.status_class}", "{entry.status_label}" }
            }
            p { class: "review-entry-text", "{entry.text}" }
            div { class: "review-answer",
                strong { "Your answer:" }
                match entry.submitted {
                    Some(values) => rsx! {
                        ReviewValues { values }
                    },
                    None => rsx! {
                        span { class: "not-answered", "{NOT_ANSWERED_MARKER}" }
                    },
                }
            }
            if let Some(values) = entry.expected {
                div { class: "review-answer expected",
                    strong { "Correct answer:" }
                    ReviewValues { values }
                }
            }
        }
    }
}

fn value_class(is_wrong: bool) -> &'static str {
    if is_wrong { "review-value wrong" } else { "review-value" }
}

#[component]
fn ReviewValues(values: Vec<ReviewValueVm>) -> Element {
    rsx! {
        ul { class: "review-values",
            for (index, value) in values.into_iter().enumerate() {
                li { key: "{index}", class: value_class(value.is_wrong),
                    "{value.quantity}: {value.label}"
                }
            }
        }
    }
}
