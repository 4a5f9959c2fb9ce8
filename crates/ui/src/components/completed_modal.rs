use dioxus::prelude::*;

use quiz_core::aggregate::SortOrder;

use crate::context::{AppContext, ProgressTick};
use crate::vm::{CompletedChallengeVm, map_completed_challenges};

/// Modal listing fully completed challenges with their total times,
/// sortable by time in either direction. The listing is derived from the
/// progress store on every render, never stored.
#[component]
pub fn CompletedChallengesModal(show: Signal<bool>) -> Element {
    let ctx = use_context::<AppContext>();
    let tick = use_context::<ProgressTick>();

    let mut order = use_signal(|| SortOrder::Ascending);

    if !show() {
        return rsx! {};
    }

    tick.watch();
    let completed: Vec<CompletedChallengeVm> =
        map_completed_challenges(&ctx.progress().completed_challenges_from_ledger(order()));

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                header {
                    h3 { "Completed Challenges" }
                    button {
                        class: "modal-close",
                        onclick: move |_| show.set(false),
                        "×"
                    }
                }

                div { class: "field",
                    label { r#for: "completed-sort", "Sort by Time:" }
                    select {
                        id: "completed-sort",
                        onchange: move |evt| {
                            let next = if evt.value() == "desc" {
                                SortOrder::Descending
                            } else {
                                SortOrder::Ascending
                            };
                            order.set(next);
                        },
                        option { value: "asc", "Ascending" }
                        option { value: "desc", "Descending" }
                    }
                }

                if completed.is_empty() {
                    p { class: "muted", "No challenges fully completed yet." }
                } else {
                    ul { class: "completed-list",
                        for item in completed {
                            li { key: "{item.id}",
                                span { class: "title", "{item.title}" }
                                span { class: "muted", "Total Time: {item.total_time}" }
                            }
                        }
                    }
                }

                footer {
                    button { onclick: move |_| show.set(false), "Close" }
                }
            }
        }
    }
}
