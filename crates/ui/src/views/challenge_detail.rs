use std::time::Duration;

use dioxus::prelude::*;

use quiz_core::model::{Challenge, ChallengeId, QuestionId};

use crate::context::{AppContext, ProgressTick};
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::format_seconds;

/// One in-flight question attempt, driving the modal and its timer.
#[derive(Clone, Debug, PartialEq)]
struct AttemptState {
    question_id: QuestionId,
    selected: Option<String>,
    elapsed: u32,
    submitted: bool,
    correct: bool,
}

impl AttemptState {
    fn start(question_id: QuestionId) -> Self {
        Self {
            question_id,
            selected: None,
            elapsed: 0,
            submitted: false,
            correct: false,
        }
    }
}

/// Challenge detail at `/challenges/:id`: progress bar, question cards,
/// and the attempt modal.
#[component]
pub fn ChallengeDetailView(id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let mut tick = use_context::<ProgressTick>();
    let challenge_id = ChallengeId::new(id);

    let challenges = ctx.challenges();
    let resource = use_resource(move || {
        let challenges = challenges.clone();
        async move {
            let challenge = challenges.challenge_by_id(challenge_id).await?;
            Ok(challenge)
        }
    });

    let mut attempt = use_signal(|| None::<AttemptState>);

    // Elapsed-seconds ticker; pauses once the answer is submitted and
    // while no attempt is open.
    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            let ticking = attempt.peek().as_ref().is_some_and(|state| !state.submitted);
            if ticking {
                if let Some(state) = attempt.write().as_mut() {
                    state.elapsed += 1;
                }
            }
        }
    });

    // Re-derive completion state whenever the progress store changes.
    tick.watch();
    let progress = ctx.progress();

    let body = match view_state_from_resource(&resource) {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { class: "muted", "Loading challenge..." }
        },
        ViewState::Error(err) => rsx! {
            p { class: "muted", "{err.message()}" }
        },
        ViewState::Ready(challenge) => {
            let completed_count = progress.completed_count(challenge_id);
            let total_questions = challenge.total_questions();
            let percentage = if total_questions > 0 {
                (completed_count as f64 / total_questions as f64) * 100.0
            } else {
                0.0
            };
            let fully_completed = total_questions > 0 && completed_count == total_questions;

            let question_cards = challenge.questions().iter().map(|question| {
                let question_id = question.id();
                let completed = progress.is_question_completed(challenge_id, question_id);
                let time_label = progress
                    .time_spent_for(challenge_id, question_id)
                    .map_or_else(|| "N/A".to_string(), format_seconds);
                rsx! {
                    li { class: "question-card", key: "{question_id}",
                        h3 { "{question.text()}" }
                        p { class: "muted", "Time Spent: {time_label}" }
                        button {
                            disabled: completed,
                            onclick: move |_| {
                                attempt.set(Some(AttemptState::start(question_id)));
                            },
                            if completed { "Completed" } else { "Attempt" }
                        }
                    }
                }
            });

            let on_submit = {
                let challenge = challenge.clone();
                let progress = progress.clone();
                move |()| {
                    let Some(mut state) = attempt.peek().clone() else {
                        return;
                    };
                    let Some(selected) = state.selected.clone() else {
                        return;
                    };
                    let Some(question) = challenge.question(state.question_id) else {
                        return;
                    };

                    state.submitted = true;
                    state.correct = question.is_correct(&selected);
                    if state.correct {
                        progress.record_completion(
                            challenge_id,
                            state.question_id,
                            challenge.title(),
                            challenge.total_questions(),
                        );
                        progress.record_time(challenge_id, state.question_id, state.elapsed);
                        tick.bump();
                    }
                    attempt.set(Some(state));
                }
            };

            rsx! {
                header { class: "challenge-header",
                    h2 { "{challenge.title()}" }
                    if fully_completed {
                        span { class: "badge", "Fully Completed" }
                    }
                }
                p { class: "muted",
                    "Difficulty: {challenge.level()} | Language: {challenge.language().name}"
                }

                div { class: "progress",
                    div {
                        class: "progress-bar",
                        style: "width: {percentage}%",
                    }
                }
                p { class: "muted",
                    "Progress: {completed_count} / {total_questions} ({percentage:.1}%)"
                }

                ul { class: "question-grid", {question_cards} }

                AttemptModal {
                    challenge: challenge.clone(),
                    attempt,
                    on_submit,
                }
            }
        }
    };

    rsx! {
        div { class: "page", {body} }
    }
}

#[component]
fn AttemptModal(
    challenge: Challenge,
    attempt: Signal<Option<AttemptState>>,
    on_submit: EventHandler<()>,
) -> Element {
    let Some(state) = attempt() else {
        return rsx! {};
    };
    let Some(question) = challenge.question(state.question_id) else {
        return rsx! {};
    };

    let elapsed = format_seconds(state.elapsed);
    let submitted = state.submitted;

    let options = question.options().iter().map(|option| {
        let checked = state.selected.as_deref() == Some(option.as_str());
        let value = option.clone();
        rsx! {
            li { key: "{option}",
                label {
                    input {
                        r#type: "radio",
                        name: "attempt-option",
                        checked,
                        disabled: submitted,
                        onchange: move |_| {
                            if let Some(current) = attempt.write().as_mut() {
                                current.selected = Some(value.clone());
                            }
                        },
                    }
                    "{option}"
                }
            }
        }
    });

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                header {
                    h3 { "{question.text()}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| attempt.set(None),
                        "×"
                    }
                }

                p { class: "muted", "Time Elapsed: {elapsed}" }

                ul { class: "options", {options} }

                if state.submitted {
                    if state.correct {
                        p { class: "result correct", "Correct! Time spent: {elapsed}" }
                    } else {
                        p { class: "result incorrect",
                            "Incorrect! The answer is: \"{question.answer()}\""
                        }
                    }
                }

                footer {
                    if state.submitted {
                        button { onclick: move |_| attempt.set(None), "Close" }
                    } else {
                        button {
                            disabled: state.selected.is_none(),
                            onclick: move |_| on_submit.call(()),
                            "Submit"
                        }
                    }
                }
            }
        }
    }
}
