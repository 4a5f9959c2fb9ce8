use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::model::{Level, LanguageId};
use services::{ChallengeQuery, filter_languages};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{ChallengeCardVm, map_challenge_cards};

#[derive(Clone, Debug, PartialEq)]
struct ListData {
    cards: Vec<ChallengeCardVm>,
    pages: u32,
}

/// Paginated, filterable challenge listing at `/challenges`.
#[component]
pub fn ChallengeListView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let mut page = use_signal(|| 1_u32);
    let mut language = use_signal(|| None::<LanguageId>);
    let mut level = use_signal(|| None::<Level>);

    let challenges = ctx.challenges();
    let progress = ctx.progress();
    let resource = use_resource(move || {
        let challenges = challenges.clone();
        let progress = progress.clone();
        let query = ChallengeQuery::page(page())
            .with_language(language())
            .with_level(level());
        async move {
            // A superseded fetch yields no data; the newer one repaints.
            let Some(fetched) = challenges.list_challenges(&query).await? else {
                return Ok(None);
            };
            let cards = map_challenge_cards(&fetched.challenges, progress.as_ref());
            Ok(Some(ListData {
                cards,
                pages: fetched.pages,
            }))
        }
    });

    let state = view_state_from_resource(&resource);
    let total_pages = match &state {
        ViewState::Ready(Some(data)) => data.pages,
        _ => 1,
    };

    rsx! {
        div { class: "page",
            h2 { "Coding Challenges" }

            div { class: "filters",
                div { class: "field",
                    label { r#for: "filter-language", "Language" }
                    select {
                        id: "filter-language",
                        onchange: move |evt| {
                            language.set(evt.value().parse().ok().map(LanguageId::new));
                            page.set(1);
                        },
                        option { value: "", "All Languages" }
                        for lang in filter_languages() {
                            option { value: "{lang.id}", "{lang.name}" }
                        }
                    }
                }
                div { class: "field",
                    label { r#for: "filter-level", "Difficulty" }
                    select {
                        id: "filter-level",
                        onchange: move |evt| {
                            level.set(evt.value().parse().ok());
                            page.set(1);
                        },
                        option { value: "", "All Difficulties" }
                        for item in Level::all() {
                            option { value: "{item}", "{item}" }
                        }
                    }
                }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading | ViewState::Ready(None) => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(Some(data)) => rsx! {
                    if data.cards.is_empty() {
                        p { class: "empty", "No challenges available." }
                    } else {
                        ul { class: "challenge-grid",
                            for card in data.cards {
                                ChallengeCard {
                                    key: "{card.id}",
                                    card,
                                    on_open: move |id: u64| {
                                        navigator.push(Route::ChallengeDetail { id });
                                    },
                                }
                            }
                        }
                    }
                },
                ViewState::Error(_) => rsx! {
                    // Fetch failures fall back to the empty listing.
                    p { class: "empty", "No challenges available." }
                },
            }

            div { class: "pagination",
                button {
                    id: "page-previous",
                    disabled: page() <= 1,
                    onclick: move |_| {
                        let current = page();
                        page.set(current.saturating_sub(1).max(1));
                    },
                    "Previous"
                }
                span { "Page {page} of {total_pages}" }
                button {
                    id: "page-next",
                    disabled: page() >= total_pages,
                    onclick: move |_| {
                        let current = page();
                        page.set((current + 1).min(total_pages));
                    },
                    "Next"
                }
            }
        }
    }
}

#[component]
fn ChallengeCard(card: ChallengeCardVm, on_open: EventHandler<u64>) -> Element {
    rsx! {
        li { class: "challenge-card",
            h3 { "{card.title}" }
            p { class: "muted", "Difficulty: {card.level}" }
            if card.completed {
                span { class: "badge", "Completed" }
            }
            button {
                onclick: move |_| on_open.call(card.id),
                "Attempt Challenge"
            }
        }
    }
}
