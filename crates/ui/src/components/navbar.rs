use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::components::CompletedChallengesModal;
use crate::context::{AppContext, ProgressTick};
use crate::routes::Route;

/// Top bar for the authenticated pages: brand link, completed-challenges
/// badge, and logout.
#[component]
pub fn Navbar() -> Element {
    let ctx = use_context::<AppContext>();
    let mut tick = use_context::<ProgressTick>();
    let navigator = use_navigator();

    let mut show_completed = use_signal(|| false);

    // The badge is derived on every render; watching the tick keeps it in
    // step with submissions made elsewhere in the app.
    tick.watch();
    let completed_count = ctx.progress().fully_completed_count();

    let logout = {
        let ctx = ctx.clone();
        move |_| {
            let auth = ctx.auth();
            let progress = ctx.progress();
            let clear_progress = ctx.clear_progress_on_logout();
            spawn(async move {
                if auth.logout().await.is_ok() {
                    if clear_progress {
                        progress.clear();
                        tick.bump();
                    }
                    navigator.replace(Route::Login {});
                }
            });
        }
    };

    rsx! {
        nav { class: "navbar",
            Link { class: "brand", to: Route::Challenges {}, "Coding Challenge Platform" }
            div { class: "navbar-actions",
                button {
                    class: "badge-button",
                    onclick: move |_| show_completed.set(true),
                    "Completed Challenges: {completed_count}"
                }
                button {
                    id: "navbar-logout",
                    onclick: logout,
                    "Log out"
                }
            }
        }
        CompletedChallengesModal { show: show_completed }
    }
}
