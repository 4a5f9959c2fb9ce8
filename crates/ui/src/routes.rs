use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_navigator};

use crate::components::Navbar;
use crate::context::AppContext;
use crate::views::{ChallengeDetailView, ChallengeListView, LoginView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", LoginView)] Login {},
    #[layout(ProtectedLayout)]
        #[route("/challenges", ChallengeListView)] Challenges {},
        #[route("/challenges/:id", ChallengeDetailView)] ChallengeDetail { id: u64 },
}

/// Shell for the authenticated pages: navbar on top, guarded outlet below.
/// Unauthenticated access bounces back to the login route.
#[component]
fn ProtectedLayout() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let authenticated = ctx.auth().is_authenticated();

    use_effect(move || {
        if !authenticated {
            navigator.replace(Route::Login {});
        }
    });

    if !authenticated {
        return rsx! {};
    }

    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
