use dioxus::prelude::*;
use dioxus_router::Router;

use crate::components::LoadingOverlay;
use crate::context::ProgressTick;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    use_context_provider(ProgressTick::provide);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. Per-route titles are rendered in the pages.
        document::Title { "CodeQuiz" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
            LoadingOverlay {}
        }
    }
}
