use std::time::Duration;

use dioxus::prelude::*;

use crate::context::AppContext;

/// Global busy indicator over the request-activity counter.
///
/// The counter is plain shared state, so the overlay samples it on a
/// short interval and only writes the signal on transitions.
#[component]
pub fn LoadingOverlay() -> Element {
    let ctx = use_context::<AppContext>();
    let mut busy = use_signal(|| false);

    let activity = ctx.activity();
    use_future(move || {
        let activity = activity.clone();
        async move {
            loop {
                tokio::time::sleep(Duration::from_millis(100)).await;
                let now_busy = activity.is_busy();
                if *busy.peek() != now_busy {
                    busy.set(now_busy);
                }
            }
        }
    });

    if !busy() {
        return rsx! {};
    }

    rsx! {
        div { class: "loading-overlay",
            div { class: "spinner" }
            p { "Loading..." }
        }
    }
}
