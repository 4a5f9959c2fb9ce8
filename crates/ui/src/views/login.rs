use dioxus::prelude::*;
use dioxus_router::use_navigator;

use services::AuthError;

use crate::context::AppContext;
use crate::routes::Route;

/// Credential form at `/`. A successful login lands on the challenge
/// list; rejected credentials surface inline without touching state.
#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<&'static str>);
    let mut submitting = use_signal(|| false);

    let can_submit =
        !submitting() && !username().trim().is_empty() && !password().trim().is_empty();

    let submit = move |_| {
        let auth = ctx.auth();
        let username = username.peek().clone();
        let password = password.peek().clone();
        spawn(async move {
            submitting.set(true);
            error.set(None);
            match auth.login(&username, &password).await {
                Ok(()) => {
                    navigator.push(Route::Challenges {});
                }
                Err(AuthError::InvalidCredentials) => {
                    error.set(Some("Invalid credentials"));
                }
                Err(_) => {
                    error.set(Some("Login failed. Please try again."));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "page login",
            h1 { "Coding Challenge Platform" }
            h2 { "Sign in" }

            div { class: "field",
                label { r#for: "login-username", "Username" }
                input {
                    id: "login-username",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
            }
            div { class: "field",
                label { r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
            }

            if let Some(message) = error() {
                p { class: "error", "{message}" }
            }

            button {
                id: "login-submit",
                disabled: !can_submit,
                onclick: submit,
                if submitting() { "Signing in..." } else { "Sign in" }
            }
        }
    }
}
