use std::env;

/// Base URLs for the external challenge and auth APIs.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub challenge_base_url: String,
    pub auth_base_url: String,
}

impl ApiConfig {
    /// Read API endpoints from the environment, with local defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let challenge_base_url = env::var("QUIZ_CHALLENGE_API")
            .unwrap_or_else(|_| "http://localhost:4000/challenges".into());
        let auth_base_url =
            env::var("QUIZ_AUTH_API").unwrap_or_else(|_| "http://localhost:4000/auth".into());
        Self {
            challenge_base_url,
            auth_base_url,
        }
    }

    #[must_use]
    pub fn new(challenge_base_url: impl Into<String>, auth_base_url: impl Into<String>) -> Self {
        Self {
            challenge_base_url: challenge_base_url.into(),
            auth_base_url: auth_base_url.into(),
        }
    }
}
