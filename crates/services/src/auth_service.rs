use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use storage::repository::TokenRepository;

use crate::activity::ActivityTracker;
use crate::error::AuthError;

//
// ─── AUTH API ──────────────────────────────────────────────────────────────────
//

/// Contract for the external auth endpoint. Kept as a trait so tests can
/// drive the service without a network.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for an opaque token string.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` when the server rejects the
    /// credentials, or transport-level errors otherwise.
    async fn login(&self, username: &str, password: &str) -> Result<String, AuthError>;
}

/// `POST {base}/login` against the real auth API.
#[derive(Clone)]
pub struct HttpAuthApi {
    client: Client,
    base_url: String,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let url = format!("{}/login", self.base_url.trim_end_matches('/'));
        let payload = LoginRequest { username, password };

        let response = self.client.post(url).json(&payload).send().await?;

        let status = response.status();
        if status.is_client_error() {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(AuthError::HttpStatus(status));
        }

        let body: LoginResponse = response.json().await?;
        Ok(body.token)
    }
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

//
// ─── AUTH SERVICE ──────────────────────────────────────────────────────────────
//

/// Authentication state over the persistent token slot.
///
/// The flag is derived from token presence: set on successful login,
/// cleared on logout, and rebuilt from storage at startup so auth
/// survives restarts. The token itself stays opaque; there is no
/// validation or expiry handling here.
pub struct AuthService {
    api: Arc<dyn AuthApi>,
    tokens: Arc<dyn TokenRepository>,
    activity: Arc<ActivityTracker>,
    authenticated: AtomicBool,
}

impl AuthService {
    #[must_use]
    pub fn new(
        api: Arc<dyn AuthApi>,
        tokens: Arc<dyn TokenRepository>,
        activity: Arc<ActivityTracker>,
    ) -> Self {
        Self {
            api,
            tokens,
            activity,
            authenticated: AtomicBool::new(false),
        }
    }

    /// Initialize the auth flag from the persisted token at process start.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the token slot cannot be read.
    pub async fn bootstrap(&self) -> Result<bool, AuthError> {
        let token = self.tokens.load_token().await?;
        let present = token.is_some();
        self.authenticated.store(present, Ordering::Release);
        Ok(present)
    }

    /// Log in against the auth API and persist the returned token.
    ///
    /// On failure nothing is mutated: the flag and the slot keep their
    /// previous values, and the activity guard is released either way.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for rejected credentials,
    /// or transport/storage errors.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let _guard = self.activity.begin();

        let token = self.api.login(username, password).await?;
        self.tokens.save_token(&token).await?;
        self.authenticated.store(true, Ordering::Release);
        Ok(())
    }

    /// Clear the persisted token and the auth flag.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the slot cannot be cleared.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.tokens.clear_token().await?;
        self.authenticated.store(false, Ordering::Release);
        Ok(())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unauthenticated() {
        struct NeverApi;

        #[async_trait]
        impl AuthApi for NeverApi {
            async fn login(&self, _username: &str, _password: &str) -> Result<String, AuthError> {
                Err(AuthError::InvalidCredentials)
            }
        }

        let service = AuthService::new(
            Arc::new(NeverApi),
            Arc::new(storage::repository::InMemoryTokenStore::new()),
            Arc::new(ActivityTracker::new()),
        );
        assert!(!service.is_authenticated());
    }
}
