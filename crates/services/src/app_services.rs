use std::sync::Arc;

use storage::repository::Storage;

use crate::activity::ActivityTracker;
use crate::auth_service::{AuthApi, AuthService, HttpAuthApi};
use crate::challenge_service::{ChallengeApi, ChallengeService, HttpChallengeApi};
use crate::config::ApiConfig;
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;

/// Assembles app-facing services over one shared activity tracker.
#[derive(Clone)]
pub struct AppServices {
    auth: Arc<AuthService>,
    challenges: Arc<ChallengeService>,
    progress: Arc<ProgressService>,
    activity: Arc<ActivityTracker>,
    clear_progress_on_logout: bool,
}

impl AppServices {
    /// Build services backed by `SQLite` token storage and the real HTTP
    /// APIs.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, config: &ApiConfig) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let auth_api: Arc<dyn AuthApi> = Arc::new(HttpAuthApi::new(config.auth_base_url.clone()));
        let challenge_api: Arc<dyn ChallengeApi> =
            Arc::new(HttpChallengeApi::new(config.challenge_base_url.clone()));
        Ok(Self::assemble(storage, auth_api, challenge_api))
    }

    /// Build services over in-memory storage and caller-supplied APIs.
    /// Used by tests and the UI smoke harness.
    #[must_use]
    pub fn with_storage(
        storage: Storage,
        auth_api: Arc<dyn AuthApi>,
        challenge_api: Arc<dyn ChallengeApi>,
    ) -> Self {
        Self::assemble(storage, auth_api, challenge_api)
    }

    fn assemble(
        storage: Storage,
        auth_api: Arc<dyn AuthApi>,
        challenge_api: Arc<dyn ChallengeApi>,
    ) -> Self {
        let activity = Arc::new(ActivityTracker::new());
        let auth = Arc::new(AuthService::new(
            auth_api,
            Arc::clone(&storage.tokens),
            Arc::clone(&activity),
        ));
        let challenges = Arc::new(ChallengeService::new(challenge_api, Arc::clone(&activity)));
        let progress = Arc::new(ProgressService::new());

        Self {
            auth,
            challenges,
            progress,
            activity,
            clear_progress_on_logout: true,
        }
    }

    /// Whether logging out also clears the progress ledger.
    ///
    /// The upstream behavior left a second account inheriting the first
    /// account's completion history; clearing is the default here but the
    /// old behavior stays selectable.
    #[must_use]
    pub fn with_clear_progress_on_logout(mut self, clear: bool) -> Self {
        self.clear_progress_on_logout = clear;
        self
    }

    #[must_use]
    pub fn clear_progress_on_logout(&self) -> bool {
        self.clear_progress_on_logout
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn challenges(&self) -> Arc<ChallengeService> {
        Arc::clone(&self.challenges)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn activity(&self) -> Arc<ActivityTracker> {
        Arc::clone(&self.activity)
    }
}
