use std::sync::Arc;

use dioxus::prelude::*;

use services::{ActivityTracker, AuthService, ChallengeService, ProgressService};

pub trait UiApp: Send + Sync {
    fn auth(&self) -> Arc<AuthService>;
    fn challenges(&self) -> Arc<ChallengeService>;
    fn progress(&self) -> Arc<ProgressService>;
    fn activity(&self) -> Arc<ActivityTracker>;

    /// Whether logging out also clears the progress ledger.
    fn clear_progress_on_logout(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    auth: Arc<AuthService>,
    challenges: Arc<ChallengeService>,
    progress: Arc<ProgressService>,
    activity: Arc<ActivityTracker>,
    clear_progress_on_logout: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            auth: app.auth(),
            challenges: app.challenges(),
            progress: app.progress(),
            activity: app.activity(),
            clear_progress_on_logout: app.clear_progress_on_logout(),
        }
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

    #[must_use]
    pub fn clear_progress_on_logout(&self) -> bool {
        self.clear_progress_on_logout
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Render-side change signal for the progress store.
///
/// The store itself is plain shared state; views that derive from it
/// subscribe to this tick and writers bump it after recording, so badges
/// and lists recompute at read time instead of mirroring store data.
#[derive(Clone, Copy)]
pub struct ProgressTick(Signal<u64>);

impl ProgressTick {
    #[must_use]
    pub fn provide() -> Self {
        Self(Signal::new(0))
    }

    /// Subscribe the calling scope to progress changes.
    pub fn watch(&self) -> u64 {
        (self.0)()
    }

    /// Wake subscribed views after a store mutation.
    pub fn bump(&mut self) {
        let next = self.0.peek().wrapping_add(1);
        self.0.set(next);
    }
}
