use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use quiz_core::model::{Challenge, ChallengeId};
use services::{
    AppServices, AuthApi, AuthError, ChallengeApi, ChallengePage, ChallengeQuery, FetchError,
};
use storage::repository::Storage;

use crate::context::{ProgressTick, UiApp, build_app_context};
use crate::views::{ChallengeDetailView, ChallengeListView, LoginView};

/// Auth API accepting any credentials; good enough for view smoke tests.
struct AcceptAllAuthApi;

#[async_trait]
impl AuthApi for AcceptAllAuthApi {
    async fn login(&self, _username: &str, _password: &str) -> Result<String, AuthError> {
        Ok("test-token".to_string())
    }
}

/// In-memory challenge API serving a fixed set with simple paging.
struct StaticChallengeApi {
    challenges: Vec<Challenge>,
}

#[async_trait]
impl ChallengeApi for StaticChallengeApi {
    async fn list(&self, query: &ChallengeQuery) -> Result<ChallengePage, FetchError> {
        let limit = query.limit.max(1) as usize;
        let pages = self.challenges.len().div_ceil(limit).max(1) as u32;
        let start = (query.page.saturating_sub(1) as usize) * limit;
        let challenges = self
            .challenges
            .iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect();
        Ok(ChallengePage { challenges, pages })
    }

    async fn get(&self, id: ChallengeId) -> Result<Challenge, FetchError> {
        self.challenges
            .iter()
            .find(|challenge| challenge.id() == id)
            .cloned()
            .ok_or(FetchError::NotFound)
    }
}

/// Challenge API that fails every request.
pub struct FailingChallengeApi;

#[async_trait]
impl ChallengeApi for FailingChallengeApi {
    async fn list(&self, _query: &ChallengeQuery) -> Result<ChallengePage, FetchError> {
        Err(FetchError::UnexpectedResponse("fail".to_string()))
    }

    async fn get(&self, _id: ChallengeId) -> Result<Challenge, FetchError> {
        Err(FetchError::UnexpectedResponse("fail".to_string()))
    }
}

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn auth(&self) -> Arc<services::AuthService> {
        self.services.auth()
    }

    fn challenges(&self) -> Arc<services::ChallengeService> {
        self.services.challenges()
    }

    fn progress(&self) -> Arc<services::ProgressService> {
        self.services.progress()
    }

    fn activity(&self) -> Arc<services::ActivityTracker> {
        self.services.activity()
    }

    fn clear_progress_on_logout(&self) -> bool {
        self.services.clear_progress_on_logout()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Login,
    List,
    Detail(u64),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(ProgressTick::provide);
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::List => rsx! { ChallengeListView {} },
        ViewKind::Detail(id) => rsx! { ChallengeDetailView { id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, challenges: Vec<Challenge>) -> ViewHarness {
    let services = AppServices::with_storage(
        Storage::in_memory(),
        Arc::new(AcceptAllAuthApi),
        Arc::new(StaticChallengeApi { challenges }),
    );
    setup_view_harness_with_services(view, services)
}

pub fn setup_view_harness_failing(view: ViewKind) -> ViewHarness {
    let services = AppServices::with_storage(
        Storage::in_memory(),
        Arc::new(AcceptAllAuthApi),
        Arc::new(FailingChallengeApi),
    );
    setup_view_harness_with_services(view, services)
}

fn setup_view_harness_with_services(view: ViewKind, services: AppServices) -> ViewHarness {
    let app = Arc::new(TestApp {
        services: services.clone(),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, services }
}
