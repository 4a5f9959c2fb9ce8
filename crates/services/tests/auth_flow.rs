use std::sync::Arc;

use async_trait::async_trait;

use services::{ActivityTracker, AuthApi, AuthError, AuthService};
use storage::repository::{InMemoryTokenStore, TokenRepository};

struct FakeAuthApi;

#[async_trait]
impl AuthApi for FakeAuthApi {
    async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        if username == "alice" && password == "secret" {
            Ok("abc".to_string())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

fn build_service(tokens: Arc<InMemoryTokenStore>) -> (AuthService, Arc<ActivityTracker>) {
    let activity = Arc::new(ActivityTracker::new());
    let service = AuthService::new(Arc::new(FakeAuthApi), tokens, Arc::clone(&activity));
    (service, activity)
}

#[tokio::test]
async fn bootstrap_login_logout_round_trip() {
    let tokens = Arc::new(InMemoryTokenStore::new());
    let (service, _activity) = build_service(Arc::clone(&tokens));

    // Empty slot: bootstrap leaves the app unauthenticated.
    assert!(!service.bootstrap().await.unwrap());
    assert!(!service.is_authenticated());

    service.login("alice", "secret").await.unwrap();
    assert!(service.is_authenticated());
    assert_eq!(tokens.load_token().await.unwrap(), Some("abc".to_string()));

    service.logout().await.unwrap();
    assert!(!service.is_authenticated());
    assert_eq!(tokens.load_token().await.unwrap(), None);
}

#[tokio::test]
async fn bootstrap_restores_auth_from_persisted_token() {
    let tokens = Arc::new(InMemoryTokenStore::new());
    tokens.save_token("persisted").await.unwrap();

    // A fresh service models a process restart over the same slot.
    let (service, _activity) = build_service(tokens);
    assert!(service.bootstrap().await.unwrap());
    assert!(service.is_authenticated());
}

#[tokio::test]
async fn rejected_credentials_mutate_nothing() {
    let tokens = Arc::new(InMemoryTokenStore::new());
    let (service, activity) = build_service(Arc::clone(&tokens));

    let err = service.login("alice", "wrong").await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));

    assert!(!service.is_authenticated());
    assert_eq!(tokens.load_token().await.unwrap(), None);
    // The activity guard released on the failure path.
    assert_eq!(activity.count(), 0);
    assert!(!activity.is_busy());
}

#[tokio::test]
async fn failed_login_keeps_previous_session() {
    let tokens = Arc::new(InMemoryTokenStore::new());
    let (service, _activity) = build_service(Arc::clone(&tokens));

    service.login("alice", "secret").await.unwrap();
    let _ = service.login("alice", "wrong").await.unwrap_err();

    // Prior state is intact after a locally recoverable failure.
    assert!(service.is_authenticated());
    assert_eq!(tokens.load_token().await.unwrap(), Some("abc".to_string()));
}
