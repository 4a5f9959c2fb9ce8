#![forbid(unsafe_code)]

pub mod activity;
pub mod app_services;
pub mod auth_service;
pub mod challenge_service;
pub mod config;
pub mod error;
pub mod progress_service;
pub mod sequence;

pub use activity::{ActivityGuard, ActivityTracker};
pub use app_services::AppServices;
pub use auth_service::{AuthApi, AuthService, HttpAuthApi};
pub use challenge_service::{
    ChallengeApi, ChallengePage, ChallengeQuery, ChallengeService, DEFAULT_PAGE_LIMIT,
    HttpChallengeApi, filter_languages,
};
pub use config::ApiConfig;
pub use error::{AppServicesError, AuthError, FetchError};
pub use progress_service::ProgressService;
pub use sequence::{FetchSequence, FetchTicket};
