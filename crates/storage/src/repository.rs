use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the single persisted auth-token slot.
///
/// The token is opaque to the application; the slot either holds one
/// string or is empty. It is the only state that survives restarts.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Read the persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be read.
    async fn load_token(&self) -> Result<Option<String>, StorageError>;

    /// Persist the token, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the token cannot be stored.
    async fn save_token(&self, token: &str) -> Result<(), StorageError>;

    /// Empty the slot. Clearing an already-empty slot is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be cleared.
    async fn clear_token(&self) -> Result<(), StorageError>;
}

/// Simple in-memory token slot for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl InMemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: Arc::new(Mutex::new(None)),
        }
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenStore {
    async fn load_token(&self) -> Result<Option<String>, StorageError> {
        let guard = self
            .token
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_token(&self, token: &str) -> Result<(), StorageError> {
        let mut guard = self
            .token
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    async fn clear_token(&self) -> Result<(), StorageError> {
        let mut guard = self
            .token
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub tokens: Arc<dyn TokenRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let tokens: Arc<dyn TokenRepository> = Arc::new(InMemoryTokenStore::new());
        Self { tokens }
    }
}
