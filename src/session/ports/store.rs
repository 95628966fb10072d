//! Storage port for client session state.

use std::sync::Arc;
use thiserror::Error;

/// Result type for session storage operations.
pub type SessionStoreResult<T> = Result<T, SessionStoreError>;

/// String key/value storage contract mirroring browser local storage.
///
/// Values are opaque strings; encoding and decoding belong to the session
/// context, not the store.
pub trait SessionStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Storage`] when the backing store cannot
    /// be read.
    fn read(&self, key: &str) -> SessionStoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Storage`] when the backing store
    /// rejects the write.
    fn write(&self, key: &str, value: &str) -> SessionStoreResult<()>;

    /// Removes the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Storage`] when the backing store
    /// rejects the removal.
    fn remove(&self, key: &str) -> SessionStoreResult<()>;
}

/// Errors returned by session store implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    /// Storage-layer failure.
    #[error("session storage failure: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionStoreError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
