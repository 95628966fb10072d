//! In-memory session store for tests and native hosts.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::session::ports::{SessionStore, SessionStoreError, SessionStoreResult};

/// Thread-safe in-memory session store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySessionStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn read(&self, key: &str) -> SessionStoreResult<Option<String>> {
        let entries = self.entries.read().map_err(|err| {
            SessionStoreError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> SessionStoreResult<()> {
        let mut entries = self.entries.write().map_err(|err| {
            SessionStoreError::storage(std::io::Error::other(err.to_string()))
        })?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionStoreResult<()> {
        let mut entries = self.entries.write().map_err(|err| {
            SessionStoreError::storage(std::io::Error::other(err.to_string()))
        })?;
        entries.remove(key);
        Ok(())
    }
}
