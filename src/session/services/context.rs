//! Explicit session context over client-local storage.

use std::sync::Arc;
use thiserror::Error;

use crate::account::domain::UserRecord;
use crate::session::domain::ThemeName;
use crate::session::ports::{SessionStore, SessionStoreError};

/// Storage key for the logged-in user record.
const USER_KEY: &str = "user";

/// Storage key for the persisted theme preference.
const THEME_KEY: &str = "appTheme";

/// Result type for session context operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors returned by the session context.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The backing store failed.
    #[error(transparent)]
    Store(#[from] SessionStoreError),
    /// The user record could not be encoded for storage.
    #[error("session record encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Session context handed to protected views at construction.
///
/// Views read the logged-in user through [`SessionContext::load`] on entry
/// and clear it on logout; nothing else in the crate touches the backing
/// store directly.
#[derive(Debug, Clone)]
pub struct SessionContext<S: SessionStore> {
    store: Arc<S>,
}

impl<S: SessionStore> SessionContext<S> {
    /// Creates a context over the given store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the logged-in user record, if one is stored.
    ///
    /// A stored record that fails to decode is treated as absent: the view
    /// falls back to the logged-out state instead of crashing on a corrupt
    /// entry.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] when the backing store cannot be
    /// read.
    pub fn load(&self) -> SessionResult<Option<UserRecord>> {
        let Some(raw) = self.store.read(USER_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str::<UserRecord>(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(err) => {
                tracing::warn!(%err, "discarding corrupt session record");
                Ok(None)
            }
        }
    }

    /// Persists the logged-in user record.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the record cannot be encoded or the
    /// backing store rejects the write.
    pub fn store_user(&self, user: &UserRecord) -> SessionResult<()> {
        let encoded = serde_json::to_string(user)?;
        self.store.write(USER_KEY, &encoded)?;
        Ok(())
    }

    /// Removes the logged-in user record.
    ///
    /// The theme preference survives logout, matching the original client.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] when the backing store rejects the
    /// removal.
    pub fn clear(&self) -> SessionResult<()> {
        self.store.remove(USER_KEY)?;
        Ok(())
    }

    /// Returns the persisted theme preference.
    ///
    /// Absent or unknown stored names fall back to [`ThemeName::Default`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] when the backing store cannot be
    /// read.
    pub fn theme(&self) -> SessionResult<ThemeName> {
        let Some(raw) = self.store.read(THEME_KEY)? else {
            return Ok(ThemeName::default());
        };
        Ok(ThemeName::try_from(raw.as_str()).unwrap_or_default())
    }

    /// Persists the theme preference.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] when the backing store rejects the
    /// write.
    pub fn set_theme(&self, theme: ThemeName) -> SessionResult<()> {
        self.store.write(THEME_KEY, theme.as_str())?;
        Ok(())
    }
}
