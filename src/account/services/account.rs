//! Registration, login, and profile flows.

use std::sync::Arc;
use thiserror::Error;

use crate::account::domain::{
    AccountDomainError, Credentials, ProfileUpdate, RegistrationRequest, UserRecord,
};
use crate::account::ports::{UserApi, UserApiError};
use crate::session::ports::SessionStore;
use crate::session::services::{SessionContext, SessionError};

/// Service-level errors for account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Form validation failed.
    #[error(transparent)]
    Domain(#[from] AccountDomainError),
    /// The remote user API rejected the request or was unreachable.
    #[error(transparent)]
    Api(#[from] UserApiError),
    /// The session could not be read or written.
    #[error(transparent)]
    Session(#[from] SessionError),
    /// A profile operation was attempted without a logged-in user.
    #[error("no user is logged in")]
    NotLoggedIn,
}

/// Result type for account service operations.
pub type AccountResult<T> = Result<T, AccountError>;

/// Account orchestration service.
///
/// Drives the registration, login, and profile forms end-to-end: domain
/// payloads validate themselves at construction, the service issues the
/// remote call, and confirmed login/profile responses are written through
/// the session context. Failures surface to the caller for form-level
/// display; nothing is retried.
#[derive(Clone)]
pub struct AccountService<A, S>
where
    A: UserApi,
    S: SessionStore,
{
    api: Arc<A>,
    session: SessionContext<S>,
}

impl<A, S> AccountService<A, S>
where
    A: UserApi,
    S: SessionStore,
{
    /// Creates an account service over the given port and session context.
    #[must_use]
    pub const fn new(api: Arc<A>, session: SessionContext<S>) -> Self {
        Self { api, session }
    }

    /// Returns the session context shared with the views.
    #[must_use]
    pub const fn session(&self) -> &SessionContext<S> {
        &self.session
    }

    /// Registers a new account.
    ///
    /// Registration does not log the user in; the original flow sends the
    /// user to the login form afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::Api`] when the endpoint rejects the request
    /// or cannot be reached.
    pub async fn register(&self, request: &RegistrationRequest) -> AccountResult<UserRecord> {
        let record = self.api.register(request).await?;
        Ok(record)
    }

    /// Logs in and persists the confirmed user record in the session.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::Api`] for rejected credentials or transport
    /// problems; the session is only written after the remote side
    /// confirms.
    pub async fn login(&self, credentials: &Credentials) -> AccountResult<UserRecord> {
        let record = self.api.login(credentials).await?;
        self.session.store_user(&record)?;
        Ok(record)
    }

    /// Clears the logged-in user from the session.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::Session`] when the backing store rejects the
    /// removal.
    pub fn logout(&self) -> AccountResult<()> {
        self.session.clear()?;
        Ok(())
    }

    /// Returns the logged-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::Session`] when the session cannot be read.
    pub fn current_user(&self) -> AccountResult<Option<UserRecord>> {
        Ok(self.session.load()?)
    }

    /// Updates the logged-in user's profile and refreshes the session.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::NotLoggedIn`] without a session user, and
    /// [`AccountError::Api`] when the endpoint rejects the update; the
    /// session keeps the previous record in that case.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> AccountResult<UserRecord> {
        let current = self.current_user()?.ok_or(AccountError::NotLoggedIn)?;
        let record = self.api.update_profile(current.id, update).await?;
        self.session.store_user(&record)?;
        Ok(record)
    }
}
