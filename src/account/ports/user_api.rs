//! Remote user API contract.

use crate::account::domain::{Credentials, ProfileUpdate, RegistrationRequest, UserId, UserRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user API operations.
pub type UserApiResult<T> = Result<T, UserApiError>;

/// Remote user API surface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Creates a new account and returns the stored user record.
    ///
    /// # Errors
    ///
    /// Returns [`UserApiError`] when the endpoint rejects the request or
    /// cannot be reached.
    async fn register(&self, request: &RegistrationRequest) -> UserApiResult<UserRecord>;

    /// Exchanges credentials for the matching user record.
    ///
    /// # Errors
    ///
    /// Returns [`UserApiError::Status`] for rejected credentials and other
    /// [`UserApiError`] variants for transport problems.
    async fn login(&self, credentials: &Credentials) -> UserApiResult<UserRecord>;

    /// Updates profile fields (and optionally the password) for a user.
    ///
    /// # Errors
    ///
    /// Returns [`UserApiError`] when the endpoint rejects the update or
    /// cannot be reached.
    async fn update_profile(
        &self,
        user_id: UserId,
        update: &ProfileUpdate,
    ) -> UserApiResult<UserRecord>;

    /// Returns the full user directory used by the assignee search.
    ///
    /// # Errors
    ///
    /// Returns [`UserApiError`] when the listing cannot be fetched.
    async fn list_directory(&self) -> UserApiResult<Vec<UserRecord>>;
}

/// Errors returned by user API implementations.
#[derive(Debug, Clone, Error)]
pub enum UserApiError {
    /// The endpoint answered with a non-success status code.
    #[error("user endpoint returned status {0}")]
    Status(u16),

    /// The request never produced a response.
    #[error("user endpoint transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The response body did not match the expected shape.
    #[error("user endpoint returned a malformed payload: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserApiError {
    /// Wraps a transport-level failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a payload-decoding failure.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }
}
