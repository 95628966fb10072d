//! Error types for account domain validation.

use thiserror::Error;

/// Errors returned while constructing account form payloads.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountDomainError {
    /// A required form field is empty after trimming.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// The new password and its confirmation differ.
    #[error("new passwords do not match")]
    PasswordMismatch,

    /// A password change was requested without the current password.
    #[error("current password is required to change the password")]
    CurrentPasswordRequired,
}
