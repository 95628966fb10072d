//! Login credentials.

use super::AccountDomainError;
use serde::Serialize;

/// Username/password pair submitted by the login form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates presence-checked credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyField`] when either field is
    /// empty after trimming.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, AccountDomainError> {
        Ok(Self {
            username: required_field(username, "username")?,
            password: required_field(password, "password")?,
        })
    }

    /// Returns the login name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the submitted password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Trims a form value, rejecting empty input.
pub(super) fn required_field(
    value: impl Into<String>,
    field: &'static str,
) -> Result<String, AccountDomainError> {
    let raw = value.into();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AccountDomainError::EmptyField(field));
    }
    Ok(trimmed.to_owned())
}
