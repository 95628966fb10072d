//! Registration form payload.

use super::AccountDomainError;
use super::credentials::required_field;
use serde::Serialize;

/// Payload for creating a new account.
///
/// Every field is required by the registration form; only presence is
/// checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    first_name: String,
    last_name: String,
    username: String,
    password: String,
    phone_number: String,
    email: String,
}

impl RegistrationRequest {
    /// Creates a presence-checked registration payload.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyField`] naming the first field
    /// that is empty after trimming.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, AccountDomainError> {
        Ok(Self {
            first_name: required_field(first_name, "first name")?,
            last_name: required_field(last_name, "last name")?,
            username: required_field(username, "username")?,
            password: required_field(password, "password")?,
            phone_number: required_field(phone_number, "phone number")?,
            email: required_field(email, "email")?,
        })
    }

    /// Returns the requested login name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the contact email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}
