//! Profile update payload.

use super::AccountDomainError;
use super::credentials::required_field;
use serde::Serialize;

/// Payload for updating the logged-in user's profile.
///
/// Password fields serialize as explicit nulls when no change is
/// requested, matching the remote endpoint's contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    username: String,
    email: String,
    current_password: Option<String>,
    new_password: Option<String>,
}

impl ProfileUpdate {
    /// Creates a profile update that keeps the current password.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyField`] when username or email is
    /// empty after trimming.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, AccountDomainError> {
        Ok(Self {
            username: required_field(username, "username")?,
            email: required_field(email, "email")?,
            current_password: None,
            new_password: None,
        })
    }

    /// Applies the password fields of the settings form.
    ///
    /// Empty password fields mean "keep the current password" and leave the
    /// update unchanged. A non-empty new password must match its
    /// confirmation and be accompanied by the current password.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::PasswordMismatch`] or
    /// [`AccountDomainError::CurrentPasswordRequired`] when the form rules
    /// are violated.
    pub fn with_password_fields(
        mut self,
        current: &str,
        new: &str,
        confirm: &str,
    ) -> Result<Self, AccountDomainError> {
        let requested = new.trim();
        if requested.is_empty() {
            return Ok(self);
        }
        if requested != confirm.trim() {
            return Err(AccountDomainError::PasswordMismatch);
        }
        let existing = current.trim();
        if existing.is_empty() {
            return Err(AccountDomainError::CurrentPasswordRequired);
        }
        self.current_password = Some(existing.to_owned());
        self.new_password = Some(requested.to_owned());
        Ok(self)
    }

    /// Returns the requested login name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the requested email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns whether the update carries a password change.
    #[must_use]
    pub const fn changes_password(&self) -> bool {
        self.new_password.is_some()
    }
}
