//! Task priority values.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority.
///
/// Server-defined like [`super::TaskStatus`]; the client only assumes the
/// default member exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskPriority(String);

/// Default priority for new tasks.
const MEDIUM: &str = "MEDIUM";

impl TaskPriority {
    /// Creates a priority from a user- or server-supplied value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyEnumValue`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyEnumValue("priority"));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        Self(MEDIUM.to_owned())
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
