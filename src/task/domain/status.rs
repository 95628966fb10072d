//! Task status values.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
///
/// The value set is server-defined and fetched at session start, so the
/// type wraps the wire value instead of closing over a fixed enum. The
/// well-known members the client logic depends on are exposed as
/// constructors; `DONE` and `CANCELLED` decide derived-partition
/// membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskStatus(String);

/// Default status for new tasks.
const NEW: &str = "NEW";
/// Status marking a task as completed.
const DONE: &str = "DONE";
/// Status marking a task as cancelled.
const CANCELLED: &str = "CANCELLED";

impl TaskStatus {
    /// Creates a status from a user- or server-supplied value.
    ///
    /// Only presence is checked here; membership in the allowed set is the
    /// enum catalog's concern.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyEnumValue`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyEnumValue("status"));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the `DONE` status.
    #[must_use]
    pub fn done() -> Self {
        Self(DONE.to_owned())
    }

    /// Returns the `CANCELLED` status.
    #[must_use]
    pub fn cancelled() -> Self {
        Self(CANCELLED.to_owned())
    }

    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether this status marks a task as completed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.0 == DONE
    }

    /// Returns whether this status marks a task as cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0 == CANCELLED
    }

    /// Returns whether this status places a task in a derived partition.
    ///
    /// An edit into or out of a terminal status crosses a partition
    /// boundary and requires a derived-partition resync.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.is_done() || self.is_cancelled()
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self(NEW.to_owned())
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
