//! Normalized status/priority value sets.

use super::{FieldEdit, TaskPriority, TaskStatus};

/// Status values assumed when the enum endpoint is unreachable.
pub const FALLBACK_STATUSES: [&str; 5] = ["NEW", "IN_PROGRESS", "REVIEW", "DONE", "CANCELLED"];

/// Priority values assumed when the enum endpoint is unreachable.
pub const FALLBACK_PRIORITIES: [&str; 3] = ["LOW", "MEDIUM", "HIGH"];

/// Ordered status and priority value sets for selectors and validation.
///
/// Normalized once at the API-client boundary; callers never re-derive
/// the sets from raw payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCatalog {
    statuses: Vec<TaskStatus>,
    priorities: Vec<TaskPriority>,
}

impl EnumCatalog {
    /// Creates a catalog from normalized value sequences.
    #[must_use]
    pub const fn new(statuses: Vec<TaskStatus>, priorities: Vec<TaskPriority>) -> Self {
        Self {
            statuses,
            priorities,
        }
    }

    /// Creates the hardcoded fallback catalog.
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(Self::fallback_statuses(), Self::fallback_priorities())
    }

    /// Returns the fallback status sequence.
    #[must_use]
    pub fn fallback_statuses() -> Vec<TaskStatus> {
        FALLBACK_STATUSES
            .iter()
            .filter_map(|value| TaskStatus::new(*value).ok())
            .collect()
    }

    /// Returns the fallback priority sequence.
    #[must_use]
    pub fn fallback_priorities() -> Vec<TaskPriority> {
        FALLBACK_PRIORITIES
            .iter()
            .filter_map(|value| TaskPriority::new(*value).ok())
            .collect()
    }

    /// Returns the ordered status values for selector rendering.
    #[must_use]
    pub fn statuses(&self) -> &[TaskStatus] {
        &self.statuses
    }

    /// Returns the ordered priority values for selector rendering.
    #[must_use]
    pub fn priorities(&self) -> &[TaskPriority] {
        &self.priorities
    }

    /// Returns whether the status is in the allowed set.
    #[must_use]
    pub fn allows_status(&self, status: &TaskStatus) -> bool {
        self.statuses.contains(status)
    }

    /// Returns whether the priority is in the allowed set.
    #[must_use]
    pub fn allows_priority(&self, priority: &TaskPriority) -> bool {
        self.priorities.contains(priority)
    }

    /// Returns whether the edited value is in the allowed set for its
    /// field.
    #[must_use]
    pub fn allows(&self, edit: &FieldEdit) -> bool {
        match edit {
            FieldEdit::Status(status) => self.allows_status(status),
            FieldEdit::Priority(priority) => self.allows_priority(priority),
        }
    }
}

impl Default for EnumCatalog {
    fn default() -> Self {
        Self::fallback()
    }
}
