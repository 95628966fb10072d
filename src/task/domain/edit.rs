//! Inline-editable task fields.

use super::{TaskPatch, TaskPriority, TaskStatus};
use std::fmt;

/// The two fields editable inline on a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// The lifecycle status selector.
    Status,
    /// The priority selector.
    Priority,
}

impl TaskField {
    /// Returns the display name used in errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Priority => "priority",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chosen value for one editable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    /// New status value.
    Status(TaskStatus),
    /// New priority value.
    Priority(TaskPriority),
}

impl FieldEdit {
    /// Returns the field this edit targets.
    #[must_use]
    pub const fn field(&self) -> TaskField {
        match self {
            Self::Status(_) => TaskField::Status,
            Self::Priority(_) => TaskField::Priority,
        }
    }

    /// Returns the chosen value's wire representation.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Status(status) => status.as_str(),
            Self::Priority(priority) => priority.as_str(),
        }
    }

    /// Converts the edit into a single-field store patch.
    #[must_use]
    pub fn into_patch(self) -> TaskPatch {
        match self {
            Self::Status(status) => TaskPatch::status(status),
            Self::Priority(priority) => TaskPatch::priority(priority),
        }
    }
}
