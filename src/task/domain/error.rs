//! Error types for task domain validation and parsing.

use super::TaskField;
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// A status or priority value is empty after trimming.
    #[error("{0} value must not be empty")]
    EmptyEnumValue(&'static str),

    /// An edited value is outside the allowed set for its field.
    #[error("{field} value '{value}' is not in the allowed set")]
    ValueNotAllowed {
        /// The edited field.
        field: TaskField,
        /// The rejected value.
        value: String,
    },
}

/// Error returned while parsing partition names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown partition: {0}")]
pub struct ParsePartitionError(pub String);
