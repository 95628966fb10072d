//! Board partitions and their identity invariant.

use super::{Task, TaskId};
use std::collections::HashMap;

use super::ParsePartitionError;

/// Named in-memory subset of tasks grouped by relationship to the
/// current user or by lifecycle outcome.
///
/// A task may appear in several partitions at once (assigned to me *and*
/// completed); within one partition, ids are unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    /// Tasks assigned to the current user.
    Assignee,
    /// Tasks created by the current user.
    Creator,
    /// Tasks with status `DONE`, derived from both source queries.
    Completed,
    /// Tasks with status `CANCELLED`, derived from both source queries.
    Cancelled,
}

impl Partition {
    /// All partitions in scan order.
    pub const ALL: [Self; 4] = [Self::Assignee, Self::Creator, Self::Completed, Self::Cancelled];

    /// Returns the canonical partition name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assignee => "assignee",
            Self::Creator => "creator",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns whether this partition derives from the source queries.
    ///
    /// Derived partitions are recomputed from a union scan, never
    /// incrementally maintained from edits.
    #[must_use]
    pub const fn is_derived(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl TryFrom<&str> for Partition {
    type Error = ParsePartitionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "assignee" => Ok(Self::Assignee),
            "creator" => Ok(Self::Creator),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParsePartitionError(value.to_owned())),
        }
    }
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Removes duplicate ids from overlapping source queries.
///
/// The first occurrence keeps its position; the last-seen snapshot wins
/// on content.
#[must_use]
pub fn dedupe_by_id(tasks: Vec<Task>) -> Vec<Task> {
    let mut position: HashMap<TaskId, usize> = HashMap::new();
    let mut unique: Vec<Task> = Vec::with_capacity(tasks.len());
    for task in tasks {
        if let Some(&index) = position.get(&task.id) {
            if let Some(slot) = unique.get_mut(index) {
                *slot = task;
            }
        } else {
            position.insert(task.id, unique.len());
            unique.push(task);
        }
    }
    unique
}
