//! Task snapshots and the create payload.

use super::{TaskDomainError, TaskId, TaskPriority, TaskStatus};
use crate::account::domain::UserId;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Task snapshot as returned by the remote task API.
///
/// Snapshots are read-only view state: the only client-driven change is a
/// confirmed status/priority patch applied by the task store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Server-assigned identifier.
    pub id: TaskId,
    /// Short task title.
    pub title: String,
    /// Longer free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Priority.
    pub priority: TaskPriority,
    /// Due moment, sent by the server as a local date-time.
    #[serde(default)]
    pub due_date: Option<NaiveDateTime>,
    /// Optional project label.
    #[serde(default)]
    pub project: Option<String>,
    /// User the task is assigned to.
    pub assignee_id: UserId,
    /// User who created the task.
    pub creator_id: UserId,
}

/// Confirmed field changes applied to task snapshots in the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
}

impl TaskPatch {
    /// Creates a patch replacing the status.
    #[must_use]
    pub const fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            priority: None,
        }
    }

    /// Creates a patch replacing the priority.
    #[must_use]
    pub const fn priority(priority: TaskPriority) -> Self {
        Self {
            status: None,
            priority: Some(priority),
        }
    }

    /// Applies the patch to one task snapshot.
    pub fn apply(&self, task: &mut Task) {
        if let Some(status) = &self.status {
            task.status = status.clone();
        }
        if let Some(priority) = &self.priority {
            task.priority = priority.clone();
        }
    }
}

/// End-of-day time appended to a chosen due date.
///
/// The create form collects a date; the remote API expects a local
/// date-time, so the client pins the time of day to `23:59:59`.
const DUE_TIME: (u32, u32, u32) = (23, 59, 59);

/// Payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<NaiveDateTime>,
    project: Option<String>,
    assignee_id: UserId,
    creator_id: UserId,
}

impl TaskDraft {
    /// Creates a draft with the default status and priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty
    /// after trimming.
    pub fn new(
        title: impl Into<String>,
        assignee: UserId,
        creator: UserId,
    ) -> Result<Self, TaskDomainError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self {
            title: trimmed.to_owned(),
            description: None,
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            due_date: None,
            project: None,
            assignee_id: assignee,
            creator_id: creator,
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a non-default status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets a non-default priority.
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date, pinning the time of day to end of day.
    #[must_use]
    pub fn with_due_date(mut self, date: NaiveDate) -> Self {
        let (hour, minute, second) = DUE_TIME;
        self.due_date = NaiveTime::from_hms_opt(hour, minute, second).map(|time| date.and_time(time));
        self
    }

    /// Sets the project label.
    #[must_use]
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the chosen status.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Returns the chosen priority.
    #[must_use]
    pub const fn priority(&self) -> &TaskPriority {
        &self.priority
    }

    /// Returns the composed due moment, if a date was chosen.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDateTime> {
        self.due_date
    }

    /// Returns the project label, if set.
    #[must_use]
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn assignee_id(&self) -> UserId {
        self.assignee_id
    }

    /// Returns the creator.
    #[must_use]
    pub const fn creator_id(&self) -> UserId {
        self.creator_id
    }
}
