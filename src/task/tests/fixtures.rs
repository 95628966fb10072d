//! Shared builders for task board tests.

use crate::account::domain::UserId;
use crate::task::domain::{Task, TaskId, TaskPriority, TaskStatus};

/// Builds a task snapshot owned by the given users.
pub fn task_for(id: i64, assignee: i64, creator: i64, status: &str, priority: &str) -> Task {
    Task {
        id: TaskId::new(id),
        title: format!("Task {id}"),
        description: None,
        status: TaskStatus::new(status).expect("test status should be non-empty"),
        priority: TaskPriority::new(priority).expect("test priority should be non-empty"),
        due_date: None,
        project: None,
        assignee_id: UserId::new(assignee),
        creator_id: UserId::new(creator),
    }
}

/// Builds a task assigned to and created by user 1.
pub fn task(id: i64, status: &str, priority: &str) -> Task {
    task_for(id, 1, 1, status, priority)
}

/// The board owner used across task tests.
pub fn board_user() -> UserId {
    UserId::new(1)
}
