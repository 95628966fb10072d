//! Remote task API contract.

use crate::account::domain::UserId;
use crate::task::domain::{Task, TaskDraft, TaskId, TaskPriority, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task API operations.
pub type TaskApiResult<T> = Result<T, TaskApiError>;

/// Remote task API surface.
///
/// Implementations return already-normalized values: paged queries are
/// unwrapped from their envelope and enum listings arrive as ordered
/// sequences regardless of the payload shape on the wire.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Fetches one page of tasks assigned to the user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError`] when the query fails.
    async fn assignee_page(&self, user: UserId, page: u32, size: u32)
    -> TaskApiResult<Vec<Task>>;

    /// Fetches one page of tasks created by the user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError`] when the query fails.
    async fn creator_page(&self, user: UserId, page: u32, size: u32) -> TaskApiResult<Vec<Task>>;

    /// Fetches the server-defined status values.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError`] when the listing cannot be fetched or
    /// decoded; the caller decides whether to fall back.
    async fn statuses(&self) -> TaskApiResult<Vec<TaskStatus>>;

    /// Fetches the server-defined priority values.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError`] when the listing cannot be fetched or
    /// decoded; the caller decides whether to fall back.
    async fn priorities(&self) -> TaskApiResult<Vec<TaskPriority>>;

    /// Partially updates one task's status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError`] when the update is rejected or the
    /// endpoint cannot be reached.
    async fn update_status(&self, task: TaskId, status: &TaskStatus) -> TaskApiResult<()>;

    /// Partially updates one task's priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError`] when the update is rejected or the
    /// endpoint cannot be reached.
    async fn update_priority(&self, task: TaskId, priority: &TaskPriority) -> TaskApiResult<()>;

    /// Creates a task and returns the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError`] when creation is rejected or the endpoint
    /// cannot be reached.
    async fn create(&self, draft: &TaskDraft) -> TaskApiResult<Task>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError`] when deletion is rejected or the endpoint
    /// cannot be reached.
    async fn delete(&self, task: TaskId) -> TaskApiResult<()>;
}

/// Errors returned by task API implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskApiError {
    /// The endpoint answered with a non-success status code.
    #[error("task endpoint returned status {0}")]
    Status(u16),

    /// The request never produced a response.
    #[error("task endpoint transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The response body did not match the expected shape.
    #[error("task endpoint returned a malformed payload: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskApiError {
    /// Wraps a transport-level failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a payload-decoding failure.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }
}
