//! HTTP adapter for the remote task API.
//!
//! Besides the plain JSON calls, this adapter owns enum normalization:
//! the status/priority listings arrive as either an array or an object
//! whose values are the members, and both shapes collapse here into one
//! ordered sequence so no caller re-derives them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::account::domain::UserId;
use crate::remote::{RemoteClient, RemoteError};
use crate::task::domain::{Task, TaskDraft, TaskId, TaskPriority, TaskStatus};
use crate::task::ports::{TaskApi, TaskApiError, TaskApiResult};

/// Task API adapter over the shared remote client.
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: RemoteClient,
}

/// Paged collection envelope used by the task query endpoints.
#[derive(Debug, Deserialize)]
struct TaskPageBody {
    content: Vec<Task>,
}

/// Body of the status partial-update call.
#[derive(Debug, Serialize)]
struct StatusBody<'a> {
    status: &'a TaskStatus,
}

/// Body of the priority partial-update call.
#[derive(Debug, Serialize)]
struct PriorityBody<'a> {
    priority: &'a TaskPriority,
}

/// Enum listings arrive as an array or as an object of values.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EnumPayload {
    Values(Vec<String>),
    Named(serde_json::Map<String, serde_json::Value>),
}

impl EnumPayload {
    /// Collapses both payload shapes into an ordered value sequence.
    fn into_values(self) -> Vec<String> {
        match self {
            Self::Values(values) => values,
            Self::Named(map) => map
                .into_iter()
                .filter_map(|(_, value)| value.as_str().map(ToOwned::to_owned))
                .collect(),
        }
    }
}

impl HttpTaskApi {
    /// Creates an adapter over the given remote client.
    #[must_use]
    pub const fn new(client: RemoteClient) -> Self {
        Self { client }
    }

    async fn page(&self, path: &str, page: u32, size: u32) -> TaskApiResult<Vec<Task>> {
        let query = [("page", page.to_string()), ("size", size.to_string())];
        let body: TaskPageBody = self
            .client
            .get_json(path, &query)
            .await
            .map_err(map_remote)?;
        Ok(body.content)
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn assignee_page(
        &self,
        user: UserId,
        page: u32,
        size: u32,
    ) -> TaskApiResult<Vec<Task>> {
        let path = format!("api/task/v1/assignee/{user}");
        self.page(&path, page, size).await
    }

    async fn creator_page(&self, user: UserId, page: u32, size: u32) -> TaskApiResult<Vec<Task>> {
        let path = format!("api/task/v1/creator/{user}");
        self.page(&path, page, size).await
    }

    async fn statuses(&self) -> TaskApiResult<Vec<TaskStatus>> {
        let payload: EnumPayload = self
            .client
            .get_json("api/task/v1/statuses", &[])
            .await
            .map_err(map_remote)?;
        Ok(payload
            .into_values()
            .into_iter()
            .filter_map(|value| TaskStatus::new(value).ok())
            .collect())
    }

    async fn priorities(&self) -> TaskApiResult<Vec<TaskPriority>> {
        let payload: EnumPayload = self
            .client
            .get_json("api/task/v1/priorityStatuses", &[])
            .await
            .map_err(map_remote)?;
        Ok(payload
            .into_values()
            .into_iter()
            .filter_map(|value| TaskPriority::new(value).ok())
            .collect())
    }

    async fn update_status(&self, task: TaskId, status: &TaskStatus) -> TaskApiResult<()> {
        let path = format!("api/task/v1/{task}/status");
        self.client
            .patch_json(&path, &StatusBody { status })
            .await
            .map_err(map_remote)
    }

    async fn update_priority(&self, task: TaskId, priority: &TaskPriority) -> TaskApiResult<()> {
        let path = format!("api/task/v1/{task}/priority");
        self.client
            .patch_json(&path, &PriorityBody { priority })
            .await
            .map_err(map_remote)
    }

    async fn create(&self, draft: &TaskDraft) -> TaskApiResult<Task> {
        self.client
            .post_json("api/task/v1", draft)
            .await
            .map_err(map_remote)
    }

    async fn delete(&self, task: TaskId) -> TaskApiResult<()> {
        let path = format!("api/task/v1/{task}");
        self.client.delete(&path).await.map_err(map_remote)
    }
}

/// Maps remote-client failures onto the port error taxonomy.
fn map_remote(err: RemoteError) -> TaskApiError {
    match err {
        RemoteError::Status(code) => TaskApiError::Status(code),
        RemoteError::Transport(inner) => TaskApiError::Transport(inner),
        RemoteError::Decode(inner) => TaskApiError::Decode(inner),
        RemoteError::InvalidPath(path) => {
            TaskApiError::transport(std::io::Error::other(format!("invalid path: {path}")))
        }
    }
}
