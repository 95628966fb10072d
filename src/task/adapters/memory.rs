//! In-memory task API for tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::account::domain::UserId;
use crate::task::domain::{
    EnumCatalog, Task, TaskDraft, TaskId, TaskPriority, TaskStatus,
};
use crate::task::ports::{TaskApi, TaskApiError, TaskApiResult};

/// Thread-safe in-memory stand-in for the remote task API.
///
/// Behaves like a small task server: seeded snapshots, paged source
/// queries, and mutations that change the seeded state. Failures can be
/// scripted per endpoint class, and source queries are counted so tests
/// can assert that a resync actually refetched.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskApi {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    statuses: Vec<TaskStatus>,
    priorities: Vec<TaskPriority>,
    next_id: i64,
    query_failure: Option<TaskApiError>,
    update_failure: Option<TaskApiError>,
    enum_failure: Option<TaskApiError>,
    source_queries: u64,
}

impl Default for InMemoryTaskState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            statuses: EnumCatalog::fallback_statuses(),
            priorities: EnumCatalog::fallback_priorities(),
            next_id: 0,
            query_failure: None,
            update_failure: None,
            enum_failure: None,
            source_queries: 0,
        }
    }
}

impl InMemoryTaskApi {
    /// Creates an empty in-memory task API with the fallback enum sets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a task snapshot.
    #[must_use]
    pub fn with_task(self, task: Task) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.next_id = state.next_id.max(task.id.value());
            state.tasks.push(task);
        }
        self
    }

    /// Replaces the served status listing.
    #[must_use]
    pub fn with_statuses(self, statuses: Vec<TaskStatus>) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.statuses = statuses;
        }
        self
    }

    /// Replaces the served priority listing.
    #[must_use]
    pub fn with_priorities(self, priorities: Vec<TaskPriority>) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.priorities = priorities;
        }
        self
    }

    /// Scripts source-query failures.
    pub fn set_query_failure(&self, failure: Option<TaskApiError>) {
        if let Ok(mut state) = self.state.write() {
            state.query_failure = failure;
        }
    }

    /// Scripts partial-update failures.
    pub fn set_update_failure(&self, failure: Option<TaskApiError>) {
        if let Ok(mut state) = self.state.write() {
            state.update_failure = failure;
        }
    }

    /// Scripts enum-listing failures.
    pub fn set_enum_failure(&self, failure: Option<TaskApiError>) {
        if let Ok(mut state) = self.state.write() {
            state.enum_failure = failure;
        }
    }

    /// Returns how many source-page queries were served.
    #[must_use]
    pub fn source_query_count(&self) -> u64 {
        self.state
            .read()
            .map(|state| state.source_queries)
            .unwrap_or_default()
    }

    /// Returns the current server-side snapshot of a task.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<Task> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.tasks.iter().find(|task| task.id == id).cloned())
    }

    fn page<F>(&self, matches: F, page: u32, size: u32) -> TaskApiResult<Vec<Task>>
    where
        F: Fn(&Task) -> bool,
    {
        let mut state = self.state.write().map_err(lock_failure)?;
        state.source_queries += 1;
        if let Some(failure) = &state.query_failure {
            return Err(failure.clone());
        }
        let start = usize::try_from(page)
            .unwrap_or(usize::MAX)
            .saturating_mul(usize::try_from(size).unwrap_or(0));
        let count = usize::try_from(size).unwrap_or(0);
        Ok(state
            .tasks
            .iter()
            .filter(|task| matches(task))
            .skip(start)
            .take(count)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TaskApi for InMemoryTaskApi {
    async fn assignee_page(
        &self,
        user: UserId,
        page: u32,
        size: u32,
    ) -> TaskApiResult<Vec<Task>> {
        self.page(|task| task.assignee_id == user, page, size)
    }

    async fn creator_page(&self, user: UserId, page: u32, size: u32) -> TaskApiResult<Vec<Task>> {
        self.page(|task| task.creator_id == user, page, size)
    }

    async fn statuses(&self) -> TaskApiResult<Vec<TaskStatus>> {
        let state = self.state.read().map_err(lock_failure)?;
        if let Some(failure) = &state.enum_failure {
            return Err(failure.clone());
        }
        Ok(state.statuses.clone())
    }

    async fn priorities(&self) -> TaskApiResult<Vec<TaskPriority>> {
        let state = self.state.read().map_err(lock_failure)?;
        if let Some(failure) = &state.enum_failure {
            return Err(failure.clone());
        }
        Ok(state.priorities.clone())
    }

    async fn update_status(&self, task: TaskId, status: &TaskStatus) -> TaskApiResult<()> {
        let mut state = self.state.write().map_err(lock_failure)?;
        if let Some(failure) = &state.update_failure {
            return Err(failure.clone());
        }
        let mut found = false;
        for stored in state.tasks.iter_mut().filter(|stored| stored.id == task) {
            stored.status = status.clone();
            found = true;
        }
        if found { Ok(()) } else { Err(TaskApiError::Status(404)) }
    }

    async fn update_priority(&self, task: TaskId, priority: &TaskPriority) -> TaskApiResult<()> {
        let mut state = self.state.write().map_err(lock_failure)?;
        if let Some(failure) = &state.update_failure {
            return Err(failure.clone());
        }
        let mut found = false;
        for stored in state.tasks.iter_mut().filter(|stored| stored.id == task) {
            stored.priority = priority.clone();
            found = true;
        }
        if found { Ok(()) } else { Err(TaskApiError::Status(404)) }
    }

    async fn create(&self, draft: &TaskDraft) -> TaskApiResult<Task> {
        let mut state = self.state.write().map_err(lock_failure)?;
        if let Some(failure) = &state.update_failure {
            return Err(failure.clone());
        }
        state.next_id += 1;
        let stored = Task {
            id: TaskId::new(state.next_id),
            title: draft.title().to_owned(),
            description: draft.description().map(ToOwned::to_owned),
            status: draft.status().clone(),
            priority: draft.priority().clone(),
            due_date: draft.due_date(),
            project: draft.project().map(ToOwned::to_owned),
            assignee_id: draft.assignee_id(),
            creator_id: draft.creator_id(),
        };
        state.tasks.push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, task: TaskId) -> TaskApiResult<()> {
        let mut state = self.state.write().map_err(lock_failure)?;
        if let Some(failure) = &state.update_failure {
            return Err(failure.clone());
        }
        let before = state.tasks.len();
        state.tasks.retain(|stored| stored.id != task);
        if state.tasks.len() == before {
            return Err(TaskApiError::Status(404));
        }
        Ok(())
    }
}

/// Maps lock poisoning onto a transport failure.
fn lock_failure<T>(err: std::sync::PoisonError<T>) -> TaskApiError {
    TaskApiError::transport(std::io::Error::other(err.to_string()))
}
