//! In-memory task store over the four board partitions.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use crate::account::domain::UserId;
use crate::task::domain::{
    Partition, Task, TaskId, TaskPatch, TaskPriority, dedupe_by_id,
};
use crate::task::ports::{TaskApi, TaskApiError};

/// Page size used when the derived partitions scan both sources.
///
/// A fixed upper bound standing in for "all of them"; the derived
/// partitions are recomputed from this scan, never maintained
/// incrementally.
pub const DERIVED_SCAN_SIZE: u32 = 100;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Errors returned by the task store.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// A source or union query failed; the affected partitions were
    /// cleared rather than left stale.
    #[error(transparent)]
    Api(#[from] TaskApiError),

    /// The partition state is unavailable.
    #[error("task store state unavailable: {0}")]
    State(String),
}

/// Tasks of one partition sharing a priority, in partition order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityGroup {
    /// The shared priority value.
    pub priority: TaskPriority,
    /// The group's tasks, preserving partition order.
    pub tasks: Vec<Task>,
}

#[derive(Debug, Default)]
struct PartitionState {
    assignee: Vec<Task>,
    creator: Vec<Task>,
    completed: Vec<Task>,
    cancelled: Vec<Task>,
    assignee_query: Option<(u32, u32)>,
    creator_query: Option<(u32, u32)>,
}

impl PartitionState {
    fn slot(&self, partition: Partition) -> &Vec<Task> {
        match partition {
            Partition::Assignee => &self.assignee,
            Partition::Creator => &self.creator,
            Partition::Completed => &self.completed,
            Partition::Cancelled => &self.cancelled,
        }
    }

    fn slot_mut(&mut self, partition: Partition) -> &mut Vec<Task> {
        match partition {
            Partition::Assignee => &mut self.assignee,
            Partition::Creator => &mut self.creator,
            Partition::Completed => &mut self.completed,
            Partition::Cancelled => &mut self.cancelled,
        }
    }
}

/// Owner of the four board partitions.
///
/// Partitions are replaced wholesale by loads and resyncs; the only
/// in-place change is a confirmed field patch applied through
/// [`TaskStore::replace_task_fields`]. Tasks leave a partition by
/// re-fetch, never by local removal heuristics.
#[derive(Debug)]
pub struct TaskStore<A: TaskApi> {
    api: Arc<A>,
    partitions: RwLock<PartitionState>,
}

impl<A: TaskApi> TaskStore<A> {
    /// Creates an empty store over the given task API.
    #[must_use]
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            partitions: RwLock::new(PartitionState::default()),
        }
    }

    /// Replaces a partition's contents from the remote API.
    ///
    /// Source partitions fetch one page of their query; derived
    /// partitions recompute from the union scan and ignore the paging
    /// arguments. On failure the partition is left empty so the view
    /// shows "no tasks" rather than stale data.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Api`] when the query fails.
    pub async fn load_partition(
        &self,
        partition: Partition,
        user: UserId,
        page: u32,
        size: u32,
    ) -> TaskStoreResult<()> {
        match partition {
            Partition::Assignee => {
                let fetched = self.api.assignee_page(user, page, size).await;
                self.install_source(Partition::Assignee, (page, size), fetched)
            }
            Partition::Creator => {
                let fetched = self.api.creator_page(user, page, size).await;
                self.install_source(Partition::Creator, (page, size), fetched)
            }
            Partition::Completed | Partition::Cancelled => {
                self.refresh_one_derived(partition, user).await
            }
        }
    }

    /// Recomputes both derived partitions from one union scan.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Api`] when the scan fails; both derived
    /// partitions are cleared in that case.
    pub async fn refresh_derived(&self, user: UserId) -> TaskStoreResult<()> {
        match self.union_scan(user).await {
            Ok(union) => {
                let completed = dedupe_by_id(
                    union
                        .iter()
                        .filter(|task| task.status.is_done())
                        .cloned()
                        .collect(),
                );
                let cancelled = dedupe_by_id(
                    union
                        .into_iter()
                        .filter(|task| task.status.is_cancelled())
                        .collect(),
                );
                let mut state = self.write()?;
                state.completed = completed;
                state.cancelled = cancelled;
                Ok(())
            }
            Err(err) => {
                let mut state = self.write()?;
                state.completed.clear();
                state.cancelled.clear();
                Err(err.into())
            }
        }
    }

    /// Re-fetches the source partitions with their last-used paging.
    ///
    /// Partitions that were never loaded stay untouched. Used after a
    /// deletion, when membership can only shrink by re-fetch.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Api`] for the first query that fails.
    pub async fn reload_sources(&self, user: UserId) -> TaskStoreResult<()> {
        let (assignee_query, creator_query) = {
            let state = self.read()?;
            (state.assignee_query, state.creator_query)
        };
        if let Some((page, size)) = assignee_query {
            self.load_partition(Partition::Assignee, user, page, size)
                .await?;
        }
        if let Some((page, size)) = creator_query {
            self.load_partition(Partition::Creator, user, page, size)
                .await?;
        }
        Ok(())
    }

    /// Applies a confirmed field patch to every occurrence of the task.
    ///
    /// Never inserts: a task absent from a partition stays absent until
    /// the next re-fetch.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::State`] when the partition state is
    /// unavailable.
    pub fn replace_task_fields(&self, task: TaskId, patch: &TaskPatch) -> TaskStoreResult<()> {
        let mut state = self.write()?;
        for partition in Partition::ALL {
            for stored in state
                .slot_mut(partition)
                .iter_mut()
                .filter(|stored| stored.id == task)
            {
                patch.apply(stored);
            }
        }
        Ok(())
    }

    /// Returns a partition's tasks grouped by priority.
    ///
    /// Groups appear in first-appearance order and keep partition order
    /// inside; priorities with no tasks are omitted rather than rendered
    /// as empty groups.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::State`] when the partition state is
    /// unavailable.
    pub fn group_by_priority(&self, partition: Partition) -> TaskStoreResult<Vec<PriorityGroup>> {
        let state = self.read()?;
        let mut groups: Vec<PriorityGroup> = Vec::new();
        for task in state.slot(partition) {
            if let Some(group) = groups
                .iter_mut()
                .find(|group| group.priority == task.priority)
            {
                group.tasks.push(task.clone());
            } else {
                groups.push(PriorityGroup {
                    priority: task.priority.clone(),
                    tasks: vec![task.clone()],
                });
            }
        }
        Ok(groups)
    }

    /// Returns a partition's element count for display.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::State`] when the partition state is
    /// unavailable.
    pub fn active_count(&self, partition: Partition) -> TaskStoreResult<usize> {
        Ok(self.read()?.slot(partition).len())
    }

    /// Returns a snapshot of a partition's tasks in display order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::State`] when the partition state is
    /// unavailable.
    pub fn tasks(&self, partition: Partition) -> TaskStoreResult<Vec<Task>> {
        Ok(self.read()?.slot(partition).clone())
    }

    /// Returns the first occurrence of a task across the partitions.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::State`] when the partition state is
    /// unavailable.
    pub fn find_task(&self, task: TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self.read()?;
        for partition in Partition::ALL {
            if let Some(found) = state
                .slot(partition)
                .iter()
                .find(|stored| stored.id == task)
            {
                return Ok(Some(found.clone()));
            }
        }
        Ok(None)
    }

    /// Recomputes one derived partition from the union scan.
    async fn refresh_one_derived(
        &self,
        partition: Partition,
        user: UserId,
    ) -> TaskStoreResult<()> {
        match self.union_scan(user).await {
            Ok(union) => {
                let filtered = dedupe_by_id(
                    union
                        .into_iter()
                        .filter(|task| match partition {
                            Partition::Completed => task.status.is_done(),
                            _ => task.status.is_cancelled(),
                        })
                        .collect(),
                );
                let mut state = self.write()?;
                *state.slot_mut(partition) = filtered;
                Ok(())
            }
            Err(err) => {
                let mut state = self.write()?;
                state.slot_mut(partition).clear();
                Err(err.into())
            }
        }
    }

    /// Fetches the union of both sources at the derived scan bound.
    async fn union_scan(&self, user: UserId) -> Result<Vec<Task>, TaskApiError> {
        let mut union = self.api.assignee_page(user, 0, DERIVED_SCAN_SIZE).await?;
        union.extend(self.api.creator_page(user, 0, DERIVED_SCAN_SIZE).await?);
        Ok(union)
    }

    /// Installs a fetched source page, clearing the slot on failure.
    fn install_source(
        &self,
        partition: Partition,
        query: (u32, u32),
        fetched: Result<Vec<Task>, TaskApiError>,
    ) -> TaskStoreResult<()> {
        let mut state = self.write()?;
        match partition {
            Partition::Assignee => state.assignee_query = Some(query),
            _ => state.creator_query = Some(query),
        }
        match fetched {
            Ok(tasks) => {
                *state.slot_mut(partition) = dedupe_by_id(tasks);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(partition = %partition, %err, "partition load failed, clearing");
                state.slot_mut(partition).clear();
                Err(err.into())
            }
        }
    }

    fn read(&self) -> TaskStoreResult<RwLockReadGuard<'_, PartitionState>> {
        self.partitions
            .read()
            .map_err(|err| TaskStoreError::State(err.to_string()))
    }

    fn write(&self) -> TaskStoreResult<RwLockWriteGuard<'_, PartitionState>> {
        self.partitions
            .write()
            .map_err(|err| TaskStoreError::State(err.to_string()))
    }
}
