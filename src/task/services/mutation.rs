//! Mutation coordinator for confirmed task edits.

use std::sync::{Arc, RwLock};
use thiserror::Error;

use crate::account::domain::UserId;
use crate::task::domain::{
    EnumCatalog, FieldEdit, Task, TaskDomainError, TaskDraft, TaskField, TaskId,
};
use crate::task::ports::{TaskApi, TaskApiError};
use crate::task::services::editor::{ActiveCell, EditSession, EditorStateError};
use crate::task::services::store::{TaskStore, TaskStoreError};

/// Errors returned by the mutation coordinator.
#[derive(Debug, Error)]
pub enum MutationError {
    /// The edited value failed domain validation.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The remote update was rejected or unreachable; no local state
    /// changed.
    #[error(transparent)]
    Api(#[from] TaskApiError),
    /// The store could not apply a confirmed change or resync.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
    /// The edit-cell state machine rejected the transition.
    #[error(transparent)]
    Editor(#[from] EditorStateError),
    /// The edited task is not present in any partition.
    #[error("task {0} is not present on the board")]
    UnknownTask(TaskId),
}

/// Result type for mutation coordinator operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Drives field-level task edits end-to-end.
///
/// Edits are never optimistic: the store is patched only after the
/// remote update confirms, and a status edit that crosses the
/// completed/cancelled partition boundary triggers a derived-partition
/// resync instead of a local move.
pub struct MutationCoordinator<A: TaskApi> {
    api: Arc<A>,
    store: Arc<TaskStore<A>>,
    catalog: EnumCatalog,
    user: UserId,
    editor: RwLock<EditSession>,
}

impl<A: TaskApi> MutationCoordinator<A> {
    /// Creates a coordinator for the given user's board.
    #[must_use]
    pub const fn new(
        api: Arc<A>,
        store: Arc<TaskStore<A>>,
        catalog: EnumCatalog,
        user: UserId,
    ) -> Self {
        Self {
            api,
            store,
            catalog,
            user,
            editor: RwLock::new(EditSession::new()),
        }
    }

    /// Returns the enum catalog backing the edit selectors.
    #[must_use]
    pub const fn catalog(&self) -> &EnumCatalog {
        &self.catalog
    }

    /// Opens the inline editor on a task's cell.
    ///
    /// Captures the pre-edit value for revert-on-failure; any other open
    /// editor is implicitly cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::UnknownTask`] when the task is in no
    /// partition.
    pub fn open_editor(&self, task: TaskId, field: TaskField) -> MutationResult<()> {
        let snapshot = self
            .store
            .find_task(task)?
            .ok_or(MutationError::UnknownTask(task))?;
        let original = match field {
            TaskField::Status => snapshot.status.as_str().to_owned(),
            TaskField::Priority => snapshot.priority.as_str().to_owned(),
        };
        self.with_editor(|editor| {
            editor.open(task, field, original);
        })?;
        Ok(())
    }

    /// Closes the open editor without submitting.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::Store`] when the editor state is
    /// unavailable.
    pub fn cancel_editor(&self) -> MutationResult<()> {
        self.with_editor(EditSession::cancel)?;
        Ok(())
    }

    /// Returns a snapshot of the active edit cell, if any.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::Store`] when the editor state is
    /// unavailable.
    pub fn active_cell(&self) -> MutationResult<Option<ActiveCell>> {
        self.with_editor(|editor| editor.active().cloned())
    }

    /// Submits the value chosen in the open editor.
    ///
    /// Validates the value against the allowed set, issues the remote
    /// partial update, and only on confirmation patches every occurrence
    /// in the store. A status edit into or out of a terminal status
    /// resynchronizes the derived partitions. On failure every partition
    /// is left untouched and the editor reopens on the pre-edit value.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::Domain`] for a value outside the allowed
    /// set, [`MutationError::Editor`] when no editor is open on the cell
    /// or an update is already in flight, and [`MutationError::Api`] when
    /// the remote update fails.
    pub async fn set_field(&self, task: TaskId, edit: FieldEdit) -> MutationResult<()> {
        if !self.catalog.allows(&edit) {
            return Err(TaskDomainError::ValueNotAllowed {
                field: edit.field(),
                value: edit.value().to_owned(),
            }
            .into());
        }

        let previous = self
            .store
            .find_task(task)?
            .ok_or(MutationError::UnknownTask(task))?;

        self.with_editor(|editor| editor.begin_submit(task, edit.field()))??;

        let outcome = match &edit {
            FieldEdit::Status(status) => self.api.update_status(task, status).await,
            FieldEdit::Priority(priority) => self.api.update_priority(task, priority).await,
        };
        if let Err(err) = outcome {
            tracing::warn!(%task, field = %edit.field(), %err, "field update rejected");
            self.with_editor(EditSession::fail)?;
            return Err(err.into());
        }

        self.with_editor(EditSession::finish)?;
        let crosses_boundary = match &edit {
            FieldEdit::Status(status) => {
                status.is_terminal() || previous.status.is_terminal()
            }
            FieldEdit::Priority(_) => false,
        };
        self.store.replace_task_fields(task, &edit.into_patch())?;
        if crosses_boundary {
            self.store.refresh_derived(self.user).await?;
        }
        Ok(())
    }

    /// Creates a task from the create form.
    ///
    /// Returns the stored snapshot; the view re-fetches the partitions it
    /// displays, since a new task's membership is the server's call.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::Api`] when creation is rejected or the
    /// endpoint cannot be reached.
    pub async fn create_task(&self, draft: &TaskDraft) -> MutationResult<Task> {
        let created = self.api.create(draft).await?;
        Ok(created)
    }

    /// Deletes a task, then re-fetches the affected partitions.
    ///
    /// A task only ever leaves a partition by re-fetch, so both sources
    /// reload with their last-used paging and the derived partitions are
    /// recomputed.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::Api`] when deletion is rejected; the
    /// partitions stay as they were in that case.
    pub async fn delete_task(&self, task: TaskId) -> MutationResult<()> {
        self.api.delete(task).await?;
        self.store.reload_sources(self.user).await?;
        self.store.refresh_derived(self.user).await?;
        Ok(())
    }

    fn with_editor<T>(&self, action: impl FnOnce(&mut EditSession) -> T) -> MutationResult<T> {
        let mut editor = self
            .editor
            .write()
            .map_err(|err| TaskStoreError::State(err.to_string()))?;
        Ok(action(&mut editor))
    }
}
