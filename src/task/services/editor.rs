//! Edit-cell state machine for inline status/priority editors.

use thiserror::Error;

use crate::task::domain::{TaskField, TaskId};

/// Phase of the one cell currently being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    /// The editor is open; no update is in flight.
    Editing,
    /// The chosen value has been sent and awaits confirmation.
    Submitting,
}

/// The cell currently owned by an open editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveCell {
    task: TaskId,
    field: TaskField,
    original: String,
    phase: EditPhase,
}

impl ActiveCell {
    /// Returns the task the cell belongs to.
    #[must_use]
    pub const fn task(&self) -> TaskId {
        self.task
    }

    /// Returns the edited field.
    #[must_use]
    pub const fn field(&self) -> TaskField {
        self.field
    }

    /// Returns the pre-edit value shown when a submission fails.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Returns the cell's phase.
    #[must_use]
    pub const fn phase(&self) -> EditPhase {
        self.phase
    }

    fn is_cell(&self, task: TaskId, field: TaskField) -> bool {
        self.task == task && self.field == field
    }
}

/// Errors returned by editor state transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditorStateError {
    /// A submission was attempted without an open editor on that cell.
    #[error("no editor is open for this cell")]
    NotEditing,

    /// The cell already has an update in flight.
    #[error("an update for this cell is already in flight")]
    SubmissionInFlight,
}

/// Single-editor session: at most one cell is ever in `Editing` or
/// `Submitting`.
///
/// `Idle` is the absence of an active cell. Opening an editor while
/// another is open discards the other without submitting it; re-entry
/// while a submission is in flight is rejected, which is the guard the
/// disabled UI relies on.
#[derive(Debug, Default)]
pub struct EditSession {
    active: Option<ActiveCell>,
}

impl EditSession {
    /// Creates an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Returns the active cell, if any.
    #[must_use]
    pub const fn active(&self) -> Option<&ActiveCell> {
        self.active.as_ref()
    }

    /// Returns whether no editor is open.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// Opens an editor on a cell, capturing the pre-edit value.
    ///
    /// Any previously open editor is implicitly cancelled, discarding its
    /// pending value.
    pub fn open(&mut self, task: TaskId, field: TaskField, original: impl Into<String>) {
        self.active = Some(ActiveCell {
            task,
            field,
            original: original.into(),
            phase: EditPhase::Editing,
        });
    }

    /// Closes the open editor, if any, without submitting.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Moves the cell into `Submitting` before the remote call.
    ///
    /// # Errors
    ///
    /// Returns [`EditorStateError::SubmissionInFlight`] when the cell is
    /// already submitting, or [`EditorStateError::NotEditing`] when the
    /// cell has no open editor.
    pub fn begin_submit(&mut self, task: TaskId, field: TaskField) -> Result<(), EditorStateError> {
        match &mut self.active {
            Some(cell) if cell.is_cell(task, field) => match cell.phase {
                EditPhase::Editing => {
                    cell.phase = EditPhase::Submitting;
                    Ok(())
                }
                EditPhase::Submitting => Err(EditorStateError::SubmissionInFlight),
            },
            _ => Err(EditorStateError::NotEditing),
        }
    }

    /// Confirms the in-flight submission; the session returns to idle.
    pub fn finish(&mut self) {
        self.active = None;
    }

    /// Fails the in-flight submission; the editor reopens on the
    /// pre-edit value.
    pub fn fail(&mut self) {
        if let Some(cell) = &mut self.active {
            cell.phase = EditPhase::Editing;
        }
    }
}
