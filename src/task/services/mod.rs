//! Orchestration services for the task board.

mod catalog;
mod editor;
mod mutation;
mod store;

pub use catalog::load_catalog;
pub use editor::{ActiveCell, EditPhase, EditSession, EditorStateError};
pub use mutation::{MutationCoordinator, MutationError, MutationResult};
pub use store::{DERIVED_SCAN_SIZE, PriorityGroup, TaskStore, TaskStoreError, TaskStoreResult};
