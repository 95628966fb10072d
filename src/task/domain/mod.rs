//! Domain model for the task board.
//!
//! Task snapshots mirror what the remote API sends; the client never
//! invents task state. Status and priority are validated string values
//! rather than closed enums because their value sets are server-defined
//! and fetched at session start.

mod catalog;
mod edit;
mod error;
mod ids;
mod partition;
mod priority;
mod status;
mod task;

pub use catalog::{EnumCatalog, FALLBACK_PRIORITIES, FALLBACK_STATUSES};
pub use edit::{FieldEdit, TaskField};
pub use error::{ParsePartitionError, TaskDomainError};
pub use ids::TaskId;
pub use partition::{Partition, dedupe_by_id};
pub use priority::TaskPriority;
pub use status::TaskStatus;
pub use task::{Task, TaskDraft, TaskPatch};
