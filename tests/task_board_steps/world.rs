//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskhub::account::domain::UserId;
use taskhub::task::adapters::memory::InMemoryTaskApi;
use taskhub::task::domain::EnumCatalog;
use taskhub::task::services::{MutationCoordinator, MutationError, TaskStore};

/// The board owner used by every scenario.
pub const BOARD_USER: UserId = UserId::new(1);

/// Scenario world for task board behaviour tests.
pub struct BoardWorld {
    pub api: InMemoryTaskApi,
    pub store: Arc<TaskStore<InMemoryTaskApi>>,
    pub coordinator: MutationCoordinator<InMemoryTaskApi>,
    pub last_edit: Option<Result<(), MutationError>>,
}

impl BoardWorld {
    /// Creates a world with an empty board over a fresh in-memory API.
    #[must_use]
    pub fn new() -> Self {
        let api = InMemoryTaskApi::new();
        let shared = Arc::new(api.clone());
        let store = Arc::new(TaskStore::new(Arc::clone(&shared)));
        let coordinator = MutationCoordinator::new(
            shared,
            Arc::clone(&store),
            EnumCatalog::fallback(),
            BOARD_USER,
        );

        Self {
            api,
            store,
            coordinator,
            last_edit: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
