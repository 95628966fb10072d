//! Enum catalog loading and fallback tests.

use crate::task::adapters::memory::InMemoryTaskApi;
use crate::task::domain::{TaskPriority, TaskStatus};
use crate::task::ports::TaskApiError;
use crate::task::services::load_catalog;

fn statuses(values: &[&str]) -> Vec<TaskStatus> {
    values
        .iter()
        .filter_map(|value| TaskStatus::new(*value).ok())
        .collect()
}

fn priorities(values: &[&str]) -> Vec<TaskPriority> {
    values
        .iter()
        .filter_map(|value| TaskPriority::new(*value).ok())
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn server_defined_sets_are_used_when_available() {
    let api = InMemoryTaskApi::new()
        .with_statuses(statuses(&["OPEN", "CLOSED"]))
        .with_priorities(priorities(&["LOW", "MEDIUM", "HIGH", "CRITICAL"]));

    let catalog = load_catalog(&api).await;

    assert_eq!(catalog.statuses(), statuses(&["OPEN", "CLOSED"]).as_slice());
    assert_eq!(
        catalog.priorities(),
        priorities(&["LOW", "MEDIUM", "HIGH", "CRITICAL"]).as_slice()
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_listings_fall_back_to_the_hardcoded_sets() {
    let api = InMemoryTaskApi::new();
    api.set_enum_failure(Some(TaskApiError::transport(std::io::Error::other(
        "connection refused",
    ))));

    let catalog = load_catalog(&api).await;

    assert_eq!(
        catalog.statuses(),
        statuses(&["NEW", "IN_PROGRESS", "REVIEW", "DONE", "CANCELLED"]).as_slice()
    );
    assert_eq!(
        catalog.priorities(),
        priorities(&["LOW", "MEDIUM", "HIGH"]).as_slice()
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_listings_fall_back_too() {
    let api = InMemoryTaskApi::new()
        .with_statuses(Vec::new())
        .with_priorities(Vec::new());

    let catalog = load_catalog(&api).await;

    assert_eq!(catalog.statuses().len(), 5);
    assert_eq!(catalog.priorities().len(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn fallback_still_validates_board_edits() {
    let api = InMemoryTaskApi::new();
    api.set_enum_failure(Some(TaskApiError::Status(503)));
    let catalog = load_catalog(&api).await;

    let done = TaskStatus::done();
    assert!(catalog.allows_status(&done));
}
