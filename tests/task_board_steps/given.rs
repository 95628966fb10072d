//! Given steps for task board BDD scenarios.

use super::world::{BOARD_USER, BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskhub::task::domain::{Partition, Task, TaskId, TaskPriority, TaskStatus};
use taskhub::task::ports::TaskApiError;

#[given(r#"a board task with id {id:i64} and status "{status}""#)]
fn board_task(world: &mut BoardWorld, id: i64, status: String) -> Result<(), eyre::Report> {
    let task = Task {
        id: TaskId::new(id),
        title: format!("Task {id}"),
        description: None,
        status: TaskStatus::new(status)?,
        priority: TaskPriority::default(),
        due_date: None,
        project: None,
        assignee_id: BOARD_USER,
        creator_id: BOARD_USER,
    };
    world.api = world.api.clone().with_task(task);
    Ok(())
}

#[given("the board partitions are loaded")]
fn partitions_loaded(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    run_async(
        world
            .store
            .load_partition(Partition::Assignee, BOARD_USER, 0, 10),
    )
    .wrap_err("load assignee partition")?;
    run_async(
        world
            .store
            .load_partition(Partition::Creator, BOARD_USER, 0, 10),
    )
    .wrap_err("load creator partition")?;
    run_async(world.store.refresh_derived(BOARD_USER)).wrap_err("refresh derived partitions")?;
    Ok(())
}

#[given("the remote update endpoint is failing")]
fn update_endpoint_failing(world: &mut BoardWorld) {
    world.api.set_update_failure(Some(TaskApiError::Status(500)));
}
