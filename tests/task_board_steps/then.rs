//! Then steps for task board BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::then;
use taskhub::task::domain::{Partition, TaskId};

fn partition_named(name: &str) -> Result<Partition, eyre::Report> {
    Partition::try_from(name).map_err(|err| eyre::eyre!("invalid partition in scenario: {err}"))
}

#[then("the edit succeeds")]
fn edit_succeeds(world: &BoardWorld) -> Result<(), eyre::Report> {
    match &world.last_edit {
        Some(Ok(())) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("edit failed: {err}")),
        None => Err(eyre::eyre!("no edit was attempted")),
    }
}

#[then("the edit fails")]
fn edit_fails(world: &BoardWorld) -> Result<(), eyre::Report> {
    match &world.last_edit {
        Some(Err(_)) => Ok(()),
        Some(Ok(())) => Err(eyre::eyre!("edit unexpectedly succeeded")),
        None => Err(eyre::eyre!("no edit was attempted")),
    }
}

#[then(r#"the "{partition}" partition contains exactly task {id:i64}"#)]
fn partition_contains_exactly(
    world: &BoardWorld,
    partition: String,
    id: i64,
) -> Result<(), eyre::Report> {
    let tasks = world.store.tasks(partition_named(&partition)?)?;
    let ids: Vec<TaskId> = tasks.iter().map(|task| task.id).collect();
    eyre::ensure!(
        ids == vec![TaskId::new(id)],
        "partition {partition} holds {ids:?}, expected exactly task {id}"
    );
    Ok(())
}

#[then(r#"the "{partition}" partition is empty"#)]
fn partition_is_empty(world: &BoardWorld, partition: String) -> Result<(), eyre::Report> {
    let count = world.store.active_count(partition_named(&partition)?)?;
    eyre::ensure!(count == 0, "partition {partition} holds {count} tasks");
    Ok(())
}

#[then(r#"every partition still shows status "{status}" for task {id:i64}"#)]
fn partitions_unchanged(
    world: &BoardWorld,
    status: String,
    id: i64,
) -> Result<(), eyre::Report> {
    for partition in Partition::ALL {
        for task in world.store.tasks(partition)? {
            if task.id == TaskId::new(id) {
                eyre::ensure!(
                    task.status.as_str() == status,
                    "task {id} in {partition} shows {}, expected {status}",
                    task.status
                );
            }
        }
    }
    Ok(())
}
