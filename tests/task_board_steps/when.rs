//! When steps for task board BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::when;
use taskhub::task::domain::{FieldEdit, TaskField, TaskId, TaskStatus};

#[when(r#"the task with id {id:i64} has its status edited to "{status}""#)]
fn edit_task_status(
    world: &mut BoardWorld,
    id: i64,
    status: String,
) -> Result<(), eyre::Report> {
    let task = TaskId::new(id);
    world.coordinator.open_editor(task, TaskField::Status)?;
    let edit = FieldEdit::Status(TaskStatus::new(status)?);
    let result = run_async(world.coordinator.set_field(task, edit));
    world.last_edit = Some(result);
    Ok(())
}
