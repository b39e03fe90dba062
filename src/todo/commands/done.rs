use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::model::TodoId;
use crate::store::TodoStore;
use tracing::debug;

/// Mark the todo with `id` as done. Done is terminal: completing an already
/// completed todo leaves it done and writes nothing.
pub fn run<S: TodoStore>(store: &mut S, id: TodoId) -> Result<CmdResult> {
    let mut todos = store.load()?;
    let todo = todos.find_mut(id).ok_or(TodoError::NotFound(id))?;

    let mut result = CmdResult::default();
    if todo.done {
        result.add_message(CmdMessage::warning(format!(
            "Already done: [{}] {}",
            todo.id, todo.text
        )));
        return Ok(result.with_affected_todos(vec![todo.clone()]));
    }

    todo.done = true;
    let todo = todo.clone();
    store.save(&todos)?;
    debug!(id, "marked todo done");

    result.add_message(CmdMessage::success(format!(
        "Completed: [{}] {}",
        todo.id, todo.text
    )));
    Ok(result.with_affected_todos(vec![todo]))
}
