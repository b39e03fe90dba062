use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::TodoStore;
use tracing::debug;

pub fn run<S: TodoStore>(store: &mut S, text: String) -> Result<CmdResult> {
    let mut todos = store.load()?;
    let todo = todos.push(text)?.clone();
    store.save(&todos)?;
    debug!(id = todo.id, "added todo");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added: [{}] {}",
        todo.id, todo.text
    )));
    Ok(result.with_affected_todos(vec![todo]))
}
