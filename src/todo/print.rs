use console::style;
use todo::api::{CmdMessage, MessageLevel};
use todo::model::Todo;

/// `[x] 1: buy milk` / `[ ] 2: walk dog`
pub fn format_todo(todo: &Todo) -> String {
    format!("[{}] {}: {}", todo.status_marker(), todo.id, todo.text)
}

pub fn print_todos(todos: &[Todo]) {
    for todo in todos {
        println!("{}", format_todo(todo));
    }
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", style(&message.content).green()),
            MessageLevel::Warning => println!("{}", style(&message.content).yellow()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_pending_todo() {
        let todo = Todo::new(1, "buy milk".into());
        assert_eq!(format_todo(&todo), "[ ] 1: buy milk");
    }

    #[test]
    fn formats_done_todo() {
        let mut todo = Todo::new(12, "walk dog".into());
        todo.done = true;
        assert_eq!(format_todo(&todo), "[x] 12: walk dog");
    }
}
