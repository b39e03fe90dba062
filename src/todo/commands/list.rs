use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::TodoStore;

pub fn run<S: TodoStore>(store: &S) -> Result<CmdResult> {
    let todos = store.load()?;
    if todos.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No todos"));
        return Ok(result);
    }

    Ok(CmdResult::default().with_listed_todos(todos.iter().cloned().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_reports_no_todos() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();

        assert!(result.listed_todos.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "No todos");
    }

    #[test]
    fn lists_in_insertion_order() {
        let fixture = StoreFixture::new()
            .with_done("buy milk")
            .with_pending("walk dog");
        let result = run(&fixture.store).unwrap();

        let listed: Vec<(u64, &str, bool)> = result
            .listed_todos
            .iter()
            .map(|t| (t.id, t.text.as_str(), t.done))
            .collect();
        assert_eq!(listed, vec![(1, "buy milk", true), (2, "walk dog", false)]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn listing_never_saves() {
        let fixture = StoreFixture::new().with_pending("buy milk");
        run(&fixture.store).unwrap();
        assert_eq!(fixture.store.save_count(), 0);
    }
}
