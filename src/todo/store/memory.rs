use super::TodoStore;
use crate::error::Result;
use crate::model::TodoList;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    todos: Option<TodoList>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(todos: TodoList) -> Self {
        Self {
            todos: Some(todos),
            saves: 0,
        }
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl TodoStore for InMemoryStore {
    fn load(&self) -> Result<TodoList> {
        Ok(self.todos.clone().unwrap_or_default())
    }

    fn save(&mut self, todos: &TodoList) -> Result<()> {
        self.todos = Some(todos.clone());
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---
