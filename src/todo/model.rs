use crate::error::{Result, TodoError};
use serde::{Deserialize, Serialize};
use std::slice;

pub type TodoId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl Todo {
    pub fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            done: false,
        }
    }

    /// Marker shown between the brackets when listing.
    pub fn status_marker(&self) -> char {
        if self.done {
            'x'
        } else {
            ' '
        }
    }
}

/// The full ordered collection. Insertion order is display order, and the
/// whole list is the unit of persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList(Vec<Todo>);

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next free id: one past the largest id present, or 1 when empty.
    ///
    /// Lists built by `push` are ordered by id, so this is always the last
    /// element's id plus one. Taking the max keeps ids unique even if the
    /// file was reordered by hand.
    pub fn next_id(&self) -> Result<TodoId> {
        match self.0.iter().map(|t| t.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(TodoError::IdsExhausted(max)),
        }
    }

    /// Append a pending todo with a freshly assigned id.
    pub fn push(&mut self, text: String) -> Result<&Todo> {
        let todo = Todo::new(self.next_id()?, text);
        self.0.push(todo);
        Ok(&self.0[self.0.len() - 1])
    }

    pub fn find_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.0.iter_mut().find(|t| t.id == id)
    }

    pub fn iter(&self) -> slice::Iter<'_, Todo> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Todo>> for TodoList {
    fn from(todos: Vec<Todo>) -> Self {
        Self(todos)
    }
}
