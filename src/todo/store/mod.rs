//! # Storage Layer
//!
//! The [`TodoStore`] trait is the load/save seam between command logic and
//! persistence. Every command runs one full cycle against it:
//!
//! ```text
//! load()  ->  mutate TodoList in memory  ->  save()
//! ```
//!
//! There are no partial updates: `save` always receives and writes the whole
//! collection.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON file, normally `~/.todos.json`.
//!   A missing file loads as an empty list.
//! - [`memory::InMemoryStore`]: no persistence, for exercising commands in tests.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "id": 1, "text": "buy milk", "done": true },
//!   { "id": 2, "text": "walk dog", "done": false }
//! ]
//! ```
//!
//! No locking is done. Two processes writing at once race, and the last
//! writer wins.

use crate::error::Result;
use crate::model::TodoList;

pub mod fs;
pub mod memory;

/// Abstract interface for todo persistence.
pub trait TodoStore {
    /// Load the whole collection. Absence of stored state is an empty list.
    fn load(&self) -> Result<TodoList>;

    /// Replace the stored collection with `todos`.
    fn save(&mut self, todos: &TodoList) -> Result<()>;
}
