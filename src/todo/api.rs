//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for todo
//! operations, whatever the UI.
//!
//! The facade normalizes raw user input (joining words into todo text,
//! parsing id strings) and dispatches to `commands/*.rs`. It does no printing
//! and returns structured [`CmdResult`] values; business logic lives in the
//! commands.
//!
//! `TodoApi<S: TodoStore>` is generic over the store: `TodoApi<FileStore>` in
//! the binary, `TodoApi<InMemoryStore>` in tests.

use crate::commands;
use crate::error::{Result, TodoError};
use crate::model::TodoId;
use crate::store::TodoStore;

pub struct TodoApi<S: TodoStore> {
    store: S,
}

impl<S: TodoStore> TodoApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_todo<I: AsRef<str>>(&mut self, words: &[I]) -> Result<commands::CmdResult> {
        let text = parse_text(words)?;
        commands::add::run(&mut self.store, text)
    }

    pub fn list_todos(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn complete_todo(&mut self, id: &str) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        commands::done::run(&mut self.store, id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn parse_text<I: AsRef<str>>(words: &[I]) -> Result<String> {
    let text = words
        .iter()
        .map(|w| w.as_ref().trim())
        .filter(|w| !w.is_empty())
        .collect::<Vec<&str>>()
        .join(" ");

    if text.is_empty() {
        return Err(TodoError::InvalidArgument(
            "todo text cannot be empty".to_string(),
        ));
    }
    Ok(text)
}

fn parse_id(input: &str) -> Result<TodoId> {
    input
        .trim()
        .parse()
        .map_err(|_| TodoError::InvalidArgument(format!("invalid id: {}", input)))
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
