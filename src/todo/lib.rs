//! # Todo Architecture
//!
//! `todo` keeps a personal list of short tasks in a single JSON file. Each
//! invocation loads the list, applies at most one change, and writes the whole
//! list back.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, prints output, sets the exit code      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Normalizes raw input (words → text, "3" → id)            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load → mutate → save, returns CmdResult                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - TodoStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//!
//! ## Module Overview
//!
//! - [`api`]: facade and entry point for all operations
//! - [`commands`]: `add`, `list`, `done`
//! - [`store`]: storage trait and implementations
//! - [`model`]: `Todo`, `TodoList`, id assignment
//! - [`config`]: storage location
//! - [`logging`]: `RUST_LOG`-driven tracing to stderr
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
