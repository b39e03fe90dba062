use crate::error::{Result, TodoError};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

pub const DATA_FILENAME: &str = ".todos.json";

/// Where the todo list lives. Resolved once at startup and passed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    data_file: PathBuf,
}

impl TodoConfig {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// `~/.todos.json` for the current user.
    pub fn from_home() -> Result<Self> {
        let dirs = BaseDirs::new()
            .ok_or_else(|| TodoError::Config("cannot determine home directory".to_string()))?;
        Ok(Self::in_dir(dirs.home_dir()))
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DATA_FILENAME))
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}
