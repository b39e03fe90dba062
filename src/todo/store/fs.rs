use super::TodoStore;
use crate::error::{Result, TodoError};
use crate::model::TodoList;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(path: &Path, source: std::io::Error) -> TodoError {
        TodoError::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The file to replace on save. A symlinked data file is followed so the
    /// link keeps pointing at live data.
    fn resolve_target(&self) -> Result<PathBuf> {
        match fs::symlink_metadata(&self.path) {
            Ok(meta) if meta.file_type().is_symlink() => match fs::canonicalize(&self.path) {
                Ok(target) => Ok(target),
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    // Dangling link: create the file it names
                    let link = fs::read_link(&self.path)
                        .map_err(|e| Self::write_error(&self.path, e))?;
                    let base = self.path.parent().unwrap_or_else(|| Path::new(""));
                    Ok(base.join(link))
                }
                Err(e) => Err(Self::write_error(&self.path, e)),
            },
            _ => Ok(self.path.clone()),
        }
    }

    fn ensure_parent_dir(target: &Path) -> Result<()> {
        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| Self::write_error(parent, e))?;
            }
        }
        Ok(())
    }
}

impl TodoStore for FileStore {
    fn load(&self) -> Result<TodoList> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no todo file yet, starting empty");
                return Ok(TodoList::new());
            }
            Err(source) => {
                return Err(TodoError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let todos: TodoList = serde_json::from_str(&content).map_err(|source| TodoError::Parse {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = todos.len(), "loaded todos");
        Ok(todos)
    }

    fn save(&mut self, todos: &TodoList) -> Result<()> {
        let target = self.resolve_target()?;
        Self::ensure_parent_dir(&target)?;
        let content = serde_json::to_string_pretty(todos)?;

        // Write beside the target then rename, so a reader never sees a half-written file
        let dir = target.parent().unwrap_or_else(|| Path::new(""));
        let tmp_file = dir.join(format!(".todos-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(|e| Self::write_error(&target, e))?;
        if let Err(e) = fs::rename(&tmp_file, &target) {
            let _ = fs::remove_file(&tmp_file);
            return Err(Self::write_error(&target, e));
        }

        debug!(path = %target.display(), count = todos.len(), "saved todos");
        Ok(())
    }
}
