use super::ScriptStore;
use crate::error::{CraftzError, Result};
use std::fs;
use std::path::Path;

/// File-backed storage: thin wrappers over whole-file std::fs calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }
}

impl ScriptStore for FileStore {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(CraftzError::Io)
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(CraftzError::Io)?;
            }
        }
        fs::write(path, content).map_err(CraftzError::Io)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
