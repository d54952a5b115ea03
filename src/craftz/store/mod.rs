//! # Persistence layer
//!
//! The [`ScriptStore`] trait is the narrow seam between the core and the
//! filesystem: whole-file reads and writes, nothing else. A save is one
//! `write` of the fully rendered script; a load is one `read_to_string`
//! followed by a parse. There is no streaming, no partial access, and no
//! concurrent writer to guard against.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production file-backed storage
//! - [`memory::InMemoryStore`]: in-memory map for testing (no
//!   filesystem needed, fast isolated test execution)

use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for the backing files craftz touches: the recipe
/// script and the item list.
pub trait ScriptStore {
    /// Read a whole file into a string.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Overwrite a whole file with `content`.
    fn write(&mut self, path: &Path, content: &str) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;
}
