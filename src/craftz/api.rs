//! # API facade
//!
//! `CraftzApi` is the single entry point for every operation, regardless
//! of the UI driving it. It owns the [`Session`] (the live book, the
//! cached item catalog, the path configuration) and dispatches to the
//! command modules; it never prints, never exits, and never assumes a
//! terminal. Generic over [`ScriptStore`] so tests run against
//! `InMemoryStore` without touching the filesystem.
//!
//! The append/save split is deliberate and mirrors the session lifecycle:
//! `add` only mutates the in-memory book, `save` is the one operation
//! that overwrites the backing script. Clients wanting one-shot
//! persistence compose the two.

use crate::commands;
use crate::commands::{CmdMessage, CmdResult, Session};
use crate::config::CraftzConfig;
use crate::error::Result;
use crate::model::Recipe;
use crate::store::ScriptStore;
use std::path::{Path, PathBuf};

pub use crate::commands::config::ConfigAction;

const NO_RECIPES_FILE: &str =
    "No recipes file configured (run `craftz init <path>` or `craftz config recipes-file <path>`)";

pub struct CraftzApi<S: ScriptStore> {
    store: S,
    session: Session,
    config_dir: PathBuf,
}

impl<S: ScriptStore> CraftzApi<S> {
    pub fn new(store: S, config: CraftzConfig, config_dir: PathBuf) -> Self {
        Self {
            store,
            session: Session::new(config),
            config_dir,
        }
    }

    /// Render a recipe to script text (possibly the error sentinel).
    pub fn generate(&self, recipe: &Recipe) -> Result<CmdResult> {
        commands::generate::run(recipe)
    }

    /// Append rendered text to the in-memory book. Requires a configured
    /// recipes file: an unanchored book has nowhere to be saved.
    pub fn add(&mut self, text: &str) -> Result<CmdResult> {
        if self.session.config.recipes_file_path.is_none() {
            return Ok(CmdResult::default().with_message(CmdMessage::warning(NO_RECIPES_FILE)));
        }
        commands::add::run(&mut self.session, text)
    }

    /// Remove a recipe by display index.
    pub fn remove(&mut self, index: usize) -> Result<CmdResult> {
        if self.session.config.recipes_file_path.is_none() {
            return Ok(CmdResult::default().with_message(CmdMessage::warning(NO_RECIPES_FILE)));
        }
        commands::delete::run(&mut self.session, index)
    }

    pub fn list(&self, query: Option<&str>) -> Result<CmdResult> {
        commands::list::run(&self.session, query)
    }

    pub fn view(&self, index: usize) -> Result<CmdResult> {
        commands::view::run(&self.session, index)
    }

    /// Rebuild the book from the configured script file.
    pub fn load(&mut self) -> Result<CmdResult> {
        commands::load::run(&self.store, &mut self.session)
    }

    /// Overwrite the configured script file with the whole book.
    pub fn save(&mut self) -> Result<CmdResult> {
        commands::save::run(&mut self.store, &self.session)
    }

    pub fn items(&mut self, query: Option<&str>) -> Result<CmdResult> {
        commands::items::run(&self.store, &mut self.session, query)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, &mut self.session, action)
    }

    pub fn init_script(&mut self, path: &Path) -> Result<CmdResult> {
        commands::init::run(&mut self.store, &self.config_dir, &mut self.session, path)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
