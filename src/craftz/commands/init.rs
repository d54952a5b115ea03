use crate::book::RecipeBook;
use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::script;
use crate::store::ScriptStore;
use std::path::Path;

/// Create a fresh script file with the wrapper skeleton, point the
/// configuration at it, and start from an empty book.
pub fn run<S: ScriptStore>(
    store: &mut S,
    config_dir: &Path,
    session: &mut Session,
    path: &Path,
) -> Result<CmdResult> {
    store.write(path, script::NEW_SCRIPT_SKELETON)?;

    session.config.recipes_file_path = Some(path.display().to_string());
    session.config.save(config_dir)?;
    session.book = RecipeBook::new();

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Created {} and set it as the recipes file",
        path.display()
    ))))
}
