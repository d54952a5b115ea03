use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::script;
use crate::store::ScriptStore;
use std::path::Path;

/// Serialize the whole book and overwrite the configured script with it.
pub fn run<S: ScriptStore>(store: &mut S, session: &Session) -> Result<CmdResult> {
    let path = match session.config.recipes_file_path.as_deref() {
        Some(p) => p.to_string(),
        None => {
            return Ok(CmdResult::default()
                .with_message(CmdMessage::warning("No file specified to save")));
        }
    };

    let js = script::is_js_path(Path::new(&path));
    let content = script::render_script(&session.book, js);
    store.write(Path::new(&path), &content)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Recipes saved to {}", path))))
}
