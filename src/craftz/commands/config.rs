use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use std::path::Path;

pub const KEY_ITEMS_FILE: &str = "items-file";
pub const KEY_RECIPES_FILE: &str = "recipes-file";

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Show or change the path configuration. Any change is written back to
/// config.json immediately.
pub fn run(config_dir: &Path, session: &mut Session, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            result = result.with_config(session.config.clone());
        }
        ConfigAction::ShowKey(key) => match key.as_str() {
            KEY_ITEMS_FILE | KEY_RECIPES_FILE => {
                let value = session
                    .config
                    .list_all()
                    .into_iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| v)
                    .unwrap_or_default();
                result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            }
            other => {
                result.add_message(CmdMessage::warning(format!("Unknown config key: {}", other)));
            }
        },
        ConfigAction::Set(key, value) => match key.as_str() {
            KEY_ITEMS_FILE => {
                session.config.items_file_path = Some(value);
                // The cached catalog belongs to the old path.
                session.catalog = None;
                session.config.save(config_dir)?;
                result.add_message(CmdMessage::success(format!("{} updated", key)));
            }
            KEY_RECIPES_FILE => {
                session.config.recipes_file_path = Some(value);
                session.config.save(config_dir)?;
                result.add_message(CmdMessage::success(format!("{} updated", key)));
            }
            other => {
                result.add_message(CmdMessage::warning(format!("Unknown config key: {}", other)));
            }
        },
    }

    Ok(result)
}
