use crate::book;
use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;

/// Remove a recipe by its 1-based display index.
///
/// The index is resolved against the canonical order, then removal goes
/// by exact text match, the store's notion of identity.
pub fn run(session: &mut Session, index: usize) -> Result<CmdResult> {
    let target = index
        .checked_sub(1)
        .and_then(|i| session.book.entries().nth(i))
        .map(|(_, raw)| raw.to_string());

    let mut result = CmdResult::default();
    match target {
        Some(raw) => {
            let label = book::extract_label(&raw).to_string();
            if session.book.remove(&raw) {
                result.add_message(CmdMessage::success(format!(
                    "Recipe removed from memory: {}",
                    label
                )));
            } else {
                result.add_message(CmdMessage::warning("Recipe not found in memory"));
            }
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "No recipe at index {}",
                index
            )));
        }
    }
    Ok(result)
}
