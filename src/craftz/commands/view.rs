use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;

/// Fetch a stored recipe's raw text by its 1-based display index.
pub fn run(session: &Session, index: usize) -> Result<CmdResult> {
    let entry = index
        .checked_sub(1)
        .and_then(|i| session.book.entries().nth(i));

    Ok(match entry {
        Some((_, raw)) => CmdResult::default().with_rendered(raw.to_string()),
        None => CmdResult::default()
            .with_message(CmdMessage::warning(format!("No recipe at index {}", index))),
    })
}
