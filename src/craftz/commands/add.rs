use crate::book::AppendOutcome;
use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::model::{RecipeKind, TransformMode};
use crate::parse;

/// Append a rendered recipe text to the in-memory book.
///
/// Anything without a shaped or shapeless opener is routed to the
/// smelting shelf.
pub fn run(session: &mut Session, text: &str) -> Result<CmdResult> {
    let kind = parse::classify(text)
        .unwrap_or(RecipeKind::Transform(TransformMode::Smelting));

    let mut result = CmdResult::default();
    match session.book.append(kind, text) {
        AppendOutcome::Added => {
            result.add_message(CmdMessage::success("Recipe appended to memory"));
        }
        AppendOutcome::Invalid => {
            result.add_message(CmdMessage::warning("Not a valid recipe; nothing added"));
        }
        AppendOutcome::Duplicate => {
            result.add_message(CmdMessage::warning("Recipe already exists in memory"));
        }
    }
    Ok(result)
}
