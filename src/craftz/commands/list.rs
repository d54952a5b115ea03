use crate::book;
use crate::commands::{CmdResult, ListedRecipe, Session};
use crate::error::Result;
use crate::filter;

/// List the book in canonical order, optionally filtered by a search
/// query over the extracted output labels.
///
/// Indices are assigned before filtering, so a narrowed listing still
/// shows each entry's stable deletion handle. Recipe labels are matched
/// as-is (no underscore folding; that is an item-search affordance).
pub fn run(session: &Session, query: Option<&str>) -> Result<CmdResult> {
    let listed: Vec<ListedRecipe> = session
        .book
        .entries()
        .enumerate()
        .map(|(i, (shelf, raw))| ListedRecipe {
            index: i + 1,
            shelf,
            label: book::extract_label(raw).to_string(),
            raw: raw.to_string(),
        })
        .collect();

    let listed = match query {
        Some(q) => filter::rank_by(q, listed, |entry| entry.label.clone()),
        None => listed,
    };

    Ok(CmdResult::default().with_listed(listed))
}
