use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::parse;
use crate::store::ScriptStore;
use std::path::Path;

/// Re-read the configured script and rebuild the book from it.
///
/// A missing or unset path leaves the current book untouched and only
/// reports a status message; a load failure must never clear recipes the
/// user still has in memory.
pub fn run<S: ScriptStore>(store: &S, session: &mut Session) -> Result<CmdResult> {
    let path = match session.config.recipes_file_path.as_deref() {
        Some(p) if store.exists(Path::new(p)) => p.to_string(),
        _ => {
            return Ok(CmdResult::default()
                .with_message(CmdMessage::warning("No valid recipes file selected")));
        }
    };

    let content = store.read_to_string(Path::new(&path))?;
    session.book.replace_all(parse::extract(&content));

    Ok(CmdResult::default().with_message(CmdMessage::info(format!(
        "Loaded {} recipe(s) from {}",
        session.book.len(),
        path
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CraftzConfig;
    use crate::model::RecipeKind;
    use crate::store::memory::InMemoryStore;

    const SCRIPT: &str = "ServerEvents.recipes(event => {\n\n  event.smelting(\n  Item.of('out', 1),\n  'in',\n  0.0,\n  200\n)\n})\n";

    fn session_for(path: Option<&str>) -> Session {
        Session::new(CraftzConfig {
            items_file_path: None,
            recipes_file_path: path.map(str::to_string),
        })
    }

    #[test]
    fn loads_and_replaces_the_book() {
        let store = InMemoryStore::new().with_file("recipes.js", SCRIPT);
        let mut session = session_for(Some("recipes.js"));

        run(&store, &mut session).unwrap();
        assert_eq!(session.book.len(), 1);
    }

    #[test]
    fn missing_file_leaves_the_book_alone() {
        let store = InMemoryStore::new();
        let mut session = session_for(Some("nowhere.js"));
        session.book.append(
            RecipeKind::Shaped,
            "event.shaped(\n  Item.of('keep', 1),\n  [\n    'A  ',\n    '   ',\n    '   '\n  ],\n  {\n    A: 'x'\n  }\n)",
        );

        run(&store, &mut session).unwrap();
        assert_eq!(session.book.len(), 1);
    }

    #[test]
    fn unset_path_leaves_the_book_alone() {
        let store = InMemoryStore::new();
        let mut session = session_for(None);

        let result = run(&store, &mut session).unwrap();
        assert!(session.book.is_empty());
        assert!(!result.messages.is_empty());
    }
}
