use crate::catalog::ItemCatalog;
use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::store::ScriptStore;
use std::path::Path;

/// List or search the item catalog, loading and caching it on first use.
pub fn run<S: ScriptStore>(
    store: &S,
    session: &mut Session,
    query: Option<&str>,
) -> Result<CmdResult> {
    let catalog = match &mut session.catalog {
        Some(catalog) => catalog,
        slot => {
            let path = match session.config.items_file_path.as_deref() {
                Some(p) if store.exists(Path::new(p)) => p.to_string(),
                _ => {
                    return Ok(CmdResult::default()
                        .with_message(CmdMessage::warning("No valid items file selected")));
                }
            };
            let content = store.read_to_string(Path::new(&path))?;
            slot.insert(ItemCatalog::from_text(&content))
        }
    };

    Ok(CmdResult::default().with_items(catalog.search(query.unwrap_or(""))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CraftzConfig;
    use crate::store::memory::InMemoryStore;

    fn session_with_items() -> (InMemoryStore, Session) {
        let store = InMemoryStore::new()
            .with_file("items.txt", "minecraft:oak_planks\nminecraft:oak_log\nminecraft:birch_planks\n");
        let session = Session::new(CraftzConfig {
            items_file_path: Some("items.txt".to_string()),
            recipes_file_path: None,
        });
        (store, session)
    }

    #[test]
    fn lists_all_items_without_a_query() {
        let (store, mut session) = session_with_items();
        let result = run(&store, &mut session, None).unwrap();
        assert_eq!(result.items.len(), 3);
    }

    #[test]
    fn ranks_exact_matches_first_and_drops_the_rest() {
        let (store, mut session) = session_with_items();
        let result = run(&store, &mut session, Some("oak")).unwrap();
        assert_eq!(
            result.items,
            vec!["minecraft:oak_planks", "minecraft:oak_log"]
        );
    }

    #[test]
    fn catalog_is_cached_after_first_load() {
        let (store, mut session) = session_with_items();
        run(&store, &mut session, None).unwrap();
        assert!(session.catalog.is_some());

        // A second run works even if the backing file disappears.
        let empty_store = InMemoryStore::new();
        let result = run(&empty_store, &mut session, Some("oak")).unwrap();
        assert_eq!(result.items.len(), 2);
    }

    #[test]
    fn missing_items_file_is_a_status_message() {
        let store = InMemoryStore::new();
        let mut session = Session::default();
        let result = run(&store, &mut session, None).unwrap();
        assert!(result.items.is_empty());
        assert!(!result.messages.is_empty());
    }
}
