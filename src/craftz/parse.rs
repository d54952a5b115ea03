//! The parser: pulls recipe blocks back out of arbitrary script text.
//!
//! This is not a JavaScript parser. It recognizes exactly the six
//! fixed-shape statements the serializer emits, keyed on their opener
//! token and a closing line that is exactly `)`, and ignores everything
//! around them: wrapper calls, comments, blank lines. That tolerance is
//! what lets a craftz-managed block live inside a hand-edited script.

use crate::model::{RecipeKind, TransformMode};

const OPENERS: [(&str, RecipeKind); 6] = [
    ("event.shaped(", RecipeKind::Shaped),
    ("event.shapeless(", RecipeKind::Shapeless),
    ("event.smelting(", RecipeKind::Transform(TransformMode::Smelting)),
    ("event.blasting(", RecipeKind::Transform(TransformMode::Blasting)),
    ("event.smoking(", RecipeKind::Transform(TransformMode::Smoking)),
    (
        "event.campfireCooking(",
        RecipeKind::Transform(TransformMode::CampfireCooking),
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecipe {
    pub kind: RecipeKind,
    pub raw: String,
}

fn opener_kind(trimmed: &str) -> Option<RecipeKind> {
    OPENERS
        .iter()
        .find(|(token, _)| trimmed.starts_with(token))
        .map(|(_, kind)| *kind)
}

/// Classify free recipe text by the first opener token it contains.
///
/// Used when routing externally supplied text (not produced by a scan) to
/// a shelf.
pub fn classify(text: &str) -> Option<RecipeKind> {
    OPENERS
        .iter()
        .find(|(token, _)| text.contains(token))
        .map(|(_, kind)| *kind)
}

/// Extract every recipe block from `text`, in order of appearance.
///
/// A block starts at a line whose trimmed content begins with an opener
/// token and ends at the first following line whose trimmed content is
/// exactly `)`. The opener line is stored trimmed (the save layout
/// indents it by two spaces; trimming keeps save/load idempotent), all
/// later lines verbatim. An opener seen while already inside a block
/// restarts it. A block still open at end of input is dropped.
pub fn extract(text: &str) -> Vec<ParsedRecipe> {
    let mut recipes = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_kind: Option<RecipeKind> = None;

    for line in text.lines() {
        let trimmed = line.trim();

        if let Some(kind) = opener_kind(trimmed) {
            current_kind = Some(kind);
            current = vec![trimmed];
        } else if let Some(kind) = current_kind {
            current.push(line);
            if trimmed == ")" {
                recipes.push(ParsedRecipe {
                    kind,
                    raw: current.join("\n"),
                });
                current_kind = None;
                current.clear();
            }
        }
    }

    recipes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CraftingGrid, Recipe};
    use crate::render;

    #[test]
    fn extracts_blocks_and_ignores_surroundings() {
        let text = "ServerEvents.recipes(event => {\n\
                    \n\
                    \x20 event.smelting(\n\
                    \x20   Item.of('minecraft:iron_ingot', 1),\n\
                    \x20   'minecraft:iron_ore',\n\
                    \x20   0.7,\n\
                    \x20   200\n\
                    )\n\
                    \n\
                    // a stray comment\n\
                    })\n";

        let parsed = extract(text);
        assert_eq!(parsed.len(), 1);
        assert_eq!(
            parsed[0].kind,
            RecipeKind::Transform(TransformMode::Smelting)
        );
        assert!(parsed[0].raw.starts_with("event.smelting("));
        assert!(parsed[0].raw.ends_with("\n)"));
    }

    #[test]
    fn round_trips_serializer_output() {
        let mut grid = CraftingGrid::new();
        grid.set_slot(0, 0, "minecraft:coal");
        grid.set_slot(1, 0, "minecraft:stick");
        let rendered = render::render(&Recipe::Shaped {
            grid,
            output_item: Some("minecraft:torch".to_string()),
            output_quantity: 4,
        });

        let parsed = extract(&rendered);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].kind, RecipeKind::Shaped);
        assert_eq!(parsed[0].raw, rendered);
    }

    #[test]
    fn blank_lines_inside_a_block_are_kept() {
        let text = "event.shapeless(\n  Item.of('x', 1),\n\n  ['a']\n)";
        let parsed = extract(text);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].raw, text);
    }

    #[test]
    fn opener_inside_a_block_restarts_it() {
        let text = "event.smelting(\n  Item.of('a', 1),\nevent.blasting(\n  Item.of('b', 1),\n  'ore',\n  0.0,\n  100\n)";
        let parsed = extract(text);
        assert_eq!(parsed.len(), 1);
        assert_eq!(
            parsed[0].kind,
            RecipeKind::Transform(TransformMode::Blasting)
        );
        assert!(parsed[0].raw.starts_with("event.blasting("));
    }

    #[test]
    fn unterminated_block_is_dropped() {
        let text = "event.smoking(\n  Item.of('a', 1),\n  'fish',\n  0.1,\n  100\n";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn indented_opener_is_stored_trimmed() {
        let text = "  event.campfireCooking(\n  Item.of('a', 1),\n  'fish',\n  0.1,\n  600\n)";
        let parsed = extract(text);
        assert_eq!(parsed.len(), 1);
        assert!(parsed[0].raw.starts_with("event.campfireCooking("));
    }

    #[test]
    fn classify_distinguishes_shaped_from_shapeless() {
        assert_eq!(
            classify("event.shaped(\n ... )"),
            Some(RecipeKind::Shaped)
        );
        assert_eq!(
            classify("event.shapeless(\n ... )"),
            Some(RecipeKind::Shapeless)
        );
        assert_eq!(classify("nothing here"), None);
    }
}
