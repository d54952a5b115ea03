//! Whole-file script layout.
//!
//! A saved script is a full overwrite: header, blank line, every recipe in
//! book order with a two-space indent on its first line and five blank
//! lines between consecutive recipes, and a closing wrapper line when the
//! target is a `.js` file. Everything the parser needs survives the trip;
//! everything else (the wrapper itself, the spacing) is regenerated on
//! every save.

use crate::book::RecipeBook;
use std::path::Path;

const JS_HEADER: &str = "ServerEvents.recipes(event => {";
const JS_FOOTER: &str = "})";
const PLAIN_HEADER: &str = "// Recipes";
const RECIPE_SEPARATOR: &str = "\n\n\n\n\n";

/// Skeleton written by `init` for a brand-new script file.
pub const NEW_SCRIPT_SKELETON: &str =
    "ServerEvents.recipes(event => {\n  // Recipes will be placed here\n})\n";

pub fn is_js_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "js")
}

/// Render the whole backing file for a book.
pub fn render_script(book: &RecipeBook, js: bool) -> String {
    let mut out = String::new();
    out.push_str(if js { JS_HEADER } else { PLAIN_HEADER });
    out.push('\n');
    out.push('\n');

    for (i, recipe) in book.render_all().enumerate() {
        if i > 0 {
            out.push_str(RECIPE_SEPARATOR);
        }
        out.push_str("  ");
        out.push_str(recipe);
        out.push('\n');
    }

    if js {
        out.push_str(JS_FOOTER);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RecipeKind, TransformMode};
    use crate::parse;

    const SHAPED: &str = "event.shaped(\n  Item.of('minecraft:torch', 4),\n  [\n    'A  ',\n    '   ',\n    '   '\n  ],\n  {\n    A: 'minecraft:coal'\n  }\n)";
    const SMELT: &str = "event.smelting(\n  Item.of('minecraft:iron_ingot', 1),\n  'minecraft:iron_ore',\n  0.7,\n  200\n)";

    fn sample_book() -> RecipeBook {
        let mut book = RecipeBook::new();
        book.append(RecipeKind::Shaped, SHAPED);
        book.append(RecipeKind::Transform(TransformMode::Smelting), SMELT);
        book
    }

    #[test]
    fn js_layout_has_wrapper_and_separator() {
        let script = render_script(&sample_book(), true);

        assert!(script.starts_with("ServerEvents.recipes(event => {\n\n  event.shaped(\n"));
        assert!(script.ends_with("\n)\n})\n"));
        // Exactly five blank lines between the two recipes.
        assert!(script.contains(")\n\n\n\n\n\n  event.smelting("));
    }

    #[test]
    fn plain_layout_uses_comment_header_and_no_footer() {
        let script = render_script(&sample_book(), false);
        assert!(script.starts_with("// Recipes\n\n"));
        assert!(script.ends_with("\n)\n"));
    }

    #[test]
    fn save_then_load_is_idempotent() {
        let book = sample_book();
        let before: Vec<String> = book.render_all().map(str::to_string).collect();

        let mut reloaded = RecipeBook::new();
        reloaded.replace_all(parse::extract(&render_script(&book, true)));
        let after: Vec<String> = reloaded.render_all().map(str::to_string).collect();
        assert_eq!(before, after);

        // And again, through a second cycle.
        let mut twice = RecipeBook::new();
        twice.replace_all(parse::extract(&render_script(&reloaded, true)));
        let again: Vec<String> = twice.render_all().map(str::to_string).collect();
        assert_eq!(before, again);
    }

    #[test]
    fn skeleton_parses_to_an_empty_book() {
        assert!(parse::extract(NEW_SCRIPT_SKELETON).is_empty());
    }

    #[test]
    fn detects_js_paths() {
        assert!(is_js_path(Path::new("kubejs/server_scripts/recipes.js")));
        assert!(!is_js_path(Path::new("recipes.txt")));
        assert!(!is_js_path(Path::new("recipes")));
    }
}
