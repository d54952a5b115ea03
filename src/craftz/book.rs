//! The recipe book: an ordered, two-shelf collection of raw recipe texts.
//!
//! Membership is by exact text value: two structurally equal recipes with
//! different incidental whitespace are distinct entries. That identity is
//! what display, search, and deletion all key on.

use crate::model::{RecipeKind, Shelf};
use crate::parse::ParsedRecipe;
use crate::render;

/// Label used when a recipe text has no recognizable output declaration.
pub const UNKNOWN_LABEL: &str = "Unknown Recipe";

/// Outcome of an [`RecipeBook::append`] attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Added,
    /// Empty text, or text carrying the error sentinel.
    Invalid,
    /// Exact-text duplicate on the smelting shelf.
    Duplicate,
}

#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    crafting: Vec<String>,
    smelting: Vec<String>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a recipe text to the shelf its kind routes to.
    ///
    /// Empty and sentinel-bearing texts are rejected. The smelting shelf
    /// additionally rejects exact-text duplicates; the crafting shelf
    /// does not.
    pub fn append(&mut self, kind: RecipeKind, text: &str) -> AppendOutcome {
        if text.is_empty() || render::is_error(text) {
            return AppendOutcome::Invalid;
        }
        match kind.shelf() {
            Shelf::Crafting => self.crafting.push(text.to_string()),
            Shelf::Smelting => {
                if self.smelting.iter().any(|r| r == text) {
                    return AppendOutcome::Duplicate;
                }
                self.smelting.push(text.to_string());
            }
        }
        AppendOutcome::Added
    }

    /// Remove the first exact-value match, checking crafting then
    /// smelting. Returns whether anything was removed.
    pub fn remove(&mut self, text: &str) -> bool {
        if let Some(pos) = self.crafting.iter().position(|r| r == text) {
            self.crafting.remove(pos);
            return true;
        }
        if let Some(pos) = self.smelting.iter().position(|r| r == text) {
            self.smelting.remove(pos);
            return true;
        }
        false
    }

    /// Drop both shelves and repopulate from a parsed sequence, routing
    /// each entry by its kind.
    pub fn replace_all(&mut self, parsed: Vec<ParsedRecipe>) {
        self.crafting.clear();
        self.smelting.clear();
        for recipe in parsed {
            match recipe.kind.shelf() {
                Shelf::Crafting => self.crafting.push(recipe.raw),
                Shelf::Smelting => self.smelting.push(recipe.raw),
            }
        }
    }

    /// All recipe texts in canonical order: crafting shelf first, then
    /// smelting, each in stored order. This is the file order on save.
    pub fn render_all(&self) -> impl Iterator<Item = &str> {
        self.crafting
            .iter()
            .chain(self.smelting.iter())
            .map(String::as_str)
    }

    /// Canonical order with the owning shelf attached, for display.
    pub fn entries(&self) -> impl Iterator<Item = (Shelf, &str)> {
        self.crafting
            .iter()
            .map(|r| (Shelf::Crafting, r.as_str()))
            .chain(self.smelting.iter().map(|r| (Shelf::Smelting, r.as_str())))
    }

    pub fn len(&self) -> usize {
        self.crafting.len() + self.smelting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crafting.is_empty() && self.smelting.is_empty()
    }
}

/// The display label for a recipe text: the first quoted identifier on the
/// first line carrying the output declaration.
pub fn extract_label(raw: &str) -> &str {
    for line in raw.lines() {
        if line.contains("Item.of(") {
            if let Some(start) = line.find('\'') {
                let rest = &line[start + 1..];
                if let Some(end) = rest.find('\'') {
                    return &rest[..end];
                }
            }
        }
    }
    UNKNOWN_LABEL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TransformMode;
    use crate::parse;

    const SHAPED: &str = "event.shaped(\n  Item.of('minecraft:torch', 4),\n  [\n    'A  ',\n    '   ',\n    '   '\n  ],\n  {\n    A: 'minecraft:coal'\n  }\n)";
    const SMELT: &str = "event.smelting(\n  Item.of('minecraft:iron_ingot', 1),\n  'minecraft:iron_ore',\n  0.7,\n  200\n)";

    #[test]
    fn append_routes_by_shelf() {
        let mut book = RecipeBook::new();
        assert_eq!(book.append(RecipeKind::Shaped, SHAPED), AppendOutcome::Added);
        assert_eq!(
            book.append(RecipeKind::Transform(TransformMode::Smelting), SMELT),
            AppendOutcome::Added
        );

        let entries: Vec<_> = book.entries().collect();
        assert_eq!(entries[0].0, Shelf::Crafting);
        assert_eq!(entries[1].0, Shelf::Smelting);
    }

    #[test]
    fn sentinel_text_is_never_stored() {
        let mut book = RecipeBook::new();
        let outcome = book.append(
            RecipeKind::Shaped,
            "Error: Please fill in input slots and set an output.",
        );
        assert_eq!(outcome, AppendOutcome::Invalid);
        assert!(book.is_empty());

        assert_eq!(book.append(RecipeKind::Shaped, ""), AppendOutcome::Invalid);
        assert!(book.is_empty());
    }

    #[test]
    fn smelting_rejects_duplicates_but_crafting_does_not() {
        let mut book = RecipeBook::new();
        let kind = RecipeKind::Transform(TransformMode::Smelting);
        assert_eq!(book.append(kind, SMELT), AppendOutcome::Added);
        assert_eq!(book.append(kind, SMELT), AppendOutcome::Duplicate);
        assert_eq!(book.len(), 1);

        assert_eq!(book.append(RecipeKind::Shaped, SHAPED), AppendOutcome::Added);
        assert_eq!(book.append(RecipeKind::Shaped, SHAPED), AppendOutcome::Added);
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn remove_is_by_exact_text() {
        let mut book = RecipeBook::new();
        book.append(RecipeKind::Shaped, SHAPED);
        book.append(RecipeKind::Transform(TransformMode::Smelting), SMELT);

        assert!(book.remove(SMELT));
        assert!(!book.remove(SMELT));
        assert_eq!(book.len(), 1);

        // A whitespace variant is a different recipe.
        let variant = SHAPED.replace("  Item.of", "   Item.of");
        assert!(!book.remove(&variant));
    }

    #[test]
    fn replace_all_partitions_and_orders() {
        let text = format!("{}\n\n{}\n\n{}\n", SMELT, SHAPED, SHAPED);
        let mut book = RecipeBook::new();
        book.replace_all(parse::extract(&text));

        let all: Vec<&str> = book.render_all().collect();
        assert_eq!(all.len(), 3);
        // Crafting entries come first regardless of file position.
        assert_eq!(all[0], SHAPED);
        assert_eq!(all[1], SHAPED);
        assert_eq!(all[2], SMELT);
    }

    #[test]
    fn label_is_first_quoted_output_identifier() {
        assert_eq!(extract_label(SHAPED), "minecraft:torch");
        assert_eq!(extract_label(SMELT), "minecraft:iron_ingot");
        assert_eq!(extract_label("no declaration here"), UNKNOWN_LABEL);
    }
}
