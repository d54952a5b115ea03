use crate::filter;

/// The item source file, loaded wholesale: one identifier per line.
///
/// Kept cached on the session so repeated searches don't re-read the
/// file.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: Vec<String>,
}

impl ItemCatalog {
    /// Build a catalog from raw file text. Blank lines carry no
    /// identifier and are skipped.
    pub fn from_text(text: &str) -> Self {
        Self {
            items: text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Rank items against a query. Identifiers are matched with
    /// underscores folded to spaces, so "iron ingot" finds
    /// `minecraft:iron_ingot`.
    pub fn search(&self, query: &str) -> Vec<String> {
        filter::rank_by(query, self.items.clone(), |item| item.replace('_', " "))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
