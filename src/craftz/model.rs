pub const GRID_SIZE: usize = 3;

/// Furnace-family recipe variants, named after the KubeJS event calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformMode {
    Smelting,
    Blasting,
    Smoking,
    CampfireCooking,
}

impl TransformMode {
    /// The event call name as it appears in script text.
    pub fn call_name(&self) -> &'static str {
        match self {
            TransformMode::Smelting => "smelting",
            TransformMode::Blasting => "blasting",
            TransformMode::Smoking => "smoking",
            TransformMode::CampfireCooking => "campfireCooking",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeKind {
    Shaped,
    Shapeless,
    Transform(TransformMode),
}

/// The two shelves of the recipe book. Crafting recipes always come first
/// in display and file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shelf {
    Crafting,
    Smelting,
}

impl RecipeKind {
    pub fn shelf(&self) -> Shelf {
        match self {
            RecipeKind::Shaped | RecipeKind::Shapeless => Shelf::Crafting,
            RecipeKind::Transform(_) => Shelf::Smelting,
        }
    }
}

impl Shelf {
    /// Display tag shown before a recipe's label in listings.
    pub fn tag(&self) -> &'static str {
        match self {
            Shelf::Crafting => "[Crafting Table]",
            Shelf::Smelting => "[Smelting/Cooking]",
        }
    }
}

/// A 3×3 arrangement of optional item identifiers.
///
/// Slots are addressed by zero-based (row, col). The grid is the model
/// behind both shaped and shapeless crafting: shaped rendering keeps the
/// arrangement, shapeless rendering only counts occurrences.
#[derive(Debug, Clone, Default)]
pub struct CraftingGrid {
    slots: [[Option<String>; GRID_SIZE]; GRID_SIZE],
}

impl CraftingGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_slot(&mut self, row: usize, col: usize, item: impl Into<String>) {
        self.slots[row][col] = Some(item.into());
    }

    pub fn clear_slot(&mut self, row: usize, col: usize) {
        self.slots[row][col] = None;
    }

    pub fn slot(&self, row: usize, col: usize) -> Option<&str> {
        self.slots[row][col].as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.slots
            .iter()
            .all(|row| row.iter().all(|slot| slot.is_none()))
    }

    /// Row-major iteration over all nine slots. First-seen order over this
    /// iterator drives placeholder allocation and shapeless counting.
    pub fn iter_row_major(&self) -> impl Iterator<Item = Option<&str>> {
        self.slots
            .iter()
            .flat_map(|row| row.iter().map(|slot| slot.as_deref()))
    }
}

/// A structured recipe as assembled by a UI, before rendering.
///
/// Output items are optional so that incomplete selections can be
/// represented; the renderer turns those into the error sentinel instead
/// of a recipe.
#[derive(Debug, Clone)]
pub enum Recipe {
    Shaped {
        grid: CraftingGrid,
        output_item: Option<String>,
        output_quantity: u8,
    },
    Shapeless {
        grid: CraftingGrid,
        output_item: Option<String>,
        output_quantity: u8,
    },
    Transform {
        mode: TransformMode,
        input_item: Option<String>,
        output_item: Option<String>,
        output_quantity: u8,
        xp: f64,
        ticks: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_set_and_clear() {
        let mut grid = CraftingGrid::new();
        assert!(grid.is_empty());

        grid.set_slot(0, 1, "minecraft:stick");
        assert_eq!(grid.slot(0, 1), Some("minecraft:stick"));
        assert!(!grid.is_empty());

        grid.clear_slot(0, 1);
        assert!(grid.is_empty());
    }

    #[test]
    fn row_major_order() {
        let mut grid = CraftingGrid::new();
        grid.set_slot(0, 2, "a");
        grid.set_slot(1, 0, "b");

        let occupied: Vec<&str> = grid.iter_row_major().flatten().collect();
        assert_eq!(occupied, vec!["a", "b"]);
    }

    #[test]
    fn kind_routes_to_shelf() {
        assert_eq!(RecipeKind::Shaped.shelf(), Shelf::Crafting);
        assert_eq!(RecipeKind::Shapeless.shelf(), Shelf::Crafting);
        assert_eq!(
            RecipeKind::Transform(TransformMode::Blasting).shelf(),
            Shelf::Smelting
        );
    }
}
