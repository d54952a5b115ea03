use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Recipe;
use crate::render;

/// Render a recipe to its script text. An incomplete recipe yields the
/// sentinel error text as the rendered output; it is display text, not
/// a failure.
pub fn run(recipe: &Recipe) -> Result<CmdResult> {
    Ok(CmdResult::default().with_rendered(render::render(recipe)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CraftingGrid;

    #[test]
    fn renders_into_the_result() {
        let mut grid = CraftingGrid::new();
        grid.set_slot(1, 1, "minecraft:coal_block");
        let result = run(&Recipe::Shapeless {
            grid,
            output_item: Some("minecraft:coal".to_string()),
            output_quantity: 9,
        })
        .unwrap();

        let rendered = result.rendered.unwrap();
        assert!(rendered.starts_with("event.shapeless("));
        assert!(rendered.contains("Item.of('minecraft:coal', 9)"));
    }

    #[test]
    fn incomplete_recipe_renders_the_sentinel() {
        let result = run(&Recipe::Shaped {
            grid: CraftingGrid::new(),
            output_item: None,
            output_quantity: 1,
        })
        .unwrap();
        assert!(render::is_error(&result.rendered.unwrap()));
    }
}
