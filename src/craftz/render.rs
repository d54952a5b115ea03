//! The serializer: pure text construction from a [`Recipe`].
//!
//! Rendering never fails and never touches I/O. An incomplete recipe
//! (no occupied input, or no output item) renders to a sentinel text
//! containing [`ERROR_MARKER`] instead of a recipe; the book refuses to
//! store such text.

use crate::model::{CraftingGrid, Recipe};

/// Marker substring identifying a sentinel error text.
pub const ERROR_MARKER: &str = "Error:";

const MISSING_CRAFT_INPUTS: &str = "Error: Please fill in input slots and set an output.";
const MISSING_TRANSFORM_ITEMS: &str = "Error: Please set input and output items.";

pub fn is_error(text: &str) -> bool {
    text.contains(ERROR_MARKER)
}

/// Render a recipe to its canonical script text.
pub fn render(recipe: &Recipe) -> String {
    match recipe {
        Recipe::Shaped {
            grid,
            output_item,
            output_quantity,
        } => match output_item {
            Some(out) if !grid.is_empty() => render_shaped(grid, out, *output_quantity),
            _ => MISSING_CRAFT_INPUTS.to_string(),
        },
        Recipe::Shapeless {
            grid,
            output_item,
            output_quantity,
        } => match output_item {
            Some(out) if !grid.is_empty() => render_shapeless(grid, out, *output_quantity),
            _ => MISSING_CRAFT_INPUTS.to_string(),
        },
        Recipe::Transform {
            mode,
            input_item,
            output_item,
            output_quantity,
            xp,
            ticks,
        } => match (input_item, output_item) {
            (Some(input), Some(out)) => format!(
                "event.{}(\n  Item.of('{}', {}),\n  '{}',\n  {},\n  {}\n)",
                mode.call_name(),
                out,
                output_quantity,
                input,
                fmt_xp(*xp),
                ticks
            ),
            _ => MISSING_TRANSFORM_ITEMS.to_string(),
        },
    }
}

fn render_shaped(grid: &CraftingGrid, output_item: &str, quantity: u8) -> String {
    // Placeholders are allocated in first-seen order scanning row-major,
    // so the same grid always renders the same text.
    let mut mapping: Vec<(char, String)> = Vec::new();
    let mut rows = Vec::with_capacity(3);

    for row in 0..3 {
        let mut symbols = String::with_capacity(3);
        for col in 0..3 {
            match grid.slot(row, col) {
                Some(item) => {
                    let placeholder = match mapping.iter().find(|(_, i)| i.as_str() == item) {
                        Some((p, _)) => *p,
                        None => {
                            let p = (b'A' + mapping.len() as u8) as char;
                            mapping.push((p, item.to_string()));
                            p
                        }
                    };
                    symbols.push(placeholder);
                }
                None => symbols.push(' '),
            }
        }
        rows.push(format!("    '{}'", symbols));
    }

    let recipe_grid = rows.join(",\n");
    let recipe_mappings = mapping
        .iter()
        .enumerate()
        .map(|(idx, (key, value))| {
            let sep = if idx < mapping.len() - 1 { "," } else { "" };
            format!("    {}: '{}'{}", key, value, sep)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "event.shaped(\n  Item.of('{}', {}),\n  [\n{}\n  ],\n  {{\n{}\n  }}\n)",
        output_item, quantity, recipe_grid, recipe_mappings
    )
}

fn render_shapeless(grid: &CraftingGrid, output_item: &str, quantity: u8) -> String {
    // (item, count) in first-seen order over the grid.
    let mut counts: Vec<(String, u32)> = Vec::new();
    for slot in grid.iter_row_major().flatten() {
        match counts.iter_mut().find(|(item, _)| item.as_str() == slot) {
            Some((_, count)) => *count += 1,
            None => counts.push((slot.to_string(), 1)),
        }
    }

    let mut recipe = format!(
        "event.shapeless(\n  Item.of('{}', {}),\n  [\n",
        output_item, quantity
    );
    for (idx, (item, count)) in counts.iter().enumerate() {
        let formatted = if *count > 1 {
            format!("    '{}x {}'", count, item)
        } else {
            format!("    '{}'", item)
        };
        recipe.push_str(&formatted);
        if idx < counts.len() - 1 {
            recipe.push(',');
        }
        recipe.push('\n');
    }
    recipe.push_str("  ]\n)");
    recipe
}

/// XP always carries a decimal point when integral, matching the script
/// convention (`0.0`, `2.0`, `0.35`).
fn fmt_xp(xp: f64) -> String {
    if xp.fract() == 0.0 {
        format!("{:.1}", xp)
    } else {
        xp.to_string()
    }
}
