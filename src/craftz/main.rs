use clap::Parser;
use colored::*;
use craftz::api::{ConfigAction, CraftzApi};
use craftz::commands::{CmdMessage, ListedRecipe, MessageLevel};
use craftz::config::CraftzConfig;
use craftz::error::{CraftzError, Result};
use craftz::model::{CraftingGrid, Recipe, Shelf, TransformMode};
use craftz::store::fs::FileStore;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthChar;

mod args;
use args::{Cli, Commands, CookMode};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CraftzApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Shaped {
            out,
            count,
            slot,
            add,
        }) => {
            let grid = build_grid(&slot)?;
            let recipe = Recipe::Shaped {
                grid,
                output_item: Some(out),
                output_quantity: count,
            };
            handle_generate(&mut ctx, &recipe, add)
        }
        Some(Commands::Shapeless {
            out,
            count,
            slot,
            add,
        }) => {
            let grid = build_grid(&slot)?;
            let recipe = Recipe::Shapeless {
                grid,
                output_item: Some(out),
                output_quantity: count,
            };
            handle_generate(&mut ctx, &recipe, add)
        }
        Some(Commands::Cook {
            mode,
            out,
            count,
            input,
            xp,
            secs,
            add,
        }) => {
            let recipe = Recipe::Transform {
                mode: transform_mode(mode),
                input_item: Some(input),
                output_item: Some(out),
                output_quantity: count,
                xp,
                ticks: secs.saturating_mul(20),
            };
            handle_generate(&mut ctx, &recipe, add)
        }
        Some(Commands::List { search }) => handle_list(&ctx, search.as_deref()),
        Some(Commands::Search { term }) => handle_list(&ctx, Some(&term)),
        Some(Commands::View { index }) => handle_view(&ctx, index),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, indexes),
        Some(Commands::Items { query }) => handle_items(&mut ctx, query.as_deref()),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Init { path }) => handle_init(&mut ctx, &path),
        None => handle_list(&ctx, None),
    }
}

fn init_context() -> Result<AppContext> {
    let config_dir = config_dir();
    let config = CraftzConfig::load(&config_dir).unwrap_or_default();

    let mut api = CraftzApi::new(FileStore::new(), config, config_dir);
    // Startup auto-load: pick up the configured script if it is there,
    // stay quiet if it is not.
    let _ = api.load()?;

    Ok(AppContext { api })
}

fn config_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("CRAFTZ_HOME") {
        return PathBuf::from(home);
    }
    let proj_dirs = directories::ProjectDirs::from("com", "craftz", "craftz")
        .expect("Could not determine config dir");
    proj_dirs.config_dir().to_path_buf()
}

fn transform_mode(mode: CookMode) -> TransformMode {
    match mode {
        CookMode::Smelting => TransformMode::Smelting,
        CookMode::Blasting => TransformMode::Blasting,
        CookMode::Smoking => TransformMode::Smoking,
        CookMode::CampfireCooking => TransformMode::CampfireCooking,
    }
}

/// Parse a ROW,COL=ITEM slot spec with 1-based coordinates.
fn parse_slot(spec: &str) -> Result<(usize, usize, String)> {
    let invalid = || CraftzError::Api(format!("Invalid slot spec: {}", spec));

    let (coords, item) = spec.split_once('=').ok_or_else(invalid)?;
    let (row, col) = coords.split_once(',').ok_or_else(invalid)?;
    let row: usize = row.trim().parse().map_err(|_| invalid())?;
    let col: usize = col.trim().parse().map_err(|_| invalid())?;
    if !(1..=3).contains(&row) || !(1..=3).contains(&col) || item.is_empty() {
        return Err(invalid());
    }
    Ok((row - 1, col - 1, item.to_string()))
}

fn build_grid(slots: &[String]) -> Result<CraftingGrid> {
    let mut grid = CraftingGrid::new();
    for spec in slots {
        let (row, col, item) = parse_slot(spec)?;
        grid.set_slot(row, col, item);
    }
    Ok(grid)
}

fn handle_generate(ctx: &mut AppContext, recipe: &Recipe, add: bool) -> Result<()> {
    let result = ctx.api.generate(recipe)?;
    let rendered = result.rendered.unwrap_or_default();
    println!("{}", rendered);

    if add {
        let before = ctx.api.session().book.len();
        let result = ctx.api.add(&rendered)?;
        print_messages(&result.messages);

        if ctx.api.session().book.len() > before {
            let result = ctx.api.save()?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<&str>) -> Result<()> {
    let result = ctx.api.list(search)?;
    print_recipes(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, index: usize) -> Result<()> {
    let result = ctx.api.view(index)?;
    if let Some(raw) = result.rendered {
        println!("{}", raw);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, mut indexes: Vec<usize>) -> Result<()> {
    // Delete back-to-front so earlier removals don't shift later indexes.
    indexes.sort_unstable();
    indexes.dedup();
    let mut removed_any = false;
    for index in indexes.into_iter().rev() {
        let before = ctx.api.session().book.len();
        let result = ctx.api.remove(index)?;
        print_messages(&result.messages);
        removed_any |= ctx.api.session().book.len() < before;
    }

    if removed_any {
        let result = ctx.api.save()?;
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_items(ctx: &mut AppContext, query: Option<&str>) -> Result<()> {
    let result = ctx.api.items(query)?;
    if result.items.is_empty() && result.messages.is_empty() {
        println!("No items found.");
    }
    for item in &result.items {
        println!("{}", item);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        for (k, v) in config.list_all() {
            println!("{} = {}", k, v);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext, path: &str) -> Result<()> {
    let result = ctx.api.init_script(Path::new(path))?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LABEL_WIDTH: usize = 48;

fn print_recipes(recipes: &[ListedRecipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }

    for entry in recipes {
        // Pad before coloring: escape codes would throw off format widths.
        let tag = format!("{:<19}", entry.shelf.tag());
        let tag = match entry.shelf {
            Shelf::Crafting => tag.cyan(),
            Shelf::Smelting => tag.yellow(),
        };
        println!(
            "{:>4}. {} {}",
            entry.index,
            tag,
            truncate_to_width(&entry.label, LABEL_WIDTH)
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_specs_parse_one_based_coordinates() {
        assert_eq!(
            parse_slot("1,3=minecraft:stick").unwrap(),
            (0, 2, "minecraft:stick".to_string())
        );
        assert!(parse_slot("0,1=x").is_err());
        assert!(parse_slot("4,1=x").is_err());
        assert!(parse_slot("1,1=").is_err());
        assert!(parse_slot("nonsense").is_err());
    }

    #[test]
    fn grid_builds_from_specs() {
        let grid = build_grid(&["2,2=minecraft:coal".to_string()]).unwrap();
        assert_eq!(grid.slot(1, 1), Some("minecraft:coal"));
    }

    #[test]
    fn long_labels_are_truncated_with_ellipsis() {
        let truncated = truncate_to_width("a_very_long_item_identifier", 10);
        assert!(truncated.ends_with('…'));
        assert!(truncated.chars().count() <= 10);
    }
}
