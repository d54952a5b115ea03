use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "craftz")]
#[command(about = "Grid-driven KubeJS recipe generator and script manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a shaped crafting recipe from grid slots
    Shaped {
        /// Output item identifier (e.g. minecraft:torch)
        #[arg(short, long)]
        out: String,

        /// Output quantity (1-64)
        #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=64))]
        count: u8,

        /// Grid slot assignment ROW,COL=ITEM with 1-based coordinates
        /// (e.g. -s 1,2=minecraft:coal); repeatable
        #[arg(short, long = "slot", required = true)]
        slot: Vec<String>,

        /// Append the recipe to the script instead of only printing it
        #[arg(long)]
        add: bool,
    },

    /// Generate a shapeless crafting recipe from grid slots
    Shapeless {
        /// Output item identifier
        #[arg(short, long)]
        out: String,

        /// Output quantity (1-64)
        #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=64))]
        count: u8,

        /// Grid slot assignment ROW,COL=ITEM with 1-based coordinates;
        /// repeatable. Arrangement is ignored, occurrences are counted.
        #[arg(short, long = "slot", required = true)]
        slot: Vec<String>,

        /// Append the recipe to the script instead of only printing it
        #[arg(long)]
        add: bool,
    },

    /// Generate a furnace-family recipe (smelting, blasting, ...)
    Cook {
        /// Which furnace-family event to emit
        #[arg(value_enum)]
        mode: CookMode,

        /// Output item identifier
        #[arg(short, long)]
        out: String,

        /// Output quantity (1-64)
        #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=64))]
        count: u8,

        /// Input item identifier
        #[arg(short, long)]
        input: String,

        /// Experience reward
        #[arg(long, default_value_t = 0.0)]
        xp: f64,

        /// Cooking time in seconds (stored as ticks, seconds x 20)
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
        secs: u32,

        /// Append the recipe to the script instead of only printing it
        #[arg(long)]
        add: bool,
    },

    /// List recipes in the configured script
    #[command(alias = "ls")]
    List {
        /// Filter by output label
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search recipes by output label
    Search { term: String },

    /// Print a stored recipe's full text
    #[command(alias = "v")]
    View {
        /// Display index as shown by `list`
        index: usize,
    },

    /// Remove recipes by display index
    #[command(alias = "rm")]
    Delete {
        /// Display indexes as shown by `list` (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<usize>,
    },

    /// List or search the item catalog
    Items {
        /// Search query (underscores match spaces)
        query: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (items-file or recipes-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create a fresh recipe script and point the config at it
    Init {
        /// Path of the script to create (e.g. recipes.js)
        path: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum CookMode {
    Smelting,
    Blasting,
    Smoking,
    CampfireCooking,
}
