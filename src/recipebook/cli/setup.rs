use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

/// `0.1.0` on tagged releases, `0.1.0 (abc1234, 2024-01-15)` otherwise.
fn long_version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        let pkg = env!("CARGO_PKG_VERSION");
        match (env!("IS_RELEASE"), env!("GIT_HASH")) {
            ("true", _) | (_, "") => pkg.to_string(),
            (_, hash) => format!("{} ({}, {})", pkg, hash, env!("GIT_COMMIT_DATE")),
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "recipebook", bin_name = "recipebook", version = long_version())]
#[command(about = "A personal recipe book with a trash can", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding recipes.json, trash.json and config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recipes
    #[command(alias = "ls")]
    List,

    /// List recipes in the trash
    Trash,

    /// Add a new recipe
    #[command(alias = "n")]
    Add {
        /// Title of the recipe
        title: String,

        /// Ingredients, free-form
        #[arg(short, long, default_value = "")]
        ingredients: String,

        /// Preparation steps, free-form
        #[arg(short = 's', long = "steps", default_value = "")]
        steps: String,
    },

    /// Change fields of a recipe; fields not given are kept
    #[command(alias = "e")]
    Edit {
        /// Index of the recipe (e.g. 2)
        index: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New ingredients
        #[arg(short, long)]
        ingredients: Option<String>,

        /// New preparation steps
        #[arg(short = 's', long = "steps")]
        steps: Option<String>,
    },

    /// Show one or more recipes in full
    #[command(alias = "v")]
    View {
        /// Indexes of the recipes (e.g. 1 3 t2 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Move one or more recipes to the trash
    #[command(alias = "rm")]
    Delete {
        /// Indexes of the recipes (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Bring recipes back from the trash
    Restore {
        /// Trash indexes (e.g. t1 t2)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Permanently remove recipes from the trash (all of it if no index is given)
    Purge {
        /// Trash indexes (e.g. t1 t2)
        indexes: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (pretty-json, confirm-purge)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory
    Init,
}
