use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Human-readable, colored when attached to a terminal
    #[default]
    Term,
    /// Pretty-printed JSON on stdout
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "recipebook",
    bin_name = "recipebook",
    version,
    disable_help_subcommand = true
)]
#[command(about = "A small recipe catalog for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $RECIPEBOOK_DATA, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Term, help_heading = "Options")]
    pub output: OutputMode,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recipes, optionally filtered
    #[command(alias = "ls", display_order = 1)]
    List(ListArgs),

    /// Show one or more recipes in full
    #[command(alias = "v", display_order = 2)]
    View {
        /// Recipe ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u32>,
    },

    /// Create a recipe
    #[command(alias = "n", display_order = 3)]
    Create(RecipeArgs),

    /// Update a recipe (unspecified fields keep their current values)
    #[command(alias = "e", display_order = 4)]
    Update {
        /// Recipe id
        id: u32,

        #[command(flatten)]
        fields: RecipeArgs,

        /// Remove the recipe's image
        #[arg(long, conflicts_with_all = ["image", "from_json"])]
        clear_image: bool,
    },

    /// Delete one or more recipes
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Recipe ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u32>,
    },

    /// Add or delete comments
    #[command(display_order = 6)]
    Comment {
        #[command(subcommand)]
        action: CommentCommands,
    },

    /// List the categories in use
    #[command(display_order = 7)]
    Categories,

    /// Copy an image into the catalog and print its URL
    #[command(display_order = 8)]
    Image {
        /// Image file (.jpg, .jpeg, .png or .gif)
        file: PathBuf,
    },

    /// Print the data directory, document and images locations
    #[command(display_order = 9)]
    Path,

    /// Get or set configuration
    #[command(display_order = 10)]
    Config {
        /// Configuration key (data-file, images-dir, max-image-bytes)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Match title or description (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only recipes in this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only recipes with this difficulty
    #[arg(short, long)]
    pub difficulty: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct RecipeArgs {
    /// Recipe title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Free-text description
    #[arg(long)]
    pub description: Option<String>,

    /// An ingredient (repeat for each, in order)
    #[arg(short, long = "ingredient", value_name = "INGREDIENT")]
    pub ingredients: Vec<String>,

    /// A step (repeat for each, in order)
    #[arg(short, long = "step", value_name = "STEP")]
    pub steps: Vec<String>,

    /// Difficulty (Easy, Medium, Hard)
    #[arg(short, long)]
    pub difficulty: Option<String>,

    /// Estimated time, e.g. "45 mins"
    #[arg(long = "time", value_name = "TIME")]
    pub estimated_time: Option<String>,

    /// Image URL, as printed by `recipebook image`
    #[arg(long)]
    pub image: Option<String>,

    /// Category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Read the whole recipe from a JSON file instead of flags
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["title", "description", "ingredients", "steps", "difficulty", "estimated_time", "image", "category"]
    )]
    pub from_json: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum CommentCommands {
    /// Add a comment to a recipe
    Add {
        /// Recipe id
        recipe_id: u32,

        /// Comment author
        #[arg(short, long)]
        author: String,

        /// Comment text
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Delete a comment from a recipe
    #[command(alias = "rm")]
    Delete {
        /// Recipe id
        recipe_id: u32,

        /// Comment id
        comment_id: u32,
    },
}
