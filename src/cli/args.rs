//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::naming::NameCase;

/// Iconsync CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Sync icon SVGs and the manifest from a Figma node
    #[command(visible_alias = "s")]
    Sync {
        #[command(flatten)]
        args: SyncArgs,
    },

    /// Generate React icon components from a directory of SVGs
    #[command(visible_alias = "g")]
    Generate {
        /// Directory containing the exported .svg files
        #[arg(value_hint = clap::ValueHint::DirPath)]
        input_dir: PathBuf,

        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Build and validate an icon manifest for a directory of SVGs
    #[command(visible_alias = "m")]
    Manifest {
        /// Directory containing the .svg files
        #[arg(value_hint = clap::ValueHint::DirPath)]
        input_dir: PathBuf,

        #[command(flatten)]
        args: ManifestArgs,
    },
}

/// Sync command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SyncArgs {
    /// Figma file key (falls back to FILE_KEY)
    #[arg(short = 'k', long)]
    pub file_key: Option<String>,

    /// Figma node id, e.g. 1-23 or 1:23 (falls back to NODE_ID)
    #[arg(short = 'n', long)]
    pub node_id: Option<String>,

    /// Full Figma file/design URL with a node-id query parameter;
    /// overrides --file-key and --node-id (falls back to FIGMA_NODE_URL)
    #[arg(short = 'u', long = "figma-url", value_hint = clap::ValueHint::Url)]
    pub figma_url: Option<String>,

    /// Directory to write SVGs and the manifest into
    /// (falls back to OUT_DIR, then ./icons)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub out_dir: Option<PathBuf>,

    /// Smallest icon dimension to accept, in pixels
    #[arg(long, default_value_t = 12)]
    pub min_size: u32,

    /// Largest icon dimension to accept, in pixels
    #[arg(long, default_value_t = 64)]
    pub max_size: u32,

    /// Run the SVG optimizer over each export
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub optimize: Option<bool>,

    /// Export with absolute bounds so padding in the source frame is kept
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub use_absolute_bounds: Option<bool>,

    /// Keep spaces in derived file names instead of dashing them
    #[arg(long)]
    pub keep_name_spaces: bool,

    /// Export URLs requested per API call
    #[arg(short, long, default_value_t = 10)]
    pub concurrency: usize,

    /// Report what would change without writing anything
    #[arg(short, long)]
    pub dry_run: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Generate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Directory to write component modules into
    #[arg(short, long, default_value = "./generated", value_hint = clap::ValueHint::DirPath)]
    pub out_dir: PathBuf,

    /// Case convention for component file names
    #[arg(short = 'c', long = "filename-case", value_enum, default_value_t = NameCase::Pascal)]
    pub filename_case: NameCase,

    /// Default size rendered when no size prop is given
    /// (small, medium, large, or a pixel count)
    #[arg(long, default_value = "16")]
    pub icon_size: String,

    /// Emit TypeScript (.tsx) instead of JavaScript (.jsx)
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub typescript: Option<bool>,

    /// Wrap components in React.memo
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub memo: Option<bool>,

    /// Forward refs to the underlying svg element
    #[arg(long = "ref", action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub forward_ref: Option<bool>,

    /// Run the SVG optimizer before embedding
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub optimize: Option<bool>,

    /// Report what would be generated without writing anything
    #[arg(short, long)]
    pub dry_run: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Manifest command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ManifestArgs {
    /// Write the rebuilt manifest instead of only validating
    #[arg(short, long)]
    pub write: bool,
}
