//! CLI surface: argument definitions and one runner per subcommand.

mod args;
pub mod generate;
pub mod manifest;
pub mod sync;

pub use args::{Cli, Commands, GenerateArgs, ManifestArgs, SyncArgs};
