//! Iconsync - keeps a generated multi-size icon component library in
//! sync with a Figma source of truth.

mod cli;
mod codegen;
mod config;
mod figma;
mod logger;
mod manifest;
mod naming;
mod pipeline;
mod svg;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Commands::Sync { args } => {
            logger::set_verbose(args.verbose);
            cli::sync::run_sync_command(args)
        }
        Commands::Generate { input_dir, args } => {
            logger::set_verbose(args.verbose);
            cli::generate::run_generate_command(input_dir, args)
        }
        Commands::Manifest { input_dir, args } => cli::manifest::run_manifest_command(input_dir, args),
    }
}
