//! `sync` subcommand runner.

use std::path::PathBuf;

use anyhow::Result;

use super::SyncArgs;
use crate::config::{FigmaEnv, resolve_target};
use crate::figma::{FigmaClient, IconFilter};
use crate::log;
use crate::pipeline::{SyncOptions, run_sync};
use crate::svg::{NoopOptimizer, SvgOptimizer, UsvgOptimizer};
use crate::utils::plural::plural_count;

pub fn run_sync_command(args: &SyncArgs) -> Result<()> {
    let env = FigmaEnv::from_env();
    let token = env.token()?;
    let (file_key, node_id) = resolve_target(
        args.file_key.as_deref(),
        args.node_id.as_deref(),
        args.figma_url.as_deref(),
        &env,
    )?;

    let client = FigmaClient::new(token, args.use_absolute_bounds.unwrap_or(true));

    let optimizer: Box<dyn SvgOptimizer> = if args.optimize.unwrap_or(true) {
        Box::new(UsvgOptimizer)
    } else {
        Box::new(NoopOptimizer)
    };

    let out_dir = args
        .out_dir
        .clone()
        .or_else(|| env.out_dir.clone().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("./icons"));

    let opts = SyncOptions {
        out_dir,
        filter: IconFilter {
            min_size: args.min_size,
            max_size: args.max_size,
        },
        keep_name_spaces: args.keep_name_spaces,
        dry_run: args.dry_run,
        batch_size: args.concurrency,
    };

    let report = run_sync(&client, &file_key, &node_id, optimizer.as_ref(), &opts)?;

    log!("sync";
        "done: {} written, {} unchanged, {} failed",
        report.written, report.skipped, report.failed);

    if report.failed > 0 {
        anyhow::bail!("{} failed to sync", plural_count(report.failed, "icon"));
    }
    Ok(())
}
