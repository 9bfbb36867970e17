//! `generate` subcommand runner.

use std::path::Path;

use anyhow::Result;

use super::GenerateArgs;
use crate::codegen::{GenOptions, SizeRequest, parse_icon_size};
use crate::pipeline::generate::generate_components;
use crate::svg::{NoopOptimizer, SvgOptimizer, UsvgOptimizer};

pub fn run_generate_command(input_dir: &Path, args: &GenerateArgs) -> Result<()> {
    let default_size = match parse_icon_size(&args.icon_size) {
        SizeRequest::Preset(class) => class.pixels(),
        SizeRequest::Pixels(px) => px,
        SizeRequest::Unspecified => anyhow::bail!(
            "invalid --icon-size `{}` (use small, medium, large, or a pixel count)",
            args.icon_size
        ),
    };

    let opts = GenOptions {
        name_case: args.filename_case,
        default_size,
        typescript: args.typescript.unwrap_or(true),
        memo: args.memo.unwrap_or(false),
        forward_ref: args.forward_ref.unwrap_or(true),
    };

    let optimizer: Box<dyn SvgOptimizer> = if args.optimize.unwrap_or(true) {
        Box::new(UsvgOptimizer)
    } else {
        Box::new(NoopOptimizer)
    };

    generate_components(
        input_dir,
        &args.out_dir,
        &opts,
        optimizer.as_ref(),
        args.dry_run,
    )?;
    Ok(())
}
