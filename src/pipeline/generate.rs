//! The generation pass: SVG directory → component modules.
//!
//! Scans a directory of exported assets, groups them into logical icons,
//! renders one module per icon plus the shared types module and a
//! barrel index. Rendering is pure and parallel; writes are sequential.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::codegen::{
    GenOptions, SizeRequest, build_variants, pick_variant, render_component, render_index,
    render_types_module,
};
use crate::logger::ProgressLine;
use crate::manifest::ManifestEntry;
use crate::naming::{group_by_base_name, safe_component_name};
use crate::svg::{SvgOptimizer, dimensions_from_svg, strip_bom};
use crate::utils::plural::plural_count;
use crate::{debug, log};

/// Outcome of one generation pass.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub components: usize,
    pub skipped: usize,
}

/// Generate component modules for every SVG under `input_dir`.
pub fn generate_components(
    input_dir: &Path,
    out_dir: &Path,
    opts: &GenOptions,
    optimizer: &dyn SvgOptimizer,
    dry_run: bool,
) -> Result<GenerateReport> {
    let entries = scan_svg_dir(input_dir)?;
    if entries.is_empty() {
        log!("generate"; "no svg files in {}", input_dir.display());
        return Ok(GenerateReport::default());
    }

    let groups = group_by_base_name(&entries);
    log!("generate";
        "{} in {} -> {}",
        plural_count(entries.len(), "svg file"),
        plural_count(groups.len(), "icon group"),
        out_dir.display());

    let progress = ProgressLine::new(&[("components", groups.len())]);

    // Rendering is read-only over the input dir, so groups render in
    // parallel; collect preserves group order.
    let rendered: Vec<(String, String)> = groups
        .par_iter()
        .map(|group| {
            let variants = build_variants(group, input_dir, optimizer);
            let name = safe_component_name(&group.base_name, opts.name_case);
            match pick_variant(&variants, SizeRequest::Unspecified) {
                Some(class) => debug!("generate"; "{name}: default variant {class}"),
                None => log!("generate"; "warning: {name} has no drawable variants"),
            }
            let code = render_component(&name, &variants, opts);
            progress.inc("components");
            (name, code)
        })
        .collect();

    progress.finish();

    let mut report = GenerateReport::default();
    let ext = opts.extension();

    if dry_run {
        for (name, _) in &rendered {
            debug!("generate"; "would write {name}.{ext}");
        }
        report.components = rendered.len();
        log!("generate"; "dry run: nothing written");
        return Ok(report);
    }

    fs::create_dir_all(out_dir)
        .with_context(|| format!("cannot create {}", out_dir.display()))?;

    for (name, code) in &rendered {
        let path = out_dir.join(format!("{name}.{ext}"));
        fs::write(&path, code).with_context(|| format!("cannot write {}", path.display()))?;
        report.components += 1;
    }

    if opts.typescript {
        fs::write(out_dir.join("types.tsx"), render_types_module(true))
            .context("cannot write types module")?;
    }

    let mut names: Vec<String> = rendered.iter().map(|(name, _)| name.clone()).collect();
    names.sort();
    names.dedup();
    let index_name = if opts.typescript { "index.ts" } else { "index.js" };
    fs::write(
        out_dir.join(index_name),
        render_index(&names, opts.typescript),
    )
    .context("cannot write index")?;

    log!("generate"; "wrote {}", plural_count(report.components, "component"));
    Ok(report)
}

/// Read every `.svg` under `dir` (non-recursive, sorted by file name)
/// into manifest entries, deriving dimensions from the markup.
fn scan_svg_dir(dir: &Path) -> Result<Vec<ManifestEntry>> {
    let mut files: Vec<String> = fs::read_dir(dir)
        .with_context(|| format!("cannot read {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(".svg"))
        .collect();
    files.sort();

    let mut entries = Vec::with_capacity(files.len());
    for file_name in files {
        let path = dir.join(&file_name);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                debug!("generate"; "cannot read {file_name}: {e} (skipped)");
                continue;
            }
        };
        let (width, height) = dimensions_from_svg(strip_bom(&text));
        entries.push(ManifestEntry::new(
            file_name.clone(),
            file_name.clone(),
            file_name,
            width,
            height,
            String::new(),
        ));
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::NoopOptimizer;
    use tempfile::TempDir;

    fn write_svg(dir: &Path, name: &str, size: u32) {
        let body = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}"><path d="M0 0h{size}"/></svg>"#
        );
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn test_scan_is_sorted_and_sized() {
        let dir = TempDir::new().unwrap();
        write_svg(dir.path(), "zebra-20px.svg", 20);
        write_svg(dir.path(), "arrow-12px.svg", 12);
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let entries = scan_svg_dir(dir.path()).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.file_name.as_str()).collect();
        assert_eq!(names, ["arrow-12px.svg", "zebra-20px.svg"]);
        assert_eq!(entries[0].width, 12);
        assert_eq!(entries[1].width, 20);
    }

    #[test]
    fn test_generates_component_per_group() {
        let input = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write_svg(input.path(), "arrow-left-12px.svg", 12);
        write_svg(input.path(), "arrow-left-16px.svg", 16);
        write_svg(input.path(), "star-16px.svg", 16);

        let report = generate_components(
            input.path(),
            out.path(),
            &GenOptions::default(),
            &NoopOptimizer,
            false,
        )
        .unwrap();

        assert_eq!(report.components, 2);
        assert!(out.path().join("ArrowLeft.tsx").exists());
        assert!(out.path().join("Star.tsx").exists());
        assert!(out.path().join("types.tsx").exists());

        let index = fs::read_to_string(out.path().join("index.ts")).unwrap();
        assert!(index.contains("ArrowLeft"));
        assert!(index.contains("Star"));
    }

    #[test]
    fn test_variants_land_in_one_module() {
        let input = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write_svg(input.path(), "dot-12px.svg", 12);
        write_svg(input.path(), "dot-16px.svg", 16);
        write_svg(input.path(), "dot-20px.svg", 20);

        generate_components(
            input.path(),
            out.path(),
            &GenOptions::default(),
            &NoopOptimizer,
            false,
        )
        .unwrap();

        let code = fs::read_to_string(out.path().join("Dot.tsx")).unwrap();
        assert!(code.contains(r#"viewBox: "0 0 12 12""#));
        assert!(code.contains(r#"viewBox: "0 0 16 16""#));
        assert!(code.contains(r#"viewBox: "0 0 20 20""#));
    }

    #[test]
    fn test_javascript_output_names() {
        let input = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write_svg(input.path(), "star-16px.svg", 16);

        let opts = GenOptions {
            typescript: false,
            ..GenOptions::default()
        };
        generate_components(input.path(), out.path(), &opts, &NoopOptimizer, false).unwrap();

        assert!(out.path().join("Star.jsx").exists());
        assert!(out.path().join("index.js").exists());
        assert!(!out.path().join("types.tsx").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let input = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write_svg(input.path(), "star-16px.svg", 16);

        let report = generate_components(
            input.path(),
            out.path(),
            &GenOptions::default(),
            &NoopOptimizer,
            true,
        )
        .unwrap();

        assert_eq!(report.components, 1);
        assert!(!out.path().join("Star.tsx").exists());
        assert!(!out.path().join("index.ts").exists());
    }

    #[test]
    fn test_empty_dir_is_a_noop() {
        let input = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();

        let report = generate_components(
            input.path(),
            out.path(),
            &GenOptions::default(),
            &NoopOptimizer,
            false,
        )
        .unwrap();
        assert_eq!(report.components, 0);
    }
}
