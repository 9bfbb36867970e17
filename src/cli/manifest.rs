//! `manifest` subcommand runner.
//!
//! Rebuilds a manifest from the SVGs on disk and validates it. By
//! default the rebuild is only reported; `--write` persists it next to
//! the SVGs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::ManifestArgs;
use crate::log;
use crate::manifest::{Manifest, ManifestEntry, hash_file, validate_manifest};
use crate::svg::{dimensions_from_svg, strip_bom};
use crate::utils::plural::plural_count;

pub fn run_manifest_command(input_dir: &Path, args: &ManifestArgs) -> Result<()> {
    let mut manifest = Manifest::empty();
    manifest.icons = scan_entries(input_dir)?;

    log!("manifest";
        "{} in {}",
        plural_count(manifest.icons.len(), "icon"),
        input_dir.display());

    let report = validate_manifest(&manifest);
    for warning in &report.warnings {
        log!("manifest"; "warning: {warning}");
    }
    for error in &report.errors {
        log!("error"; "{error}");
    }

    if !report.is_valid() {
        anyhow::bail!(
            "manifest validation failed with {}",
            plural_count(report.errors.len(), "error")
        );
    }

    if args.write {
        manifest.save(input_dir)?;
        log!("manifest"; "written to {}", input_dir.display());
    }

    Ok(())
}

/// Build manifest entries from the SVG files on disk, sorted by file
/// name. Files are their own identity here; there is no upstream node id
/// to carry.
fn scan_entries(dir: &Path) -> Result<Vec<ManifestEntry>> {
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
        let text = fs::read_to_string(&path).unwrap_or_default();
        let (width, height) = dimensions_from_svg(strip_bom(&text));
        entries.push(ManifestEntry::new(
            file_name.clone(),
            file_name.clone(),
            file_name,
            width,
            height,
            hash_file(&path),
        ));
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_hashes_and_sizes() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("dot-12px.svg"),
            r#"<svg viewBox="0 0 12 12"><circle r="4"/></svg>"#,
        )
        .unwrap();

        let entries = scan_entries(dir.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].width, 12);
        assert!(!entries[0].hash.is_empty());
    }

    #[test]
    fn test_write_persists_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("dot-12px.svg"),
            r#"<svg viewBox="0 0 12 12"><circle r="4"/></svg>"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("dot-16px.svg"),
            r#"<svg viewBox="0 0 16 16"><circle r="6"/></svg>"#,
        )
        .unwrap();

        run_manifest_command(dir.path(), &ManifestArgs { write: true }).unwrap();

        let loaded = Manifest::load(dir.path());
        assert_eq!(loaded.icons.len(), 2);
    }
}
