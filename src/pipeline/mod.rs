//! The sync pipeline: fetch → normalize → hash → classify → diff →
//! persist.
//!
//! One logical pass per invocation. Fetches are issued in bounded
//! batches; a failed batch or icon is logged and skipped so a mostly
//! successful run still lands. The run is idempotent: hashing,
//! classification, and diffing are pure functions of current input
//! state, so an interrupted run is reconciled by simply re-running.

pub mod generate;

use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use rustc_hash::FxHashMap;

use crate::figma::{IconCandidate, IconFilter, IconSource, collect_icons};
use crate::logger::ProgressLine;
use crate::manifest::{Manifest, ManifestDiff, ManifestEntry, hash_bytes};
use crate::naming::{nearest_standard_size, safe_file_name, strip_size_markers};
use crate::svg::{SvgOptimizer, force_hex_fill_current_color, optimize_or_original, strip_bom};
use crate::utils::plural::plural_count;
use crate::{debug, log};

/// Matches file names that already carry an explicit `-NNpx` suffix.
static PX_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-\d+px$").unwrap());

/// Sync options, resolved from CLI flags and environment.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub out_dir: PathBuf,
    pub filter: IconFilter,
    pub keep_name_spaces: bool,
    pub dry_run: bool,
    pub batch_size: usize,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("./icons"),
            filter: IconFilter::default(),
            keep_name_spaces: false,
            dry_run: false,
            batch_size: 10,
        }
    }
}

/// Outcome of one sync run.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub total: usize,
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
    pub diff: ManifestDiff,
}

/// Run one sync pass against the design source.
pub fn run_sync(
    source: &dyn IconSource,
    file_key: &str,
    node_id: &str,
    optimizer: &dyn SvgOptimizer,
    opts: &SyncOptions,
) -> Result<SyncReport> {
    if !opts.dry_run {
        fs::create_dir_all(&opts.out_dir)
            .with_context(|| format!("cannot create {}", opts.out_dir.display()))?;
    }

    let mut manifest = Manifest::load(&opts.out_dir);

    log!("sync"; "fetching node {} ...", node_id);
    let (_resolved_id, document) = source.fetch_document(file_key, node_id)?;

    let icons = collect_icons(&document, &opts.filter);
    if icons.is_empty() {
        log!("sync"; "no icons matched (sizes {}-{}px, near-square only)",
            opts.filter.min_size, opts.filter.max_size);
        return Ok(SyncReport::default());
    }
    log!("sync"; "found {} to export", plural_count(icons.len(), "icon"));

    // Per-run lookup, rebuilt from scratch every invocation
    let previous_by_id: FxHashMap<&str, &ManifestEntry> = manifest
        .icons
        .iter()
        .map(|entry| (entry.id.as_str(), entry))
        .collect();

    let mut report = SyncReport {
        total: icons.len(),
        ..SyncReport::default()
    };
    let mut current: Vec<ManifestEntry> = Vec::with_capacity(icons.len());

    let progress = ProgressLine::new(&[("icons", icons.len())]);

    for batch in icons.chunks(opts.batch_size.max(1)) {
        let ids: Vec<&str> = batch.iter().map(|icon| icon.id.as_str()).collect();

        let urls = match source.fetch_svg_urls(file_key, &ids) {
            Ok(urls) => urls,
            Err(e) => {
                log!("error"; "image batch failed: {e} (continuing)");
                report.failed += batch.len();
                continue;
            }
        };

        for icon in batch {
            let outcome = urls
                .get(&icon.id)
                .and_then(|url| url.as_deref())
                .ok_or_else(|| anyhow::anyhow!("no export url for {} ({})", icon.id, icon.name))
                .and_then(|url| sync_one(source, optimizer, icon, url, &previous_by_id, opts));

            match outcome {
                Ok(SyncOutcome::Written(entry)) => {
                    report.written += 1;
                    current.push(entry);
                }
                Ok(SyncOutcome::Unchanged(entry)) => {
                    report.skipped += 1;
                    current.push(entry);
                }
                Err(e) => {
                    log!("error"; "{} ({}): {e}", icon.name, icon.id);
                    report.failed += 1;
                }
            }
            progress.inc("icons");
        }
    }

    progress.finish();

    report.diff = ManifestDiff::compute(&current, &manifest.icons);
    report.diff.log_summary();

    if opts.dry_run {
        log!("sync"; "dry run: manifest not written");
    } else {
        manifest.icons = current;
        manifest.save(&opts.out_dir)?;
        debug!("sync"; "manifest updated");
    }

    Ok(report)
}

enum SyncOutcome {
    Written(ManifestEntry),
    Unchanged(ManifestEntry),
}

/// Fetch, normalize, and persist a single icon.
fn sync_one(
    source: &dyn IconSource,
    optimizer: &dyn SvgOptimizer,
    icon: &IconCandidate,
    url: &str,
    previous_by_id: &FxHashMap<&str, &ManifestEntry>,
    opts: &SyncOptions,
) -> Result<SyncOutcome> {
    let raw = source.download(url)?;
    let text = strip_bom(&raw);
    let text = optimize_or_original(optimizer, &icon.name, text);
    let text = force_hex_fill_current_color(&text);

    let file_name = derive_file_name(&icon.name, icon.width, opts.keep_name_spaces);
    let hash = hash_bytes(&text);

    // Hash computed over the exact bytes written to disk: a no-op re-run
    // produces the same digest and skips the write entirely.
    if let Some(previous) = previous_by_id.get(icon.id.as_str())
        && previous.hash == hash
        && previous.file_name == file_name
    {
        debug!("sync"; "unchanged: {file_name}");
        return Ok(SyncOutcome::Unchanged((*previous).clone()));
    }

    if opts.dry_run {
        debug!("sync"; "would write {file_name} ({}x{})", icon.width, icon.height);
    } else {
        // A rename leaves the old export behind; clean it up
        if let Some(previous) = previous_by_id.get(icon.id.as_str())
            && previous.file_name != file_name
        {
            let old_path = opts.out_dir.join(&previous.file_name);
            if fs::remove_file(&old_path).is_ok() {
                debug!("sync"; "removed old file: {}", previous.file_name);
            }
        }

        let path = opts.out_dir.join(&file_name);
        fs::write(&path, &text).with_context(|| format!("cannot write {}", path.display()))?;
        debug!("sync"; "saved: {file_name} ({}x{})", icon.width, icon.height);
    }

    Ok(SyncOutcome::Written(ManifestEntry::new(
        icon.id.clone(),
        icon.name.clone(),
        file_name,
        icon.width,
        icon.height,
        hash,
    )))
}

/// Derive the on-disk file name for a fetched icon.
///
/// Sanitizes the Figma layer name, scrubs explicit size markers, and
/// appends a `-NNpx` suffix snapped to the nearest standard size unless
/// the name already carries one.
fn derive_file_name(raw_name: &str, width: u32, keep_spaces: bool) -> String {
    let base = safe_file_name(raw_name, keep_spaces);
    let cleaned = strip_size_markers(&base);

    if PX_SUFFIX.is_match(&cleaned) {
        format!("{cleaned}.svg")
    } else {
        format!("{cleaned}-{}px.svg", nearest_standard_size(width))
    }
}
