//! Set-difference between the freshly computed entries and the stored
//! ledger, keyed by upstream id.
//!
//! An id appears in at most one of {new, deleted, updated}; ids with
//! identical fields on both sides appear in none. Output order follows
//! the input order of the side being filtered.

use rustc_hash::FxHashMap;

use super::ManifestEntry;
use crate::log;
use crate::utils::plural::plural_count;

/// Entries of `current` whose id is absent from `previous`.
pub fn find_new(current: &[ManifestEntry], previous: &[ManifestEntry]) -> Vec<ManifestEntry> {
    let known = id_lookup(previous);
    current
        .iter()
        .filter(|entry| !known.contains_key(entry.id.as_str()))
        .cloned()
        .collect()
}

/// Entries of `previous` whose id is absent from `current`.
pub fn find_deleted(current: &[ManifestEntry], previous: &[ManifestEntry]) -> Vec<ManifestEntry> {
    let live = id_lookup(current);
    previous
        .iter()
        .filter(|entry| !live.contains_key(entry.id.as_str()))
        .cloned()
        .collect()
}

/// Entries of `current` whose id exists in `previous` but whose name,
/// dimensions, file name, or hash differ.
pub fn find_updated(current: &[ManifestEntry], previous: &[ManifestEntry]) -> Vec<ManifestEntry> {
    let known = id_lookup(previous);
    current
        .iter()
        .filter(|entry| {
            known
                .get(entry.id.as_str())
                .is_some_and(|prev| fields_differ(entry, prev))
        })
        .cloned()
        .collect()
}

fn fields_differ(a: &ManifestEntry, b: &ManifestEntry) -> bool {
    a.name != b.name
        || a.width != b.width
        || a.height != b.height
        || a.file_name != b.file_name
        || a.hash != b.hash
}

/// Id lookup map, built once per diff.
fn id_lookup(entries: &[ManifestEntry]) -> FxHashMap<&str, &ManifestEntry> {
    entries
        .iter()
        .map(|entry| (entry.id.as_str(), entry))
        .collect()
}

/// The three diff results of one sync run.
#[derive(Debug, Default)]
pub struct ManifestDiff {
    pub new: Vec<ManifestEntry>,
    pub deleted: Vec<ManifestEntry>,
    pub updated: Vec<ManifestEntry>,
}

impl ManifestDiff {
    pub fn compute(current: &[ManifestEntry], previous: &[ManifestEntry]) -> Self {
        Self {
            new: find_new(current, previous),
            deleted: find_deleted(current, previous),
            updated: find_updated(current, previous),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.new.is_empty() && self.deleted.is_empty() && self.updated.is_empty()
    }

    /// Log one line per changed icon plus a summary.
    pub fn log_summary(&self) {
        for icon in &self.new {
            log!("sync"; "+ {} ({})", icon.name, icon.file_name);
        }
        for icon in &self.deleted {
            log!("sync"; "- {} ({})", icon.name, icon.file_name);
        }
        for icon in &self.updated {
            log!("sync"; "~ {} ({})", icon.name, icon.file_name);
        }

        if self.is_empty() {
            log!("sync"; "no icon changes");
        } else {
            log!("sync"; "{} new, {} deleted, {} updated",
                plural_count(self.new.len(), "icon"),
                self.deleted.len(),
                self.updated.len());
        }
    }
}
