//! Icon manifest: the persisted ledger mapping icon identities to their
//! last-known content fingerprint and metadata.
//!
//! The manifest is a derived cache, not a source of truth. Loading fails
//! open to an empty manifest; saving rewrites the whole ledger and
//! refreshes `generatedAt`.

mod diff;
mod hash;
mod store;
mod validate;

pub use diff::ManifestDiff;
pub use hash::{hash_bytes, hash_file};
pub use validate::{ValidationReport, validate_manifest};

use serde::{Deserialize, Serialize};

use crate::utils::date::DateTimeUtc;

/// Manifest file name inside the output directory.
pub const MANIFEST_FILE: &str = "icons-manifest.json";

/// Manifest schema version written on save.
pub const MANIFEST_VERSION: &str = "1.0.0";

/// One icon in the manifest ledger.
///
/// `id` is the stable upstream identity (Figma node id) and is unique
/// within a manifest. `hash` is the hex content digest of the normalized
/// SVG, or `""` when the source is missing or unreadable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub id: String,
    pub name: String,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub last_modified: String,
    pub hash: String,
}

impl ManifestEntry {
    /// Create an entry stamped with the current time.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        file_name: impl Into<String>,
        width: u32,
        height: u32,
        hash: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            file_name: file_name.into(),
            width,
            height,
            last_modified: DateTimeUtc::now().to_rfc3339(),
            hash: hash.into(),
        }
    }
}

/// The persisted ledger. Regenerated wholesale on each successful run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub version: String,
    pub generated_at: String,
    pub icons: Vec<ManifestEntry>,
}

impl Manifest {
    /// Fresh empty manifest stamped with the current time.
    pub fn empty() -> Self {
        Self {
            version: MANIFEST_VERSION.to_string(),
            generated_at: DateTimeUtc::now().to_rfc3339(),
            icons: Vec::new(),
        }
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::empty()
    }
}
