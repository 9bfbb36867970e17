//! Manifest persistence.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::{MANIFEST_FILE, Manifest};
use crate::debug;
use crate::utils::date::DateTimeUtc;

impl Manifest {
    /// Load the manifest from `dir`.
    ///
    /// Fails open: a missing file or malformed JSON yields a fresh empty
    /// manifest. The manifest is a cache of upstream state, so a lost or
    /// corrupt ledger only costs a full re-sync.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(MANIFEST_FILE);
        match fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(manifest) => manifest,
                Err(e) => {
                    debug!("manifest"; "malformed {}: {} (starting fresh)", path.display(), e);
                    Self::empty()
                }
            },
            Err(_) => Self::empty(),
        }
    }

    /// Save the manifest into `dir`, refreshing `generatedAt`.
    ///
    /// Writes to a temp file and renames so readers never observe a
    /// partially written ledger.
    pub fn save(&mut self, dir: &Path) -> Result<()> {
        self.generated_at = DateTimeUtc::now().to_rfc3339();

        let path = dir.join(MANIFEST_FILE);
        let tmp = dir.join(format!("{MANIFEST_FILE}.tmp"));
        let json = serde_json::to_string_pretty(self)?;

        fs::write(&tmp, json)
            .with_context(|| format!("failed to write manifest to {}", tmp.display()))?;
        fs::rename(&tmp, &path)
            .with_context(|| format!("failed to move manifest into {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ManifestEntry;
    use tempfile::TempDir;

    fn sample_entry(id: &str) -> ManifestEntry {
        ManifestEntry::new(id, "arrow", "arrow-16px.svg", 16, 16, "abc123")
    }

    #[test]
    fn test_load_missing_is_empty() {
        let dir = TempDir::new().unwrap();
        let manifest = Manifest::load(dir.path());
        assert!(manifest.icons.is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "{not json").unwrap();
        let manifest = Manifest::load(dir.path());
        assert!(manifest.icons.is_empty());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = TempDir::new().unwrap();

        let mut manifest = Manifest::empty();
        manifest.icons.push(sample_entry("1:1"));
        manifest.icons.push(sample_entry("1:2"));
        let stale_stamp = "2000-01-01T00:00:00Z".to_string();
        manifest.generated_at = stale_stamp.clone();

        manifest.save(dir.path()).unwrap();
        let loaded = Manifest::load(dir.path());

        // Icons survive byte-for-byte; generatedAt is refreshed by save
        assert_eq!(loaded.icons, manifest.icons);
        assert_ne!(loaded.generated_at, stale_stamp);
        assert!(DateTimeUtc::parse(&loaded.generated_at).is_some());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        Manifest::empty().save(dir.path()).unwrap();
        assert!(!dir.path().join(format!("{MANIFEST_FILE}.tmp")).exists());
        assert!(dir.path().join(MANIFEST_FILE).exists());
    }
}
