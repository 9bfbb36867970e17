//! Manifest sanity checks.
//!
//! Surfaced by the `manifest` CLI command: hard errors for entries the
//! pipeline cannot work with (missing identity, bad dimensions,
//! duplicates) and warnings for suspicious but valid states.

use rustc_hash::FxHashSet;

use super::{Manifest, ManifestEntry};
use crate::naming::{SizeClass, group_by_base_name};

/// Outcome of validating a manifest. Never panics, never fails the run.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate entries and grouping of a manifest.
pub fn validate_manifest(manifest: &Manifest) -> ValidationReport {
    let mut report = ValidationReport::default();

    let mut seen_files = FxHashSet::default();
    let mut seen_ids = FxHashSet::default();
    let mut duplicate_files = Vec::new();

    for icon in &manifest.icons {
        if icon.id.is_empty() {
            report
                .errors
                .push(format!("icon `{}` is missing an id", icon.file_name));
        } else if !seen_ids.insert(icon.id.as_str()) {
            report.errors.push(format!("duplicate id `{}`", icon.id));
        }

        if icon.file_name.is_empty() {
            report
                .errors
                .push(format!("icon `{}` is missing a file name", icon.id));
            continue;
        }

        if icon.width == 0 {
            report
                .errors
                .push(format!("invalid width for {}", icon.file_name));
        }
        if icon.height == 0 {
            report
                .errors
                .push(format!("invalid height for {}", icon.file_name));
        }

        if !seen_files.insert(icon.file_name.as_str()) {
            duplicate_files.push(icon.file_name.clone());
        }
    }

    if !duplicate_files.is_empty() {
        report.errors.push(format!(
            "duplicate files found: {}",
            duplicate_files.join(", ")
        ));
    }

    if manifest.icons.is_empty() {
        report.warnings.push("no icons in manifest".to_string());
    }

    // Warn about icons exported in a single size: the generated component
    // will silently scale that one variant to every requested size.
    for group in group_by_base_name(&manifest.icons) {
        let available: Vec<&str> = SizeClass::ALL
            .iter()
            .filter(|class| group.sizes.contains_key(class.as_str()))
            .map(|class| class.as_str())
            .collect();

        if available.len() == 1 {
            report.warnings.push(format!(
                "icon `{}` has only one size: {}",
                group.base_name, available[0]
            ));
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, file_name: &str, width: u32) -> ManifestEntry {
        ManifestEntry {
            id: id.to_string(),
            name: id.to_string(),
            file_name: file_name.to_string(),
            width,
            height: width,
            last_modified: "2024-01-01T00:00:00Z".to_string(),
            hash: String::new(),
        }
    }

    #[test]
    fn test_valid_manifest() {
        let mut manifest = Manifest::empty();
        manifest.icons.push(entry("1", "arrow-12px.svg", 12));
        manifest.icons.push(entry("2", "arrow-16px.svg", 16));

        let report = validate_manifest(&manifest);
        assert!(report.is_valid(), "errors: {:?}", report.errors);
    }

    #[test]
    fn test_duplicate_id_and_file() {
        let mut manifest = Manifest::empty();
        manifest.icons.push(entry("1", "arrow-16px.svg", 16));
        manifest.icons.push(entry("1", "arrow-16px.svg", 16));

        let report = validate_manifest(&manifest);
        assert!(!report.is_valid());
        assert!(report.errors.iter().any(|e| e.contains("duplicate id")));
        assert!(report.errors.iter().any(|e| e.contains("duplicate files")));
    }

    #[test]
    fn test_zero_dimensions() {
        let mut manifest = Manifest::empty();
        manifest.icons.push(entry("1", "arrow-16px.svg", 0));

        let report = validate_manifest(&manifest);
        assert!(report.errors.iter().any(|e| e.contains("invalid width")));
        assert!(report.errors.iter().any(|e| e.contains("invalid height")));
    }

    #[test]
    fn test_single_size_warning() {
        let mut manifest = Manifest::empty();
        manifest.icons.push(entry("1", "lonely-16px.svg", 16));

        let report = validate_manifest(&manifest);
        assert!(report.is_valid());
        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.contains("only one size: medium"))
        );
    }

    #[test]
    fn test_empty_manifest_warns() {
        let report = validate_manifest(&Manifest::empty());
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }
}
