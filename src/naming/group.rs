//! Grouping of manifest entries into per-icon size-variant sets.

use std::collections::BTreeMap;

use super::size::{determine_size_class, extract_base_name};
use crate::manifest::ManifestEntry;

/// One logical icon with its available size variants.
///
/// `sizes` is dual-indexed: each entry is stored under its canonical
/// class key (`"small"`, `"medium"`, `"large"`) and under its literal
/// pixel-width key (`"12"`, ...). An absent key means the variant was
/// never exported; it is never padded with placeholder data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedIcon {
    pub base_name: String,
    pub sizes: BTreeMap<String, ManifestEntry>,
}

impl GroupedIcon {
    fn new(base_name: String) -> Self {
        Self {
            base_name,
            sizes: BTreeMap::new(),
        }
    }
}

/// Fold a flat entry list into per-icon groups, sorted by base name.
///
/// Every entry lands in exactly one group. When two entries claim the
/// same canonical class, the one with the larger width wins; the
/// literal-width key is always overwritten by the later entry.
pub fn group_by_base_name(entries: &[ManifestEntry]) -> Vec<GroupedIcon> {
    let mut groups: BTreeMap<String, GroupedIcon> = BTreeMap::new();

    for entry in entries {
        let base_name = extract_base_name(&entry.file_name);
        let class = determine_size_class(&entry.file_name, entry.width);

        let group = groups
            .entry(base_name.clone())
            .or_insert_with(|| GroupedIcon::new(base_name));

        // Quality preference on collision: keep the wider asset
        let keep = group
            .sizes
            .get(class.as_str())
            .is_none_or(|existing| entry.width > existing.width);
        if keep {
            group.sizes.insert(class.as_str().to_string(), entry.clone());
        }

        group.sizes.insert(entry.width.to_string(), entry.clone());
    }

    groups.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::SizeClass;

    fn entry(file_name: &str, width: u32) -> ManifestEntry {
        ManifestEntry {
            id: file_name.to_string(),
            name: file_name.to_string(),
            file_name: file_name.to_string(),
            width,
            height: width,
            last_modified: "2024-01-01T00:00:00Z".to_string(),
            hash: String::new(),
        }
    }

    #[test]
    fn test_groups_by_base_name_sorted() {
        let entries = vec![
            entry("zebra-16px.svg", 16),
            entry("arrow-down-12px.svg", 12),
            entry("arrow-down-16px.svg", 16),
            entry("arrow-down-20px.svg", 20),
        ];

        let groups = group_by_base_name(&entries);
        let names: Vec<_> = groups.iter().map(|g| g.base_name.as_str()).collect();
        assert_eq!(names, ["arrow-down", "zebra"]);

        let arrow = &groups[0];
        assert_eq!(arrow.sizes["small"].width, 12);
        assert_eq!(arrow.sizes["medium"].width, 16);
        assert_eq!(arrow.sizes["large"].width, 20);
    }

    #[test]
    fn test_dual_indexing() {
        let groups = group_by_base_name(&[entry("setting-m.svg", 16)]);
        let group = &groups[0];
        assert_eq!(group.base_name, "setting");
        assert!(group.sizes.contains_key("medium"));
        assert!(group.sizes.contains_key("16"));
    }

    #[test]
    fn test_collision_prefers_larger_width() {
        // Both classify as large by width thresholds
        let entries = vec![entry("star-20.svg", 20), entry("star-32.svg", 32)];

        let groups = group_by_base_name(&entries);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].sizes["large"].width, 32);
        // Literal-width keys keep both
        assert!(groups[0].sizes.contains_key("20"));
        assert!(groups[0].sizes.contains_key("32"));
    }

    #[test]
    fn test_partial_groups_stay_partial() {
        let groups = group_by_base_name(&[entry("lonely-12px.svg", 12)]);
        let group = &groups[0];
        assert!(group.sizes.contains_key(SizeClass::Small.as_str()));
        assert!(!group.sizes.contains_key(SizeClass::Medium.as_str()));
        assert!(!group.sizes.contains_key(SizeClass::Large.as_str()));
    }

    #[test]
    fn test_completeness() {
        let entries = vec![
            entry("a-12px.svg", 12),
            entry("b-16px.svg", 16),
            entry("c-20px.svg", 20),
        ];
        let groups = group_by_base_name(&entries);

        assert_eq!(groups.len(), 3);
        for group in &groups {
            assert!(!group.sizes.is_empty(), "no group may be empty");
        }
        // Every entry is reachable under its canonical class key
        let total: usize = groups
            .iter()
            .map(|g| {
                SizeClass::ALL
                    .iter()
                    .filter(|c| g.sizes.contains_key(c.as_str()))
                    .count()
            })
            .sum();
        assert_eq!(total, entries.len());
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_base_name(&[]).is_empty());
    }
}
