//! Base-name extraction and canonical size classification.
//!
//! Every size variant of a logical icon shares a base name once explicit
//! size suffixes are stripped; the canonical size class comes from a
//! filename hint when present, otherwise from width thresholds.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Export sizes considered "standard" when deriving file-name suffixes.
const STANDARD_SIZES: [u32; 9] = [12, 16, 20, 24, 28, 32, 36, 48, 64];

/// Canonical size class with fixed pixel targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    /// Declared order: small, medium, large. Variant enumeration and
    /// tie-breaking both rely on this order.
    pub const ALL: [SizeClass; 3] = [SizeClass::Small, SizeClass::Medium, SizeClass::Large];

    pub const fn pixels(self) -> u32 {
        match self {
            SizeClass::Small => 12,
            SizeClass::Medium => 16,
            SizeClass::Large => 20,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
        }
    }

    /// Slot position in declared order.
    pub const fn index(self) -> usize {
        match self {
            SizeClass::Small => 0,
            SizeClass::Medium => 1,
            SizeClass::Large => 2,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "small" => Some(SizeClass::Small),
            "medium" => Some(SizeClass::Medium),
            "large" => Some(SizeClass::Large),
            _ => None,
        }
    }
}

impl std::fmt::Display for SizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suffix patterns identifying an explicit size hint, most specific first.
/// Each is applied once, in order.
static SIZE_SUFFIXES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)[-_](small|medium|large|sm|md|lg|s|m|l|12px|16px|20px|12|16|20|24|32)$")
            .unwrap(),
        Regex::new(r"[-_]\d+$").unwrap(),
        Regex::new(r"[-_](12|16|20|24|32)$").unwrap(),
    ]
});

/// Extract the logical icon identity from a file name.
///
/// Strips the extension, then explicit size-hint suffixes. Idempotent:
/// reapplying to an already-stripped name is a no-op.
///
/// # Examples
///
/// - `"arrow-left-16px.svg"` -> `"arrow-left"`
/// - `"home_24.svg"` -> `"home"`
/// - `"user-small.svg"` -> `"user"`
pub fn extract_base_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);

    let mut name = stem.to_string();
    for pattern in SIZE_SUFFIXES.iter() {
        name = pattern.replace(&name, "").into_owned();
    }
    name
}

/// Classify an icon into a canonical size class.
///
/// A filename hint wins over dimensions (case-insensitive substring,
/// checked small, large, medium); otherwise width thresholds apply.
/// Widths above the largest bucket still resolve to large.
pub fn determine_size_class(file_name: &str, width: u32) -> SizeClass {
    let lower = file_name.to_lowercase();

    if lower.contains("small") || lower.contains("sm") {
        return SizeClass::Small;
    }
    if lower.contains("large") || lower.contains("lg") {
        return SizeClass::Large;
    }
    if lower.contains("medium") || lower.contains("md") {
        return SizeClass::Medium;
    }

    if width <= 12 {
        SizeClass::Small
    } else if width <= 16 {
        SizeClass::Medium
    } else {
        SizeClass::Large
    }
}

/// Snap a pixel dimension to the nearest standard export size.
///
/// Used when deriving `-NNpx` file-name suffixes for fetched icons.
/// Non-positive or absurd inputs fall back to 24.
pub fn nearest_standard_size(px: u32) -> u32 {
    if px == 0 {
        return 24;
    }
    STANDARD_SIZES
        .iter()
        .copied()
        .min_by_key(|s| s.abs_diff(px))
        .unwrap_or(24)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_base_name_pixel_suffix() {
        assert_eq!(extract_base_name("icon-12px.svg"), "icon");
        assert_eq!(extract_base_name("icon-16px.svg"), "icon");
        assert_eq!(extract_base_name("icon-20px.svg"), "icon");
    }

    #[test]
    fn test_extract_base_name_short_codes() {
        assert_eq!(extract_base_name("icon-s.svg"), "icon");
        assert_eq!(extract_base_name("icon-m.svg"), "icon");
        assert_eq!(extract_base_name("icon-l.svg"), "icon");
        assert_eq!(extract_base_name("setting_sm.svg"), "setting");
    }

    #[test]
    fn test_extract_base_name_words() {
        assert_eq!(extract_base_name("user-small.svg"), "user");
        assert_eq!(extract_base_name("user-MEDIUM.svg"), "user");
        assert_eq!(extract_base_name("home_24.svg"), "home");
    }

    #[test]
    fn test_extract_base_name_no_suffix() {
        assert_eq!(extract_base_name("icon.svg"), "icon");
        assert_eq!(extract_base_name("user-profile.svg"), "user-profile");
    }

    #[test]
    fn test_extract_base_name_idempotent() {
        for input in ["icon-16px.svg", "icon-s.svg", "arrow-left-large.svg"] {
            let once = extract_base_name(input);
            assert_eq!(extract_base_name(&once), once, "not idempotent for {input}");
        }
    }

    #[test]
    fn test_size_class_from_hint() {
        assert_eq!(determine_size_class("icon-small.svg", 100), SizeClass::Small);
        assert_eq!(determine_size_class("icon-lg.svg", 12), SizeClass::Large);
        assert_eq!(determine_size_class("icon-MD.svg", 20), SizeClass::Medium);
    }

    #[test]
    fn test_size_class_from_width() {
        assert_eq!(determine_size_class("icon.svg", 12), SizeClass::Small);
        assert_eq!(determine_size_class("icon.svg", 16), SizeClass::Medium);
        assert_eq!(determine_size_class("icon.svg", 20), SizeClass::Large);
        // Above the largest bucket still resolves
        assert_eq!(determine_size_class("icon.svg", 64), SizeClass::Large);
    }

    #[test]
    fn test_nearest_standard_size() {
        assert_eq!(nearest_standard_size(13), 12);
        assert_eq!(nearest_standard_size(22), 20);
        assert_eq!(nearest_standard_size(100), 64);
        assert_eq!(nearest_standard_size(0), 24);
    }

    #[test]
    fn test_declared_order() {
        let pixels: Vec<u32> = SizeClass::ALL.iter().map(|c| c.pixels()).collect();
        assert_eq!(pixels, [12, 16, 20]);
    }
}
