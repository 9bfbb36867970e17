//! Nearest-size variant selection.
//!
//! This is the reference implementation of the picker that ships inside
//! every generated component (see the JS rendition in
//! [`super::render_component`]). Both must resolve identically: the Rust
//! side backs generation-time reporting and tests, the JS side runs in
//! the consumer's renderer.

use super::SvgVariants;
use crate::naming::SizeClass;

/// A requested icon size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeRequest {
    Preset(SizeClass),
    Pixels(u32),
    Unspecified,
}

/// Parse a raw size string: preset names stay presets, numeric strings
/// become pixel requests, anything else is unspecified.
pub fn parse_icon_size(raw: &str) -> SizeRequest {
    if let Some(class) = SizeClass::from_name(raw) {
        return SizeRequest::Preset(class);
    }
    match raw.trim().parse::<u32>() {
        Ok(px) => SizeRequest::Pixels(px),
        Err(_) => SizeRequest::Unspecified,
    }
}

/// Resolve a request against the available (non-empty) variants.
///
/// Returns `None` only when every slot is empty; the component then
/// renders an inert svg at the default canvas size. A numeric request is
/// a stable fold over the available set: the smallest absolute pixel
/// difference wins, earliest declared variant on a tie. A preset that is
/// absent falls back to medium, then the first available variant. This
/// trades fidelity for availability: a partially exported icon still
/// renders, scaled from art drawn for a different pixel grid.
pub fn pick_variant(variants: &SvgVariants, request: SizeRequest) -> Option<SizeClass> {
    let available: Vec<SizeClass> = variants.available().collect();
    if available.is_empty() {
        return None;
    }

    match request {
        SizeRequest::Preset(class) if available.contains(&class) => Some(class),
        SizeRequest::Pixels(px) => available.into_iter().reduce(|best, curr| {
            let best_diff = best.pixels().abs_diff(px);
            let curr_diff = curr.pixels().abs_diff(px);
            if curr_diff < best_diff { curr } else { best }
        }),
        _ => {
            if available.contains(&SizeClass::Medium) {
                Some(SizeClass::Medium)
            } else {
                available.into_iter().next()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::VariantSlot;

    fn variants(small: bool, medium: bool, large: bool) -> SvgVariants {
        let mut v = SvgVariants::default();
        let filled = VariantSlot {
            content: "<path d=\\\"M0 0\\\"/>".to_string(),
            view_box: "0 0 16 16".to_string(),
        };
        if small {
            v.set(SizeClass::Small, filled.clone());
        }
        if medium {
            v.set(SizeClass::Medium, filled.clone());
        }
        if large {
            v.set(SizeClass::Large, filled);
        }
        v
    }

    #[test]
    fn test_empty_available_set() {
        let v = variants(false, false, false);
        assert_eq!(pick_variant(&v, SizeRequest::Pixels(16)), None);
        assert_eq!(pick_variant(&v, SizeRequest::Unspecified), None);
    }

    #[test]
    fn test_exact_preset_match() {
        let v = variants(true, true, true);
        assert_eq!(
            pick_variant(&v, SizeRequest::Preset(SizeClass::Large)),
            Some(SizeClass::Large)
        );
    }

    #[test]
    fn test_numeric_nearest() {
        // available = {small:12, large:20}, requested 17
        // |17-20| = 3 < |17-12| = 5 -> large
        let v = variants(true, false, true);
        assert_eq!(
            pick_variant(&v, SizeRequest::Pixels(17)),
            Some(SizeClass::Large)
        );
    }

    #[test]
    fn test_numeric_tie_prefers_earlier_declared() {
        // available = {small:12, large:20}, requested 16: both differ by 4
        let v = variants(true, false, true);
        assert_eq!(
            pick_variant(&v, SizeRequest::Pixels(16)),
            Some(SizeClass::Small)
        );
    }

    #[test]
    fn test_absent_preset_falls_back_to_first_available() {
        // requested medium, available = {small, large} -> small
        let v = variants(true, false, true);
        assert_eq!(
            pick_variant(&v, SizeRequest::Preset(SizeClass::Medium)),
            Some(SizeClass::Small)
        );
    }

    #[test]
    fn test_unspecified_prefers_medium() {
        let v = variants(true, true, true);
        assert_eq!(
            pick_variant(&v, SizeRequest::Unspecified),
            Some(SizeClass::Medium)
        );
    }

    #[test]
    fn test_parse_icon_size() {
        assert_eq!(
            parse_icon_size("medium"),
            SizeRequest::Preset(SizeClass::Medium)
        );
        assert_eq!(parse_icon_size("18"), SizeRequest::Pixels(18));
        assert_eq!(parse_icon_size("huge"), SizeRequest::Unspecified);
    }
}
