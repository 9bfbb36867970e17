//! Case conversion and safe-name derivation for generated components.

use clap::ValueEnum;
use regex::Regex;
use std::sync::LazyLock;

/// Filename/component casing convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum NameCase {
    #[default]
    Pascal,
    Camel,
    Kebab,
    Snake,
}

static NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+").unwrap());
static CASE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static UNSAFE_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s_-]").unwrap());
static LEADING_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+").unwrap());
static SIZE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(s|l|small|large|mini|huge|m|xl|xs|xxs|xxl|3xl|4xl|5xl)[_-]").unwrap()
});
static SIZE_INFIX_S: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)[-_]s($|[-_])").unwrap());
static SIZE_INFIX_L: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)[-_]l($|[-_])").unwrap());

/// JavaScript/React identifiers that cannot name a component.
const RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "export", "extends", "finally", "for", "function", "if", "import", "in", "instanceof",
    "new", "return", "super", "switch", "this", "throw", "try", "typeof", "var", "void", "while",
    "with", "yield", "enum", "implements", "interface", "let", "package", "private", "protected",
    "public", "static", "await", "async", "react", "component", "fragment",
];

/// "arrow-left" -> "ArrowLeft", "user_profile" -> "UserProfile"
pub fn to_pascal_case(s: &str) -> String {
    NON_ALNUM
        .split(s)
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect()
}

/// "arrow-left" -> "arrowLeft"
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => pascal,
    }
}

/// "ArrowLeft" -> "arrow-left"
pub fn to_kebab_case(s: &str) -> String {
    let spaced = CASE_BOUNDARY.replace_all(s, "$1-$2");
    NON_ALNUM
        .replace_all(&spaced, "-")
        .to_lowercase()
        .trim_matches('-')
        .to_string()
}

/// "ArrowLeft" -> "arrow_left"
pub fn to_snake_case(s: &str) -> String {
    let spaced = CASE_BOUNDARY.replace_all(s, "${1}_$2");
    NON_ALNUM
        .replace_all(&spaced, "_")
        .to_lowercase()
        .trim_matches('_')
        .to_string()
}

/// Apply the configured casing convention.
pub fn to_component_name(s: &str, case: NameCase) -> String {
    match case {
        NameCase::Pascal => to_pascal_case(s),
        NameCase::Camel => to_camel_case(s),
        NameCase::Kebab => to_kebab_case(s),
        NameCase::Snake => to_snake_case(s),
    }
}

/// Derive a filesystem-safe kebab name from a raw Figma layer name.
///
/// Falls back to `"icon"` when nothing survives.
pub fn safe_file_name(raw: &str, keep_spaces: bool) -> String {
    let mut name = CASE_BOUNDARY.replace_all(raw.trim(), "$1-$2").into_owned();

    if !keep_spaces {
        static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_]+").unwrap());
        name = SPACES.replace_all(&name, "-").into_owned();
    }

    static NON_SAFE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9-]").unwrap());
    static DASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

    name = NON_SAFE.replace_all(&name, "-").into_owned();
    name = DASHES.replace_all(&name, "-").into_owned();
    name = name.trim_matches('-').to_lowercase();

    if name.is_empty() {
        "icon".to_string()
    } else {
        name
    }
}

/// Remove explicit size markers (prefixes like `s-`, `large-` and `-s-`/`-l-`
/// infixes) from a sanitized file name.
pub fn strip_size_markers(name: &str) -> String {
    let name = SIZE_PREFIX.replace(name, "");
    let name = SIZE_INFIX_S.replace_all(&name, "-$1");
    let name = SIZE_INFIX_L.replace_all(&name, "-$1");
    // Re-sanitize: infix removal can leave doubled dashes
    safe_file_name(&name, false)
}

/// Build a safe component identifier from an arbitrary string.
///
/// Strips unsafe characters and leading digits, applies the casing
/// convention, and prefixes `Icon` whenever the result would be empty,
/// start with a digit, or collide with a reserved word.
pub fn safe_component_name(raw: &str, case: NameCase) -> String {
    let cleaned = UNSAFE_CHARS.replace_all(raw, "");
    let cleaned = LEADING_DIGITS.replace(&cleaned, "");
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return "Icon".to_string();
    }

    let name = to_component_name(cleaned, case);

    let starts_with_digit = name.chars().next().is_some_and(|c| c.is_ascii_digit());
    let reserved = RESERVED_WORDS.contains(&name.to_lowercase().as_str());

    if name.is_empty() || starts_with_digit || reserved {
        format!("Icon{}", to_pascal_case(cleaned))
    } else {
        name
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal() {
        assert_eq!(to_pascal_case("arrow-left"), "ArrowLeft");
        assert_eq!(to_pascal_case("user_profile"), "UserProfile");
        assert_eq!(to_pascal_case("home icon"), "HomeIcon");
    }

    #[test]
    fn test_camel() {
        assert_eq!(to_camel_case("arrow-left"), "arrowLeft");
        assert_eq!(to_camel_case("user_profile"), "userProfile");
    }

    #[test]
    fn test_kebab() {
        assert_eq!(to_kebab_case("ArrowLeft"), "arrow-left");
        assert_eq!(to_kebab_case("userProfile"), "user-profile");
        assert_eq!(to_kebab_case("--edge--"), "edge");
    }

    #[test]
    fn test_snake() {
        assert_eq!(to_snake_case("ArrowLeft"), "arrow_left");
        assert_eq!(to_snake_case("user-profile"), "user_profile");
    }

    #[test]
    fn test_safe_file_name() {
        assert_eq!(safe_file_name("Arrow Left", false), "arrow-left");
        assert_eq!(safe_file_name("chartBar", false), "chart-bar");
        assert_eq!(safe_file_name("weird///name", false), "weird-name");
        assert_eq!(safe_file_name("###", false), "icon");
    }

    #[test]
    fn test_strip_size_markers() {
        assert_eq!(strip_size_markers("s-arrow"), "arrow");
        assert_eq!(strip_size_markers("large-home"), "home");
        assert_eq!(strip_size_markers("arrow-s-down"), "arrow-down");
        assert_eq!(strip_size_markers("arrow-l"), "arrow");
        // Non-marker names pass through
        assert_eq!(strip_size_markers("settings"), "settings");
    }

    #[test]
    fn test_safe_component_name() {
        assert_eq!(safe_component_name("arrow-left", NameCase::Pascal), "ArrowLeft");
        assert_eq!(safe_component_name("123arrow", NameCase::Pascal), "Arrow");
        assert_eq!(safe_component_name("", NameCase::Pascal), "Icon");
        assert_eq!(safe_component_name("###", NameCase::Pascal), "Icon");
        // Reserved word gets the Icon prefix
        assert_eq!(safe_component_name("class", NameCase::Pascal), "IconClass");
    }
}
