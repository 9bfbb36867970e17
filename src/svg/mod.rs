//! SVG text processing for embedding into generated components.
//!
//! All transforms are plain text→text: strip the outer document shell,
//! convert attribute names to the single casing React expects, force
//! non-semantic paints to `currentColor` so the rendered component
//! inherits caller-controlled color, and escape for JS template
//! embedding.

mod optimize;

pub use optimize::{NoopOptimizer, SvgOptimizer, UsvgOptimizer, optimize_or_original};

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Default canvas when an asset carries no usable viewBox.
pub const DEFAULT_VIEW_BOX: &str = "0 0 16 16";

static XML_PROLOG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<\?xml.*?\?>").unwrap());
static DOCTYPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<!DOCTYPE[^>]*>").unwrap());
static COMMENTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static SVG_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<svg[^>]*>").unwrap());
static SVG_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</svg>").unwrap());
static ATTR_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-zA-Z:-]+)=").unwrap());
static PAINT_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(fill|stroke)="([^"]*)""#).unwrap());
static HEX_FILL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##"fill="#(?:[A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})""##).unwrap());
static VIEW_BOX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"viewBox=["']([^"']*)["']"#).unwrap());
static WIDTH_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"width=["']([^"']*)["']"#).unwrap());
static HEIGHT_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"height=["']([^"']*)["']"#).unwrap());

/// Strip a leading UTF-8 BOM from downloaded SVG text.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Remove the document shell: XML prolog, doctype, comments, and the
/// outer `<svg>` element, leaving only the drawable children.
pub fn clean_svg_content(content: &str) -> String {
    let content = XML_PROLOG.replace_all(content, "");
    let content = DOCTYPE.replace_all(&content, "");
    let content = COMMENTS.replace_all(&content, "");
    let content = SVG_OPEN.replace_all(&content, "");
    let content = SVG_CLOSE.replace_all(&content, "");
    content.trim().to_string()
}

/// Convert attribute names from kebab-case to camelCase.
///
/// Namespaced attributes get their React special-case spellings.
pub fn convert_attrs_to_camel_case(svg: &str) -> String {
    ATTR_NAME
        .replace_all(svg, |caps: &Captures| {
            let attr = &caps[1];
            let camel = match attr {
                "xml:lang" => "xmlLang".to_string(),
                "xml:space" => "xmlSpace".to_string(),
                "xmlns:xlink" => "xmlnsXlink".to_string(),
                _ => kebab_to_camel(attr),
            };
            format!("{camel}=")
        })
        .into_owned()
}

fn kebab_to_camel(attr: &str) -> String {
    let mut out = String::with_capacity(attr.len());
    let mut upper_next = false;
    for c in attr.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Force non-semantic `fill`/`stroke` paints to `currentColor`.
///
/// `none`, `transparent`, and `currentColor` itself are semantic and
/// kept; everything else is a hard-coded design color.
pub fn replace_color_attributes(svg: &str) -> String {
    PAINT_ATTR
        .replace_all(svg, |caps: &Captures| {
            let attr = &caps[1];
            let value = &caps[2];
            match value {
                "none" | "transparent" | "currentColor" => caps[0].to_string(),
                _ => format!(r#"{attr}="currentColor""#),
            }
        })
        .into_owned()
}

/// Replace literal hex fills with `currentColor`.
///
/// Narrower than [`replace_color_attributes`]: used on the raw export
/// before it is written to disk, where named colors are left alone.
pub fn force_hex_fill_current_color(svg: &str) -> String {
    HEX_FILL
        .replace_all(svg, r#"fill="currentColor""#)
        .into_owned()
}

/// Escape characters that break JS template strings: `\`, `` ` ``, `$`.
pub fn escape_template_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace('$', "\\$")
}

/// Extract the viewBox attribute, defaulting to [`DEFAULT_VIEW_BOX`].
pub fn extract_view_box(svg: &str) -> String {
    VIEW_BOX
        .captures(svg)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| DEFAULT_VIEW_BOX.to_string())
}

/// Derive pixel dimensions from SVG text.
///
/// viewBox wins (width = max-x − min-x); width/height attributes are the
/// fallback; anything else defaults to 16×16.
pub fn dimensions_from_svg(svg: &str) -> (u32, u32) {
    if let Some(caps) = VIEW_BOX.captures(svg) {
        let values: Vec<f64> = caps[1]
            .split_whitespace()
            .filter_map(|v| v.parse().ok())
            .collect();
        if values.len() >= 4 {
            let width = (values[2] - values[0]).round();
            let height = (values[3] - values[1]).round();
            if width > 0.0 && height > 0.0 {
                return (width as u32, height as u32);
            }
        }
    }

    let parse_px = |re: &Regex| {
        re.captures(svg)
            .and_then(|caps| caps[1].trim_end_matches("px").parse::<u32>().ok())
    };
    if let (Some(width), Some(height)) = (parse_px(&WIDTH_ATTR), parse_px(&HEIGHT_ATTR)) {
        return (width, height);
    }

    (16, 16)
}
