//! Component synthesis: renders one React component per grouped icon,
//! embedding up to three size variants and the nearest-size picker.
//!
//! Output is deterministic for a given group and option set: variants
//! are enumerated small, medium, large, and nothing time-dependent is
//! emitted.

mod picker;

pub use picker::{SizeRequest, parse_icon_size, pick_variant};

use std::ops::{Index, IndexMut};
use std::path::Path;

use crate::debug;
use crate::naming::{GroupedIcon, NameCase, SizeClass};
use crate::svg::{
    self, DEFAULT_VIEW_BOX, SvgOptimizer, clean_svg_content, convert_attrs_to_camel_case,
    escape_template_string, extract_view_box, replace_color_attributes,
};

/// Generation options, passed through from the CLI surface.
#[derive(Debug, Clone)]
pub struct GenOptions {
    pub name_case: NameCase,
    pub default_size: u32,
    pub typescript: bool,
    pub memo: bool,
    pub forward_ref: bool,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            name_case: NameCase::Pascal,
            default_size: 16,
            typescript: true,
            memo: false,
            forward_ref: true,
        }
    }
}

impl GenOptions {
    pub fn extension(&self) -> &'static str {
        if self.typescript { "tsx" } else { "jsx" }
    }
}

/// One embedded size variant: processed inner markup plus its viewBox.
/// Empty `content` means the slot is declared but has no art.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSlot {
    pub content: String,
    pub view_box: String,
}

impl Default for VariantSlot {
    fn default() -> Self {
        Self {
            content: String::new(),
            view_box: DEFAULT_VIEW_BOX.to_string(),
        }
    }
}

impl VariantSlot {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// The per-size embedded content of one component: always exactly three
/// slots, indexed by [`SizeClass`], some possibly empty. A fixed array
/// keeps "declared but empty" distinct from "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgVariants([VariantSlot; 3]);

impl SvgVariants {
    pub fn set(&mut self, class: SizeClass, slot: VariantSlot) {
        self.0[class.index()] = slot;
    }

    /// Size classes with non-empty content, in declared order.
    pub fn available(&self) -> impl Iterator<Item = SizeClass> + '_ {
        SizeClass::ALL
            .into_iter()
            .filter(|class| !self.0[class.index()].is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(VariantSlot::is_empty)
    }
}

impl Index<SizeClass> for SvgVariants {
    type Output = VariantSlot;

    fn index(&self, class: SizeClass) -> &VariantSlot {
        &self.0[class.index()]
    }
}

impl IndexMut<SizeClass> for SvgVariants {
    fn index_mut(&mut self, class: SizeClass) -> &mut VariantSlot {
        &mut self.0[class.index()]
    }
}

/// Process one raw SVG into an embeddable slot: normalize, strip the
/// document shell, camelCase the attributes, force paints to
/// `currentColor`, escape for template embedding.
pub fn process_variant(name: &str, raw: &str, optimizer: &dyn SvgOptimizer) -> VariantSlot {
    let optimized = svg::optimize_or_original(optimizer, name, raw);
    let view_box = extract_view_box(&optimized);

    let content = clean_svg_content(&optimized);
    let content = convert_attrs_to_camel_case(&content);
    let content = replace_color_attributes(&content);
    let content = escape_template_string(&content);

    VariantSlot { content, view_box }
}

/// Read and process a group's assets from `dir` into the three slots.
///
/// Missing or unreadable files leave their slot empty; the structure is
/// total either way.
pub fn build_variants(
    group: &GroupedIcon,
    dir: &Path,
    optimizer: &dyn SvgOptimizer,
) -> SvgVariants {
    let mut variants = SvgVariants::default();

    for class in SizeClass::ALL {
        let Some(entry) = group.sizes.get(class.as_str()) else {
            continue;
        };
        match std::fs::read_to_string(dir.join(&entry.file_name)) {
            Ok(raw) => variants.set(class, process_variant(&entry.file_name, &raw, optimizer)),
            Err(e) => {
                debug!("generate"; "cannot read {}: {} (slot stays empty)", entry.file_name, e);
            }
        }
    }

    variants
}

// ============================================================================
// Rendering
// ============================================================================

/// Render one component module.
pub fn render_component(component_name: &str, variants: &SvgVariants, opts: &GenOptions) -> String {
    let mut out = String::with_capacity(4096);

    if opts.typescript {
        out.push_str("import * as React from \"react\";\nimport type { IconProps } from \"./types\";\n\n");
    } else {
        out.push_str("import * as React from \"react\";\n\n");
    }

    out.push_str(&format!(
        "/**\n * {component_name} icon component.\n *\n \
         * @description Supports sizes: small (12px), medium (16px, default), large (20px).\n \
         * Automatically falls back to the closest available size if exact one is missing.\n */\n\n"
    ));

    render_svg_children(&mut out, variants);
    out.push_str("\nconst sizeToPixel = {\n  small: 12,\n  medium: 16,\n  large: 20,\n};\n\n");
    render_picker(&mut out, opts.typescript);
    render_component_body(&mut out, component_name, opts);

    out.push_str(&format!(
        "\n{component_name}.displayName = \"{component_name}\";\n\nexport default {component_name};\n"
    ));

    out
}

/// The `svgChildren` literal: three slots in declared order, empty slots
/// emitted explicitly so the structure is always total.
fn render_svg_children(out: &mut String, variants: &SvgVariants) {
    out.push_str("const svgChildren = {\n");
    for class in SizeClass::ALL {
        let slot = &variants[class];
        if slot.is_empty() {
            out.push_str(&format!(
                "  {}: {{ content: {{ __html: \"\" }}, viewBox: \"{}\" }},\n",
                class.as_str(),
                slot.view_box
            ));
        } else {
            out.push_str(&format!(
                "  {}: {{\n    content: {{\n      __html: `{}`,\n    }},\n    viewBox: \"{}\",\n  }},\n",
                class.as_str(),
                slot.content,
                slot.view_box
            ));
        }
    }
    out.push_str("};\n");
}

/// The JS rendition of [`pick_variant`]. Must stay semantically in sync
/// with the Rust reference.
fn render_picker(out: &mut String, typescript: bool) {
    if typescript {
        out.push_str(
            r#"type SizeKey = keyof typeof svgChildren;

function pickClosestSvg(fontSize: "small" | "medium" | "large" | number) {
  const available = Object.entries(svgChildren).filter(
    ([, data]) => data && data.content.__html,
  ) as [SizeKey, (typeof svgChildren)[SizeKey]][];

  if (available.length === 0) {
    return { content: { __html: "" }, viewBox: "0 0 16 16" };
  }

  if (typeof fontSize === "string") {
    const found = available.find(([key]) => key === fontSize);
    if (found) return found[1];
  }

  if (typeof fontSize === "number") {
    return available.reduce((best, curr) => {
      const [bestKey] = best;
      const [currKey] = curr;
      const bestDiff = Math.abs(
        sizeToPixel[bestKey as keyof typeof sizeToPixel] - fontSize,
      );
      const currDiff = Math.abs(
        sizeToPixel[currKey as keyof typeof sizeToPixel] - fontSize,
      );
      return currDiff < bestDiff ? curr : best;
    })[1];
  }

  // Fallback to medium, then first available
  const medium = available.find(([key]) => key === "medium");
  return medium ? medium[1] : available[0][1];
}
"#,
        );
    } else {
        out.push_str(
            r#"function pickClosestSvg(fontSize) {
  const available = Object.entries(svgChildren).filter(
    ([, data]) => data && data.content.__html,
  );

  if (available.length === 0) {
    return { content: { __html: "" }, viewBox: "0 0 16 16" };
  }

  if (typeof fontSize === "string") {
    const found = available.find(([key]) => key === fontSize);
    if (found) return found[1];
  }

  if (typeof fontSize === "number") {
    return available.reduce((best, curr) => {
      const bestDiff = Math.abs(sizeToPixel[best[0]] - fontSize);
      const currDiff = Math.abs(sizeToPixel[curr[0]] - fontSize);
      return currDiff < bestDiff ? curr : best;
    })[1];
  }

  // Fallback to medium, then first available
  const medium = available.find(([key]) => key === "medium");
  return medium ? medium[1] : available[0][1];
}
"#,
        );
    }
}

fn render_component_body(out: &mut String, name: &str, opts: &GenOptions) {
    let params = match (opts.forward_ref, opts.typescript) {
        (true, _) => "(props, ref)",
        (false, true) => "(props: IconProps)",
        (false, false) => "(props)",
    };

    let opener = if opts.forward_ref && opts.typescript {
        format!("React.forwardRef<SVGSVGElement, IconProps>(\n  {params} => {{")
    } else if opts.forward_ref {
        format!("React.forwardRef(\n  {params} => {{")
    } else {
        format!("{params} => {{")
    };

    let size_lookup = if opts.typescript {
        "sizeToPixel[fontSize as keyof typeof sizeToPixel]"
    } else {
        "sizeToPixel[fontSize]"
    };
    let style_cast = if opts.typescript {
        " as React.CSSProperties"
    } else {
        ""
    };
    let ref_attr = if opts.forward_ref {
        "\n        ref={ref}"
    } else {
        ""
    };

    let body = format!(
        r#"    const {{
      fontSize = "medium",
      color = "currentColor",
      style,
      ...other
    }} = props;

    const selected = pickClosestSvg(fontSize);
    const viewBox = selected.viewBox;

    const sizeValue =
      typeof fontSize === "number"
        ? fontSize
        : {size_lookup} || {default_size};

    const finalStyle = {{
      ...style,
      color,
    }}{style_cast};

    return (
      <svg{ref_attr}
        width={{sizeValue}}
        height={{sizeValue}}
        viewBox={{viewBox}}
        fill="none"
        style={{finalStyle}}
        xmlns="http://www.w3.org/2000/svg"
        {{...other}}
      >
        {{selected.content.__html && (
          <g dangerouslySetInnerHTML={{selected.content}} />
        )}}
      </svg>
    );
"#,
        default_size = opts.default_size,
    );

    let closer = if opts.forward_ref { "  },\n)" } else { "}" };

    let definition = format!("{opener}\n{body}{closer}");
    let definition = if opts.memo {
        format!("React.memo({definition})")
    } else {
        definition
    };

    out.push_str(&format!("\nconst {name} = {definition};\n"));
}

/// The shared `IconProps` module, written once per output directory.
pub fn render_types_module(typescript: bool) -> &'static str {
    if typescript {
        r#"import type { SVGProps } from "react";

export interface IconProps extends SVGProps<SVGSVGElement> {
  children?: never;
  fontSize?: "small" | "medium" | "large" | number;
  color?: string;
}
"#
    } else {
        r#"// Shared icon prop shape (documentation only in the JS build):
// fontSize: "small" | "medium" | "large" | number
// color: any CSS color
export {};
"#
    }
}

/// The barrel module re-exporting every generated component.
pub fn render_index(component_names: &[String], typescript: bool) -> String {
    let mut out = String::new();
    if typescript {
        out.push_str("export type { IconProps } from \"./types\";\n\n");
    }
    for name in component_names {
        out.push_str(&format!("export {{ default as {name} }} from \"./{name}\";\n"));
    }
    out
}
