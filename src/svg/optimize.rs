//! Asset normalization boundary.
//!
//! Optimization is best-effort: any failure falls back to the input text
//! unchanged, so a pathological asset degrades to "embedded as exported"
//! instead of failing the run.

use anyhow::Result;

use crate::debug;

/// Text→text SVG normalizer.
pub trait SvgOptimizer: Sync {
    fn optimize(&self, svg: &str) -> Result<String>;
}

/// Built-in normalizer: parse with usvg and re-serialize the simplified
/// tree. Resolves defs/uses, drops editor metadata, normalizes paths.
pub struct UsvgOptimizer;

impl SvgOptimizer for UsvgOptimizer {
    fn optimize(&self, svg: &str) -> Result<String> {
        let tree = usvg::Tree::from_str(svg, &usvg::Options::default())?;
        Ok(tree.to_string(&usvg::WriteOptions::default()))
    }
}

/// Pass-through for `--optimize=false`.
pub struct NoopOptimizer;

impl SvgOptimizer for NoopOptimizer {
    fn optimize(&self, svg: &str) -> Result<String> {
        Ok(svg.to_string())
    }
}

/// Run the normalizer, falling back to the original text on failure.
pub fn optimize_or_original(optimizer: &dyn SvgOptimizer, name: &str, svg: &str) -> String {
    match optimizer.optimize(svg) {
        Ok(optimized) => optimized,
        Err(e) => {
            debug!("svg"; "optimize failed for {}: {} (keeping original)", name, e);
            svg.to_string()
        }
    }
}
