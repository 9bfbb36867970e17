//! Environment configuration for the sync surface.
//!
//! Everything can come from flags; the environment fills the gaps so CI
//! jobs can keep secrets out of the command line. Flags always win over
//! the environment. The access token is only required for `sync`.

use std::env;

use crate::figma::{FigmaError, parse_figma_url};

/// Figma settings read from the process environment.
#[derive(Debug, Clone, Default)]
pub struct FigmaEnv {
    pub token: Option<String>,
    pub file_key: Option<String>,
    pub node_id: Option<String>,
    pub node_url: Option<String>,
    pub out_dir: Option<String>,
}

impl FigmaEnv {
    pub fn from_env() -> Self {
        Self {
            token: read("FIGMA_TOKEN"),
            file_key: read("FILE_KEY"),
            node_id: read("NODE_ID"),
            node_url: read("FIGMA_NODE_URL"),
            out_dir: read("OUT_DIR"),
        }
    }

    pub fn token(&self) -> Result<String, FigmaError> {
        self.token.clone().ok_or(FigmaError::MissingToken)
    }
}

fn read(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Resolve the sync target as `(file_key, node_id)`.
///
/// Precedence per field: CLI flag, then environment variable. A Figma
/// URL (flag or `FIGMA_NODE_URL`) overrides both, since it names the
/// exact node the operator is looking at.
pub fn resolve_target(
    flag_file_key: Option<&str>,
    flag_node_id: Option<&str>,
    flag_url: Option<&str>,
    env: &FigmaEnv,
) -> Result<(String, String), FigmaError> {
    if let Some(url) = flag_url.or(env.node_url.as_deref()) {
        return parse_figma_url(url);
    }

    let file_key = flag_file_key
        .or(env.file_key.as_deref())
        .ok_or_else(|| missing("file key", "--file-key, FILE_KEY, or --figma-url"))?;
    let node_id = flag_node_id
        .or(env.node_id.as_deref())
        .ok_or_else(|| missing("node id", "--node-id, NODE_ID, or --figma-url"))?;

    Ok((file_key.to_string(), node_id.to_string()))
}

fn missing(what: &str, sources: &str) -> FigmaError {
    FigmaError::InvalidUrl(
        format!("<no {what}>"),
        format!("set one of: {sources}"),
    )
}
