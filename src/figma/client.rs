//! Figma REST client.
//!
//! The pipeline only depends on the [`IconSource`] trait; [`FigmaClient`]
//! is the HTTP implementation. Retry/backoff is deliberately absent: the
//! run is idempotent, so the operator re-runs on transient failures.

use reqwest::blocking::Client;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use super::Node;
use crate::debug;

const API_BASE: &str = "https://api.figma.com/v1";

/// Errors at the design-source boundary.
#[derive(Debug, Error)]
pub enum FigmaError {
    #[error("FIGMA_TOKEN is not set (required for sync)")]
    MissingToken,

    #[error("node `{node_id}` not found in file `{file_key}`")]
    NodeNotFound { file_key: String, node_id: String },

    #[error("figma api returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("invalid figma url `{0}`: {1}")]
    InvalidUrl(String, String),

    #[error("http request failed")]
    Http(#[from] reqwest::Error),
}

/// The design-source fetcher, specified at its boundary.
pub trait IconSource {
    /// Fetch node metadata. Returns the resolved node id (Figma URLs
    /// encode `:` as `-`) and the document subtree.
    fn fetch_document(&self, file_key: &str, node_id: &str) -> Result<(String, Node), FigmaError>;

    /// Resolve a batch of node ids to temporary SVG export URLs.
    /// Ids the upstream could not render map to `None`.
    fn fetch_svg_urls(
        &self,
        file_key: &str,
        ids: &[&str],
    ) -> Result<FxHashMap<String, Option<String>>, FigmaError>;

    /// Download one exported asset as text.
    fn download(&self, url: &str) -> Result<String, FigmaError>;
}

/// HTTP implementation of [`IconSource`].
pub struct FigmaClient {
    token: String,
    http: Client,
    use_absolute_bounds: bool,
}

#[derive(Deserialize)]
struct NodesResponse {
    #[serde(default)]
    nodes: FxHashMap<String, NodeWrapper>,
}

#[derive(Deserialize)]
struct NodeWrapper {
    document: Node,
}

#[derive(Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    images: FxHashMap<String, Option<String>>,
}

impl FigmaClient {
    pub fn new(token: String, use_absolute_bounds: bool) -> Self {
        Self {
            token,
            http: Client::new(),
            use_absolute_bounds,
        }
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response, FigmaError> {
        let resp = self.http.get(url).header("X-Figma-Token", &self.token).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FigmaError::Api {
                status: status.as_u16(),
                body: resp.text().unwrap_or_default(),
            });
        }
        Ok(resp)
    }
}

impl IconSource for FigmaClient {
    fn fetch_document(&self, file_key: &str, node_id: &str) -> Result<(String, Node), FigmaError> {
        let url = format!("{API_BASE}/files/{file_key}/nodes?ids={node_id}");
        let mut data: NodesResponse = self.get(&url)?.json()?;

        if let Some(wrapper) = data.nodes.remove(node_id) {
            return Ok((node_id.to_string(), wrapper.document));
        }

        // Figma URLs encode node ids with `-` in place of `:`
        if !node_id.contains(':') {
            let colon_id = node_id.replace('-', ":");
            debug!("figma"; "node `{}` not found, retrying as `{}`", node_id, colon_id);
            if let Some(wrapper) = data.nodes.remove(&colon_id) {
                return Ok((colon_id, wrapper.document));
            }
        }

        Err(FigmaError::NodeNotFound {
            file_key: file_key.to_string(),
            node_id: node_id.to_string(),
        })
    }

    fn fetch_svg_urls(
        &self,
        file_key: &str,
        ids: &[&str],
    ) -> Result<FxHashMap<String, Option<String>>, FigmaError> {
        let mut url = format!(
            "{API_BASE}/images/{file_key}?ids={}&format=svg",
            ids.join(",")
        );
        if self.use_absolute_bounds {
            url.push_str("&use_absolute_bounds=true");
        }

        let data: ImagesResponse = self.get(&url)?.json()?;
        Ok(data.images)
    }

    fn download(&self, url: &str) -> Result<String, FigmaError> {
        // Export URLs are pre-signed S3 links; no token header
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FigmaError::Api {
                status: status.as_u16(),
                body: resp.text().unwrap_or_default(),
            });
        }
        Ok(resp.text()?)
    }
}

/// Extract `(file_key, node_id)` from a Figma file/design URL.
///
/// Accepts `https://www.figma.com/file/KEY/...?node-id=1-23` and the
/// newer `/design/` path; the `node-id` query parameter is required.
pub fn parse_figma_url(raw: &str) -> Result<(String, String), FigmaError> {
    let invalid = |msg: &str| FigmaError::InvalidUrl(raw.to_string(), msg.to_string());

    let url = Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;
    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|p| !p.is_empty()).collect())
        .unwrap_or_default();

    let file_key = match segments.as_slice() {
        ["file", key, ..] | ["design", key, ..] => (*key).to_string(),
        _ => return Err(invalid("no file key in path")),
    };

    let node_id = url
        .query_pairs()
        .find(|(k, _)| k == "node-id")
        .map(|(_, v)| v.into_owned())
        .ok_or_else(|| invalid("missing `node-id` query parameter"))?;

    Ok((file_key, node_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_url() {
        let (key, node) =
            parse_figma_url("https://www.figma.com/file/abc123/Icons?node-id=1-23").unwrap();
        assert_eq!(key, "abc123");
        assert_eq!(node, "1-23");
    }

    #[test]
    fn test_parse_design_url() {
        let (key, node) =
            parse_figma_url("https://www.figma.com/design/xyz/Lib?node-id=4%3A2").unwrap();
        assert_eq!(key, "xyz");
        assert_eq!(node, "4:2");
    }

    #[test]
    fn test_parse_url_missing_node_id() {
        let err = parse_figma_url("https://www.figma.com/file/abc/Icons").unwrap_err();
        assert!(matches!(err, FigmaError::InvalidUrl(..)));
    }

    #[test]
    fn test_parse_url_bad_path() {
        let err = parse_figma_url("https://www.figma.com/community/thing?node-id=1-2").unwrap_err();
        assert!(matches!(err, FigmaError::InvalidUrl(..)));
    }
}
