//! Figma design-source boundary.
//!
//! Models the node metadata the pipeline consumes and the traversal rule
//! deciding which nodes are icons and which are containers to recurse
//! into. The wire protocol lives in [`client`].

mod client;

pub use client::{FigmaClient, FigmaError, IconSource, parse_figma_url};

use serde::Deserialize;

/// A Figma document node, tagged by its `type` field.
///
/// The traversal rule is exhaustive over this enum: Component and Vector
/// leaves are icon candidates, Frame/Group/ComponentSet recurse into
/// children, anything else is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    #[serde(rename = "COMPONENT")]
    Component(LeafNode),
    #[serde(rename = "VECTOR")]
    Vector(LeafNode),
    #[serde(rename = "FRAME")]
    Frame(ContainerNode),
    #[serde(rename = "GROUP")]
    Group(ContainerNode),
    #[serde(rename = "COMPONENT_SET")]
    ComponentSet(ContainerNode),
    #[serde(other)]
    Other,
}

/// A drawable leaf with its bounding box.
#[derive(Debug, Clone, Deserialize)]
pub struct LeafNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "absoluteBoundingBox")]
    pub bounding_box: Option<BoundingBox>,
}

/// A container node whose children are traversed.
#[derive(Debug, Clone, Deserialize)]
pub struct ContainerNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
}

/// An exportable icon discovered by traversal.
#[derive(Debug, Clone)]
pub struct IconCandidate {
    pub id: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// Size and shape constraints for icon discovery.
#[derive(Debug, Clone, Copy)]
pub struct IconFilter {
    pub min_size: u32,
    pub max_size: u32,
}

impl Default for IconFilter {
    fn default() -> Self {
        Self {
            min_size: 12,
            max_size: 64,
        }
    }
}

/// Collect icon candidates under `root`.
///
/// Leaves must have a bounding box whose rounded dimensions fall within
/// the filter and deviate at most 20% from square; icons are rarely
/// rectangular and banners/illustrations frequently are.
pub fn collect_icons(root: &Node, filter: &IconFilter) -> Vec<IconCandidate> {
    let mut icons = Vec::new();
    visit(root, filter, &mut icons);
    icons
}

fn visit(node: &Node, filter: &IconFilter, out: &mut Vec<IconCandidate>) {
    match node {
        Node::Component(leaf) | Node::Vector(leaf) => {
            if let Some(candidate) = accept_leaf(leaf, filter) {
                out.push(candidate);
            }
        }
        Node::Frame(container) | Node::Group(container) | Node::ComponentSet(container) => {
            for child in &container.children {
                visit(child, filter, out);
            }
        }
        Node::Other => {}
    }
}

fn accept_leaf(leaf: &LeafNode, filter: &IconFilter) -> Option<IconCandidate> {
    let bbox = leaf.bounding_box?;
    let width = bbox.width.round() as u32;
    let height = bbox.height.round() as u32;

    let in_range = |px: u32| (filter.min_size..=filter.max_size).contains(&px);
    if !in_range(width) || !in_range(height) {
        return None;
    }

    let aspect_deviation = (bbox.width / bbox.height - 1.0).abs();
    if aspect_deviation > 0.2 {
        return None;
    }

    Some(IconCandidate {
        id: leaf.id.clone(),
        name: leaf.name.clone(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Node {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_tagged_deserialization() {
        let node = parse(r#"{"type": "VECTOR", "id": "1:1", "name": "arrow"}"#);
        assert!(matches!(node, Node::Vector(_)));

        let node = parse(r#"{"type": "CANVAS", "id": "0:0", "name": "page"}"#);
        assert!(matches!(node, Node::Other));
    }

    #[test]
    fn test_collects_leaves_in_containers() {
        let node = parse(
            r#"{
                "type": "FRAME", "id": "0:1", "name": "icons",
                "children": [
                    {"type": "COMPONENT", "id": "1:1", "name": "home",
                     "absoluteBoundingBox": {"width": 16, "height": 16}},
                    {"type": "GROUP", "id": "1:2", "name": "nested", "children": [
                        {"type": "VECTOR", "id": "1:3", "name": "star",
                         "absoluteBoundingBox": {"width": 20, "height": 20}}
                    ]},
                    {"type": "TEXT", "id": "1:4", "name": "label"}
                ]
            }"#,
        );

        let icons = collect_icons(&node, &IconFilter::default());
        let ids: Vec<_> = icons.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1:1", "1:3"]);
    }

    #[test]
    fn test_size_filter() {
        let node = parse(
            r#"{"type": "VECTOR", "id": "1:1", "name": "banner",
                "absoluteBoundingBox": {"width": 120, "height": 120}}"#,
        );
        assert!(collect_icons(&node, &IconFilter::default()).is_empty());
    }

    #[test]
    fn test_aspect_ratio_filter() {
        let node = parse(
            r#"{"type": "VECTOR", "id": "1:1", "name": "wide",
                "absoluteBoundingBox": {"width": 20, "height": 14}}"#,
        );
        assert!(collect_icons(&node, &IconFilter::default()).is_empty());
    }

    #[test]
    fn test_leaf_without_bbox_is_skipped() {
        let node = parse(r#"{"type": "COMPONENT", "id": "1:1", "name": "broken"}"#);
        assert!(collect_icons(&node, &IconFilter::default()).is_empty());
    }

    #[test]
    fn test_component_set_is_traversed_not_exported() {
        let node = parse(
            r#"{"type": "COMPONENT_SET", "id": "2:0", "name": "arrows", "children": [
                {"type": "COMPONENT", "id": "2:1", "name": "arrow-up",
                 "absoluteBoundingBox": {"width": 12, "height": 12}}
            ]}"#,
        );
        let icons = collect_icons(&node, &IconFilter::default());
        assert_eq!(icons.len(), 1);
        assert_eq!(icons[0].id, "2:1");
    }
}
