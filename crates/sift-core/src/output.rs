//! Output model
//!
//! The reduction produces a forest of output nodes. A content node carries
//! exactly one payload (text, image or video) plus its selector; a container
//! node groups children under a synthetic selector key and serializes as a
//! single-key JSON object.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Payload of a content node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPayload {
    Text(String),
    Image(String),
    Video(String),
}

impl ContentPayload {
    /// JSON field name for this payload
    pub fn key(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Image(_) => "image",
            Self::Video(_) => "video",
        }
    }

    /// Payload value
    pub fn value(&self) -> &str {
        match self {
            Self::Text(v) | Self::Image(v) | Self::Video(v) => v,
        }
    }

    /// Category of this payload
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Text(_) => ContentKind::Text,
            Self::Image(_) => ContentKind::Image,
            Self::Video(_) => ContentKind::Video,
        }
    }
}

/// Content category, used for downstream post-filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Text,
    Image,
    Video,
}

impl ContentKind {
    /// Parse a category name as used on the CLI ("text", "image", "video")
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            _ => None,
        }
    }
}

/// Leaf output node carrying literal text or a media reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentNode {
    /// Source tag name
    pub tag: String,
    /// Space-joined selector path
    pub selector: String,
    /// The single payload
    pub payload: ContentPayload,
}

/// One node of the output forest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputNode {
    /// Leaf carrying content
    Content(ContentNode),
    /// Structural grouping, keyed by a synthetic selector
    Container {
        key: String,
        children: Vec<OutputNode>,
    },
}

impl OutputNode {
    /// Build a content node
    pub fn content(tag: &str, selector: String, payload: ContentPayload) -> Self {
        Self::Content(ContentNode {
            tag: tag.to_string(),
            selector,
            payload,
        })
    }

    /// Build a container node
    pub fn container(key: String, children: Vec<OutputNode>) -> Self {
        Self::Container { key, children }
    }

    /// Check if this is a content node
    pub fn is_content(&self) -> bool {
        matches!(self, Self::Content(_))
    }

    /// Validity predicate: content with a non-empty payload, or a container
    /// with a non-empty child list. Invalid nodes are silently discarded by
    /// their parent, never an error.
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Content(c) => !c.payload.value().is_empty(),
            Self::Container { children, .. } => !children.is_empty(),
        }
    }

    /// Number of content nodes in this subtree
    pub fn count(&self) -> usize {
        match self {
            Self::Content(_) => 1,
            Self::Container { children, .. } => children.iter().map(OutputNode::count).sum(),
        }
    }
}

/// Number of parallel content branches among already-produced children
///
/// A content child counts as one branch; so does a container with a
/// non-empty wrapped list. Only affects collapse-vs-wrap presentation,
/// never which children are retained.
pub fn content_branches(children: &[OutputNode]) -> usize {
    children
        .iter()
        .filter(|child| match child {
            OutputNode::Content(_) => true,
            OutputNode::Container { children, .. } => !children.is_empty(),
        })
        .count()
}

/// Total content-node count of a forest
pub fn count_forest(forest: &[OutputNode]) -> usize {
    forest.iter().map(OutputNode::count).sum()
}

/// Collect the content nodes of one category, in document order,
/// descending through containers
pub fn filter_forest<'a>(forest: &'a [OutputNode], kind: ContentKind) -> Vec<&'a ContentNode> {
    let mut out = Vec::new();
    collect_kind(forest, kind, &mut out);
    out
}

fn collect_kind<'a>(nodes: &'a [OutputNode], kind: ContentKind, out: &mut Vec<&'a ContentNode>) {
    for node in nodes {
        match node {
            OutputNode::Content(c) => {
                if c.payload.kind() == kind {
                    out.push(c);
                }
            }
            OutputNode::Container { children, .. } => collect_kind(children, kind, out),
        }
    }
}

impl Serialize for ContentNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("type", &self.tag)?;
        map.serialize_entry("selector", &self.selector)?;
        map.serialize_entry(self.payload.key(), self.payload.value())?;
        map.end()
    }
}

impl Serialize for OutputNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Content(c) => c.serialize(serializer),
            Self::Container { key, children } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(key, children)?;
                map.end()
            }
        }
    }
}
