//! Node Classifier & Recursive Reducer
//!
//! The depth-first transform producing the output forest. Each element is
//! classified as content (text/image/video) or structure; single-purpose
//! wrapper nesting collapses away, while any node grouping two or more
//! parallel content branches stays a container so sibling relationships
//! are never lost.
//!
//! The reducer never mutates its input and allocates a fresh output tree,
//! so independent documents can be processed concurrently; the per-document
//! unique-class set is built fresh per call and passed down explicitly.

use crate::classes::filter_classes;
use crate::media::truncate_media_src;
use crate::output::{content_branches, ContentPayload, OutputNode};
use crate::selector::{container_key, extend_path, render_path};
use crate::strip::strip_document;
use crate::unique::unique_classes;
use crate::visibility::is_visible;
use serde::Serialize;
use sift_dom::{Document, DomTree, NodeId};
use std::collections::HashSet;

/// Maximum element nesting the reducer will follow
///
/// Documents are acyclic by construction, but depth is unbounded; subtrees
/// past the limit are pruned instead of risking stack exhaustion.
pub const MAX_DEPTH: usize = 128;

/// Whole-page result: document title and URL plus the reduced forest
#[derive(Debug, Serialize)]
pub struct ParsedPage {
    pub title: String,
    pub url: String,
    pub data: Vec<OutputNode>,
}

/// Run the full pipeline on a freshly parsed document
///
/// Reads the title first (the strip pass drops `<head>`), then strips
/// non-content subtrees and reduces the rest.
pub fn reduce_page(doc: &mut Document) -> ParsedPage {
    let title = doc.title();
    strip_document(doc);
    let data = reduce_document(doc);
    ParsedPage {
        title,
        url: doc.url().to_string(),
        data,
    }
}

/// Reduce an already-stripped document to the output forest
///
/// The uniqueness scan over the whole remaining tree runs first; reduction
/// then starts at the `<body>` children (falling back to `<html>` for
/// headless fragments).
pub fn reduce_document(doc: &Document) -> Vec<OutputNode> {
    let tree = doc.tree();
    let unique = unique_classes(tree, tree.root());
    tracing::debug!("unique-class set holds {} tokens", unique.len());

    let start = if doc.body().is_valid() {
        doc.body()
    } else {
        doc.document_element()
    };
    let mut forest = Vec::new();
    if !start.is_valid() {
        return forest;
    }
    for child_id in tree.element_children(start) {
        if let Some(node) = reduce_element(tree, child_id, &[], &unique, 0) {
            if node.is_valid() {
                forest.push(node);
            }
        }
    }
    tracing::debug!("reduced to {} top-level nodes", forest.len());
    forest
}

/// Reduce one element, given its ancestor selector path
fn reduce_element(
    tree: &DomTree,
    id: NodeId,
    parent_path: &[String],
    unique: &HashSet<String>,
    depth: usize,
) -> Option<OutputNode> {
    if depth > MAX_DEPTH {
        tracing::warn!("element nesting exceeds {MAX_DEPTH}, truncating subtree");
        return None;
    }
    let elem = tree.get(id)?.as_element()?;

    if !is_visible(tree, id) {
        return None;
    }

    let elem_id = elem.id.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let classes = filter_classes(elem.attr("class").unwrap_or(""));
    let path = extend_path(parent_path, &elem.name, elem_id, &classes, unique);
    let tag = elem.name.as_str();

    // Media leaves short-circuit everything else
    if tag == "img" {
        let src = non_empty(elem.attr("src"))
            .or_else(|| non_empty(elem.attr("data-src")))
            .unwrap_or("");
        return Some(OutputNode::content(
            tag,
            render_path(&path),
            ContentPayload::Image(truncate_media_src(src)),
        ));
    }
    if tag == "video" {
        let src = non_empty(elem.attr("src"))
            .map(str::to_string)
            .or_else(|| first_source_src(tree, id))
            .unwrap_or_default();
        return Some(OutputNode::content(
            tag,
            render_path(&path),
            ContentPayload::Video(truncate_media_src(&src)),
        ));
    }

    // Direct text wins over any element children
    let direct = tree.direct_text(id);
    let direct = direct.trim();
    if !direct.is_empty() {
        return Some(OutputNode::content(
            tag,
            render_path(&path),
            ContentPayload::Text(direct.to_string()),
        ));
    }

    // Leaf without element children: take the full trimmed text
    if tree.element_children(id).next().is_none() {
        let full = tree.text_content(id);
        let full = full.trim();
        if !full.is_empty() {
            return Some(OutputNode::content(
                tag,
                render_path(&path),
                ContentPayload::Text(full.to_string()),
            ));
        }
        return None;
    }

    // Structural node: recurse, keep valid children in document order
    let mut children = Vec::new();
    for child_id in tree.element_children(id) {
        if let Some(child) = reduce_element(tree, child_id, &path, unique, depth + 1) {
            if child.is_valid() {
                children.push(child);
            }
        }
    }
    if children.is_empty() {
        return None;
    }

    let branches = content_branches(&children);
    if children.len() == 1 && branches <= 1 {
        let only = children.remove(0);
        if only.is_content() {
            // Collapse this wrapper entirely; the child's selector already
            // carries the ancestry
            return Some(only);
        }
        // Single container child: re-wrap under this node's own key
        let key = container_key(tag, elem_id, &classes, unique);
        return Some(OutputNode::container(key, vec![only]));
    }

    // Two or more survivors (or parallel branches): sibling order matters,
    // always wrap
    let key = container_key(tag, elem_id, &classes, unique);
    Some(OutputNode::container(key, children))
}

fn non_empty(attr: Option<&str>) -> Option<&str> {
    attr.filter(|s| !s.is_empty())
}

/// `src` of the first `<source>` element child, for `<video>` fallback
fn first_source_src(tree: &DomTree, id: NodeId) -> Option<String> {
    for child_id in tree.element_children(id) {
        let elem = tree.get(child_id)?.as_element()?;
        if elem.name == "source" {
            return non_empty(elem.attr("src")).map(str::to_string);
        }
    }
    None
}
