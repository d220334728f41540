//! Strip pass
//!
//! Removes non-content subtrees from the snapshot outright, before any
//! traversal: script/style machinery, ad slots, and elements hidden by
//! inline style or utility class. Their descendants never reach the
//! visibility filter at all.

use crate::visibility::HIDDEN_CLASSES;
use sift_dom::{Document, DomTree, ElementData, NodeId};

/// Tag categories that never carry page content
pub const STRIP_TAGS: &[&str] = &["script", "style", "noscript", "meta", "link", "head"];

/// Class tokens marking advertisement slots
pub const AD_CLASSES: &[&str] = &["ad", "advertisement", "ads"];

const HIDDEN_STYLES: &[&str] = &[
    "display:none",
    "display: none",
    "visibility:hidden",
    "visibility: hidden",
    "opacity:0",
    "opacity: 0",
];

/// Remove every non-content element (with its subtree) from the document
pub fn strip_document(doc: &mut Document) {
    let root = doc.tree().root();
    let removed = strip_tree(doc.tree_mut(), root);
    tracing::debug!("strip pass removed {} subtrees", removed);
}

/// Strip below an arbitrary node; returns the number of detached subtrees
pub fn strip_tree(tree: &mut DomTree, from: NodeId) -> usize {
    let mut doomed = Vec::new();
    let mut stack = vec![from];
    while let Some(id) = stack.pop() {
        for (child_id, node) in tree.children(id) {
            if let Some(elem) = node.as_element() {
                if should_strip(elem) {
                    // Subtree goes with it, no descent
                    doomed.push(child_id);
                    continue;
                }
            }
            stack.push(child_id);
        }
    }
    for id in &doomed {
        tree.detach(*id);
    }
    doomed.len()
}

fn should_strip(elem: &ElementData) -> bool {
    if STRIP_TAGS.contains(&elem.name.as_str()) {
        return true;
    }
    if elem
        .classes
        .iter()
        .any(|c| AD_CLASSES.contains(&c.as_str()) || HIDDEN_CLASSES.contains(&c.as_str()))
    {
        return true;
    }
    let style = elem.attr("style").unwrap_or("");
    HIDDEN_STYLES.iter().any(|s| style.contains(s))
}
