//! Uniqueness Scanner
//!
//! One pre-pass over the whole stripped tree tallying surviving class
//! tokens. A token that occurs on exactly one element is treated as an
//! identity-like marker (similar to an id) by the selector path builder.
//!
//! The scan runs over all remaining elements, visible or not, and must
//! complete before reduction begins: path-reset decisions depend on these
//! global counts. The resulting set is read-only thereafter.

use crate::classes::filter_classes;
use sift_dom::{DomTree, NodeId};
use std::collections::{HashMap, HashSet};

/// Collect the class tokens occurring on exactly one element below `from`
pub fn unique_classes(tree: &DomTree, from: NodeId) -> HashSet<String> {
    let mut counts: HashMap<String, u32> = HashMap::new();

    let mut stack = vec![from];
    while let Some(id) = stack.pop() {
        for (child_id, node) in tree.children(id) {
            if let Some(elem) = node.as_element() {
                for token in filter_classes(elem.attr("class").unwrap_or("")) {
                    *counts.entry(token).or_insert(0) += 1;
                }
            }
            stack.push(child_id);
        }
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count == 1)
        .map(|(token, _)| token)
        .collect()
}
