//! Visibility Filter
//!
//! Decides whether a single element should exist in the output at all.
//! Evaluated before anything else touches the node; a hidden element prunes
//! its entire subtree.

use sift_dom::{DomTree, NodeId};

/// Class tokens that mark an element as hidden
///
/// Checked as substrings of the raw class attribute, so `hidden-until-load`
/// also hides - matching the upstream rendering conventions these utilities
/// come from.
pub const HIDDEN_CLASSES: &[&str] = &[
    "hidden",
    "hide",
    "invisible",
    "sr-only",
    "visually-hidden",
    "d-none",
];

/// Whether an element should be kept
///
/// Hidden on any inline-style hiding declaration, zero opacity/width/height,
/// a hidden class, or `aria-hidden="true"`. Otherwise visible only if it has
/// non-whitespace subtree text, at least one element child, or is a media
/// tag - a childless, textless, non-media element is decorative.
pub fn is_visible(tree: &DomTree, id: NodeId) -> bool {
    let Some(node) = tree.get(id) else {
        return false;
    };
    let Some(elem) = node.as_element() else {
        return false;
    };

    let style = elem.attr("style").unwrap_or("");
    if style.contains("display:none") || style.contains("display: none") {
        return false;
    }
    if style.contains("visibility:hidden") || style.contains("visibility: hidden") {
        return false;
    }
    if style_number(style, "opacity") == Some(0.0) {
        return false;
    }
    if style_number(style, "width") == Some(0.0) || style_number(style, "height") == Some(0.0) {
        return false;
    }

    let class_attr = elem.attr("class").unwrap_or("");
    if HIDDEN_CLASSES.iter().any(|c| class_attr.contains(c)) {
        return false;
    }

    if elem.attr("aria-hidden") == Some("true") {
        return false;
    }

    if elem.name == "img" || elem.name == "video" {
        return true;
    }
    if tree.element_children(id).next().is_some() {
        return true;
    }
    !tree.text_content(id).trim().is_empty()
}

/// Extract the first numeric value declared for `prop` anywhere in an inline
/// style string (`opacity : 0.5`, `width:0px`). Returns None if the property
/// never appears with a numeric value.
fn style_number(style: &str, prop: &str) -> Option<f32> {
    let mut rest = style;
    while let Some(pos) = rest.find(prop) {
        let after = rest[pos + prop.len()..].trim_start();
        if let Some(value) = after.strip_prefix(':') {
            let value = value.trim_start();
            let end = value
                .find(|c: char| !c.is_ascii_digit() && c != '.')
                .unwrap_or(value.len());
            if end > 0 {
                if let Ok(parsed) = value[..end].parse::<f32>() {
                    return Some(parsed);
                }
            }
        }
        rest = &rest[pos + prop.len()..];
    }
    None
}
