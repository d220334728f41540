//! Document - High-level document API

use crate::{DomTree, NodeId};

/// HTML Document
///
/// Owns the DOM tree plus cached references to the structural elements.
pub struct Document {
    tree: DomTree,
    url: String,
    html_element: NodeId,
    head_element: NodeId,
    body_element: NodeId,
}

impl Document {
    /// Create an empty document (just the root node)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Locate and cache the html/head/body elements after tree construction
    pub fn finalize(&mut self) {
        self.html_element = self.find_child_element(self.tree.root(), "html");
        if self.html_element.is_valid() {
            self.head_element = self.find_child_element(self.html_element, "head");
            self.body_element = self.find_child_element(self.html_element, "body");
        }
        tracing::trace!(
            "document finalized: {} nodes, body={:?}",
            self.tree.len(),
            self.body_element
        );
    }

    fn find_child_element(&self, parent: NodeId, name: &str) -> NodeId {
        for (id, node) in self.tree.children(parent) {
            if let Some(elem) = node.as_element() {
                if elem.name == name {
                    return id;
                }
            }
        }
        NodeId::NONE
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get document title (trimmed text of <title> in <head>), empty if absent
    pub fn title(&self) -> String {
        if !self.head_element.is_valid() {
            return String::new();
        }
        for (id, node) in self.tree.children(self.head_element) {
            if let Some(elem) = node.as_element() {
                if elem.name == "title" {
                    return self.tree.text_content(id).trim().to_string();
                }
            }
        }
        String::new()
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty("about:blank")
    }
}
