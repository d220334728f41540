//! HTML5 Parser implementation
//!
//! Uses html5ever's built-in RcDom and converts to the sift-dom arena.
//! This is simpler and more reliable than implementing TreeSink directly.

use crate::ParseError;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use sift_dom::{Document, DomTree, ElementData, NodeId};

/// HTML5 parser
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse an HTML string into a Document
    pub fn parse(&self, html: &str) -> Document {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a document URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Document {
        tracing::debug!("Parsing HTML document: {}", url);

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .expect("HTML parsing should not fail");

        let mut document = Document::empty(url);
        let root = document.tree().root();
        self.convert_node(&dom.document, document.tree_mut(), root);

        // Locate html, head, body elements
        document.finalize();

        tracing::debug!("Parsed {} nodes", document.tree().len());
        document
    }

    /// Read a file and parse it, using the path as the document URL
    pub fn parse_file(&self, path: &str) -> Result<Document, ParseError> {
        let html = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(self.parse_with_url(&html, path))
    }

    /// Convert an RcDom node into the arena
    fn convert_node(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) {
        match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, parent);
                }
            }
            RcNodeData::Doctype { .. } => {
                // Irrelevant to reduction
            }
            RcNodeData::Text { contents } => {
                let text = contents.borrow().to_string();
                // Whitespace-only runs carry no content
                if !text.trim().is_empty() {
                    let id = tree.create_text(&text);
                    tree.append_child(parent, id);
                }
            }
            RcNodeData::Comment { contents } => {
                let id = tree.create_comment(&contents.to_string());
                tree.append_child(parent, id);
            }
            RcNodeData::Element { name, attrs, .. } => {
                let mut elem = ElementData::new(&name.local);
                for attr in attrs.borrow().iter() {
                    elem.set_attr(&attr.name.local, &attr.value);
                }

                let id = tree.create_element(elem);
                tree.append_child(parent, id);

                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, id);
                }
            }
            RcNodeData::ProcessingInstruction { .. } => {
                // Ignore processing instructions
            }
        }
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
        let doc = HtmlParser::new().parse(html);

        assert!(doc.body().is_valid());
        assert_eq!(doc.title(), "Test");
    }

    #[test]
    fn test_parse_fragment_gets_wrapped() {
        // html5ever wraps fragments in html/head/body
        let doc = HtmlParser::new().parse("<div><span>Text</span></div>");
        assert!(doc.body().is_valid());

        let tree = doc.tree();
        let div = tree.element_children(doc.body()).next().unwrap();
        assert_eq!(tree.get(div).unwrap().as_element().unwrap().name, "div");
    }
}
