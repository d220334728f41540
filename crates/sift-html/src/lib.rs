//! Sift HTML Parser
//!
//! Parses rendered HTML into the sift-dom arena, built on html5ever.
//! The input is expected to be post-script-execution markup captured by an
//! external rendering collaborator; this crate never fetches anything.

mod parser;

pub use parser::HtmlParser;

use sift_dom::Document;

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Document {
    HtmlParser::new().parse(html)
}

/// Errors raised by the file-loading convenience entry point
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
