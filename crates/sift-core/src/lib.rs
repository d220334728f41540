//! Sift Core - HTML reduction engine
//!
//! Reduces a rendered DOM snapshot into a compact, semantically meaningful
//! JSON forest: presentation markup and styling classes are discarded,
//! content (text/image/video) is separated from structure, and every
//! retained node gets a stable ancestry-based selector.
//!
//! The pipeline is two strictly ordered passes over the stripped tree: the
//! uniqueness scan, then the recursive reduction. Everything is synchronous
//! and allocation goes only into the fresh output tree, so independent
//! documents can be reduced concurrently.
//!
//! ```rust,ignore
//! let mut doc = sift_html::parse(html);
//! let page = sift_core::reduce_page(&mut doc);
//! println!("{}", serde_json::to_string(&page.data)?);
//! ```

mod classes;
mod media;
mod output;
mod reduce;
mod selector;
mod strip;
mod unique;
mod visibility;

pub use classes::{denied_by, filter_classes};
pub use media::{truncate_media_src, TRUNCATION_MARKER};
pub use output::{
    content_branches, count_forest, filter_forest, ContentKind, ContentNode, ContentPayload,
    OutputNode,
};
pub use reduce::{reduce_document, reduce_page, ParsedPage, MAX_DEPTH};
pub use selector::{build_segment, container_key, extend_path, render_path};
pub use strip::{strip_document, strip_tree, AD_CLASSES, STRIP_TAGS};
pub use unique::unique_classes;
pub use visibility::{is_visible, HIDDEN_CLASSES};
