//! Sift DOM - Document snapshot
//!
//! Arena-based DOM tree used as the read-only input of the reduction
//! engine. Nodes are addressed by index, siblings are linked lists.

mod document;
mod node;
mod tree;

pub use document::Document;
pub use node::{Attribute, ElementData, Node, NodeData, TextData};
pub use tree::{Children, DomTree};

/// Node identifier (index into the arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Whether this ID refers to a node at all
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }
}
