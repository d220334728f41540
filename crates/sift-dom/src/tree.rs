//! DOM Tree (arena-based allocation)

use crate::{ElementData, Node, NodeData, NodeId, TextData};

/// Arena-based DOM tree
///
/// Index 0 is always the document node. Detached nodes stay in the arena
/// but are unreachable from the root.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// Root (document) node ID
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Number of nodes in the arena (including detached ones)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create an unlinked element node
    pub fn create_element(&mut self, data: ElementData) -> NodeId {
        self.push(Node::new(NodeData::Element(data)))
    }

    /// Create an unlinked text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::new(NodeData::Text(TextData {
            content: content.to_string(),
        })))
    }

    /// Create an unlinked comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::new(NodeData::Comment(content.to_string())))
    }

    /// Append `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || self.get(parent).is_none() || self.get(child).is_none() {
            return;
        }
        let prev_last = self.get(parent).map(|p| p.last_child).unwrap_or(NodeId::NONE);

        if let Some(c) = self.get_mut(child) {
            c.parent = parent;
            c.prev_sibling = prev_last;
            c.next_sibling = NodeId::NONE;
        }
        if prev_last.is_valid() {
            if let Some(l) = self.get_mut(prev_last) {
                l.next_sibling = child;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.first_child = child;
        }
        if let Some(p) = self.get_mut(parent) {
            p.last_child = child;
        }
    }

    /// Unlink a node (and thereby its subtree) from its parent
    ///
    /// The nodes stay in the arena; they just become unreachable from the
    /// root. No-op for the root or an already-detached node.
    pub fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = match self.get(id) {
            Some(n) => (n.parent, n.prev_sibling, n.next_sibling),
            None => return,
        };
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = next;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.first_child = next;
        }
        if next.is_valid() {
            if let Some(n) = self.get_mut(next) {
                n.prev_sibling = prev;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.last_child = prev;
        }

        if let Some(n) = self.get_mut(id) {
            n.parent = NodeId::NONE;
            n.prev_sibling = NodeId::NONE;
            n.next_sibling = NodeId::NONE;
        }
    }

    /// Iterate the direct children of a node, in document order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            cur: self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE),
        }
    }

    /// Iterate the direct element children of a node
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .filter(|(_, n)| n.is_element())
            .map(|(cid, _)| cid)
    }

    /// Concatenated content of the direct text children only
    pub fn direct_text(&self, id: NodeId) -> String {
        let mut out = String::new();
        for (_, node) in self.children(id) {
            if let Some(text) = node.as_text() {
                out.push_str(text);
            }
        }
        out
    }

    /// Concatenated text of the whole subtree, in document order
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut stack: Vec<NodeId> = self.children(id).map(|(cid, _)| cid).collect();
        stack.reverse();
        while let Some(cur) = stack.pop() {
            if let Some(node) = self.get(cur) {
                if let Some(text) = node.as_text() {
                    out.push_str(text);
                }
                let first_kid = stack.len();
                stack.extend(self.children(cur).map(|(cid, _)| cid));
                stack[first_kid..].reverse();
            }
        }
        out
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the direct children of one node
pub struct Children<'a> {
    tree: &'a DomTree,
    cur: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.get(self.cur)?;
        let id = self.cur;
        self.cur = node.next_sibling;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(tree: &mut DomTree, name: &str) -> NodeId {
        tree.create_element(ElementData::new(name))
    }

    #[test]
    fn test_append_and_iterate() {
        let mut tree = DomTree::new();
        let root = tree.root();
        let a = element(&mut tree, "a");
        let b = element(&mut tree, "b");
        let c = element(&mut tree, "c");
        tree.append_child(root, a);
        tree.append_child(root, b);
        tree.append_child(root, c);

        let names: Vec<_> = tree
            .children(root)
            .filter_map(|(_, n)| n.as_element())
            .map(|e| e.name.clone())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_detach_middle_child() {
        let mut tree = DomTree::new();
        let root = tree.root();
        let a = element(&mut tree, "a");
        let b = element(&mut tree, "b");
        let c = element(&mut tree, "c");
        tree.append_child(root, a);
        tree.append_child(root, b);
        tree.append_child(root, c);

        tree.detach(b);

        let ids: Vec<_> = tree.children(root).map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, c]);
        assert!(!tree.get(b).unwrap().parent.is_valid());
    }

    #[test]
    fn test_text_helpers() {
        let mut tree = DomTree::new();
        let root = tree.root();
        let div = element(&mut tree, "div");
        tree.append_child(root, div);
        let t1 = tree.create_text("Hello ");
        tree.append_child(div, t1);
        let span = element(&mut tree, "span");
        tree.append_child(div, span);
        let t2 = tree.create_text("world");
        tree.append_child(span, t2);

        assert_eq!(tree.direct_text(div), "Hello ");
        assert_eq!(tree.text_content(div), "Hello world");
    }
}
