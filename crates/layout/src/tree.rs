//! The styled box tree that layout passes consume.
//!
//! Nodes live in a flat arena and are addressed by [`NodeId`]. Ids are cheap
//! copies, stay valid for the lifetime of the tree, and double as indices
//! into the [`crate::Layout`] produced for the same tree.

use crate::LayoutError;
use flexo_style::Style;

/// Handle to a node inside a [`BoxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The arena slot behind this handle, usable to index parallel storage.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Node {
    style: Style,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An arena-backed tree of styled boxes.
///
/// A tree always has a root. Child order is significant: it is the order
/// items occupy a flex line before any direction reversal.
#[derive(Debug, Clone)]
pub struct BoxTree {
    nodes: Vec<Node>,
}

impl BoxTree {
    pub fn new(root_style: Style) -> Self {
        Self {
            nodes: vec![Node {
                style: root_style,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the arena, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.0 < self.nodes.len()
    }

    /// Create a node without attaching it anywhere.
    pub fn new_node(&mut self, style: Style) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            style,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Create a node and append it as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, style: Style) -> Result<NodeId, LayoutError> {
        if !self.contains(parent) {
            return Err(LayoutError::NodeNotFound(parent));
        }
        let child = self.new_node(style);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(child)
    }

    /// Attach an existing detached node as the last child of `parent`.
    ///
    /// Rejects attachments that would make a node its own ancestor.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), LayoutError> {
        if !self.contains(parent) {
            return Err(LayoutError::NodeNotFound(parent));
        }
        if !self.contains(child) {
            return Err(LayoutError::NodeNotFound(child));
        }
        if self.nodes[child.0].parent.is_some() {
            return Err(LayoutError::AlreadyAttached(child));
        }
        if child == parent || self.is_ancestor(child, parent) {
            return Err(LayoutError::CyclicTree { parent, child });
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    /// Detach a node from its parent, keeping its own subtree intact.
    ///
    /// The root cannot be detached; detaching an already detached node is a
    /// no-op.
    pub fn detach(&mut self, node: NodeId) -> Result<(), LayoutError> {
        if !self.contains(node) {
            return Err(LayoutError::NodeNotFound(node));
        }
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != node);
        }
        Ok(())
    }

    pub fn style(&self, node: NodeId) -> &Style {
        &self.nodes[node.0].style
    }

    pub fn set_style(&mut self, node: NodeId, style: Style) -> Result<(), LayoutError> {
        if !self.contains(node) {
            return Err(LayoutError::NodeNotFound(node));
        }
        self.nodes[node.0].style = style;
        Ok(())
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.nodes[node.0].children.is_empty()
    }

    /// Walk the parent chain of `node` looking for `maybe_ancestor`.
    fn is_ancestor(&self, maybe_ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.nodes[node.0].parent;
        while let Some(p) = current {
            if p == maybe_ancestor {
                return true;
            }
            current = self.nodes[p.0].parent;
        }
        false
    }
}
