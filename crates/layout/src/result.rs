//! The geometry produced by a layout pass.

use crate::tree::NodeId;
use flexo_types::Rect;

/// Resolved geometry for every node of a [`crate::BoxTree`].
///
/// Positions are relative to the parent's content box origin; the root sits
/// at the origin. Indexing mirrors the tree's arena, so a `NodeId` obtained
/// from the tree addresses the same node here.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    rects: Vec<Rect>,
}

impl Layout {
    pub(crate) fn new(rects: Vec<Rect>) -> Self {
        Self { rects }
    }

    /// The border-box rectangle of `node`, relative to its parent's content
    /// box.
    pub fn get(&self, node: NodeId) -> Rect {
        self.rects[node.index()]
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Iterate rectangles in arena order, which matches the order nodes
    /// were created in the tree.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Rect)> + '_ {
        self.rects
            .iter()
            .enumerate()
            .map(|(i, &rect)| (NodeId(i), rect))
    }
}
