//! Flexbox layout over a styled box tree.
//!
//! Build a [`BoxTree`] of [`flexo_style::Style`] nodes, hand it to a
//! [`LayoutEngine`] together with outer [`Constraint`]s, and get back a
//! [`Layout`] holding one rectangle per node. Leaf content is sized through
//! the [`Measure`] trait.

use thiserror::Error;

/// Errors raised while building or laying out a box tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Node {} does not belong to this tree", .0.index())]
    NodeNotFound(tree::NodeId),

    #[error("Attaching node {} under {} would create a cycle", .child.index(), .parent.index())]
    CyclicTree {
        parent: tree::NodeId,
        child: tree::NodeId,
    },

    #[error("Node {} is already attached to a parent", .0.index())]
    AlreadyAttached(tree::NodeId),

    #[error("Nesting depth exceeded the configured limit of {limit}")]
    ExcessiveNesting { limit: usize },
}

pub mod config;
pub mod engine;
pub(crate) mod flex;
pub mod measure;
pub mod result;
pub mod tree;

pub use config::LayoutConfig;
pub use engine::LayoutEngine;
pub use measure::{Measure, Measurement, ZeroMeasure};
pub use result::Layout;
pub use tree::{BoxTree, NodeId};

pub use flexo_types::{Constraint, Constraints, Point, Rect, Size};

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod engine_test;
