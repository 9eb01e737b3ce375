//! Content measurement callbacks.
//!
//! Leaf boxes without an explicit size get their intrinsic size from a
//! [`Measure`] collaborator supplied by the host (a text shaper, an image
//! cache, a widget). Layout treats the callback as a pure function of the
//! node and the constraints; it may be invoked several times per pass.

use crate::tree::NodeId;
use flexo_types::{Constraint, Size};

/// The outcome of measuring a leaf's content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurement {
    /// Content size, excluding the node's own padding and border.
    pub size: Size,
    /// Distance from the top of the content to the first baseline, for
    /// baseline alignment. `None` when the content has no baseline.
    pub baseline: Option<f32>,
}

impl Measurement {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            baseline: None,
        }
    }

    pub fn with_baseline(size: Size, baseline: f32) -> Self {
        Self {
            size,
            baseline: Some(baseline),
        }
    }
}

/// Measures the intrinsic content of leaf nodes.
pub trait Measure: Send + Sync {
    /// Report the content size of `node` under the given axis constraints.
    ///
    /// Implementations must not mutate observable state; layout may call
    /// this any number of times with different constraints.
    fn measure(&self, node: NodeId, width: Constraint, height: Constraint) -> Measurement;
}

/// A measurer for trees whose leaves have no content of their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroMeasure;

impl Measure for ZeroMeasure {
    fn measure(&self, _node: NodeId, _width: Constraint, _height: Constraint) -> Measurement {
        Measurement::new(Size::zero())
    }
}
