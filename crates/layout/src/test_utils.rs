//! Shared helpers for the layout tests.

use crate::measure::{Measure, Measurement};
use crate::tree::NodeId;
use flexo_style::{Dimension, Style, StyleData};
use flexo_types::{Constraint, Size};

pub fn style(data: StyleData) -> Style {
    Style::new(data).unwrap()
}

pub fn sized(width: f32, height: f32) -> Style {
    style(StyleData {
        width: Dimension::Px(width),
        height: Dimension::Px(height),
        ..Default::default()
    })
}

/// A measurer that reports the same content size for every leaf.
pub struct FixedMeasure {
    size: Size,
    baseline: Option<f32>,
}

impl FixedMeasure {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            baseline: None,
        }
    }
}

impl Measure for FixedMeasure {
    fn measure(&self, _node: NodeId, _width: Constraint, _height: Constraint) -> Measurement {
        Measurement {
            size: self.size,
            baseline: self.baseline,
        }
    }
}

/// A measurer with per-node sizes and baselines.
#[derive(Default)]
pub struct TableMeasure {
    entries: std::collections::HashMap<NodeId, Measurement>,
}

impl TableMeasure {
    pub fn set(&mut self, node: NodeId, measurement: Measurement) {
        self.entries.insert(node, measurement);
    }
}

impl Measure for TableMeasure {
    fn measure(&self, node: NodeId, _width: Constraint, _height: Constraint) -> Measurement {
        self.entries.get(&node).copied().unwrap_or_default()
    }
}
