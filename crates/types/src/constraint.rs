//! Space-availability information passed from a parent box to a child.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// The available space along one axis, as handed down by an ancestor.
///
/// A parent that has resolved its own content size passes `Definite`; a
/// parent that only knows an upper bound (max-content measurement) passes
/// `Bounded`; a parent measuring intrinsic size passes `Unbounded`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Constraint {
    /// The axis has a known, definite extent.
    Definite(f32),
    /// Only an upper bound is known for the axis.
    Bounded(f32),
    /// No limit is known; content decides.
    Unbounded,
}

impl Constraint {
    /// The definite extent, if the axis has one.
    pub fn definite(self) -> Option<f32> {
        match self {
            Constraint::Definite(v) => Some(v),
            _ => None,
        }
    }

    /// The largest extent content may occupy, if any limit is known.
    pub fn available(self) -> Option<f32> {
        match self {
            Constraint::Definite(v) | Constraint::Bounded(v) => Some(v),
            Constraint::Unbounded => None,
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, Constraint::Unbounded)
    }

    /// Shrink a definite or bounded constraint by `amount`, never below zero.
    pub fn deflate(self, amount: f32) -> Self {
        match self {
            Constraint::Definite(v) => Constraint::Definite((v - amount).max(0.0)),
            Constraint::Bounded(v) => Constraint::Bounded((v - amount).max(0.0)),
            Constraint::Unbounded => Constraint::Unbounded,
        }
    }
}

impl Default for Constraint {
    fn default() -> Self {
        Constraint::Unbounded
    }
}

/// Constraints for both axes of a box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Constraints {
    pub width: Constraint,
    pub height: Constraint,
}

impl Constraints {
    pub fn new(width: Constraint, height: Constraint) -> Self {
        Self { width, height }
    }

    /// Both axes definite, pinned to `size`.
    pub fn tight(size: Size) -> Self {
        Self {
            width: Constraint::Definite(size.width),
            height: Constraint::Definite(size.height),
        }
    }

    /// Both axes bounded by `size` without being forced to fill it.
    pub fn loose(size: Size) -> Self {
        Self {
            width: Constraint::Bounded(size.width),
            height: Constraint::Bounded(size.height),
        }
    }

    pub fn unbounded() -> Self {
        Self {
            width: Constraint::Unbounded,
            height: Constraint::Unbounded,
        }
    }
}
