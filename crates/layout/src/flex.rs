//! Flex layout primitives: line breaking, flexible length resolution and
//! main-axis space distribution.
//!
//! The flexible length resolver reproduces the CSS flexbox behavior: free
//! space is distributed proportionally to `flex-grow` (or to
//! `flex-shrink * base size` when shrinking), and items whose proposed size
//! violates a min/max clamp are frozen at the bound and removed from the
//! distributable set before the remainder is redistributed.

use crate::tree::NodeId;
use flexo_style::{AlignItems, FlexDirection, JustifyContent};
use flexo_types::{Constraint, Constraints, Size};
use std::ops::Range;

/// Tolerance used when comparing accumulated lengths.
pub(crate) const EPSILON: f32 = 0.001;

/// One of the two layout axes of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub(crate) fn main_of(direction: FlexDirection) -> Axis {
        if direction.is_row() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    pub(crate) fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    pub(crate) fn of(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    pub(crate) fn constraint(self, constraints: Constraints) -> Constraint {
        match self {
            Axis::Horizontal => constraints.width,
            Axis::Vertical => constraints.height,
        }
    }

    /// Assemble a `Size` from a main-axis and a cross-axis extent, where
    /// `self` is the main axis.
    pub(crate) fn pack(self, main: f32, cross: f32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    /// Assemble per-axis constraints, where `self` is the main axis.
    pub(crate) fn pack_constraints(self, main: Constraint, cross: Constraint) -> Constraints {
        match self {
            Axis::Horizontal => Constraints::new(main, cross),
            Axis::Vertical => Constraints::new(cross, main),
        }
    }
}

/// Per-child bookkeeping for one layout pass over a container.
#[derive(Debug, Clone)]
pub(crate) struct FlexItem {
    pub node: NodeId,
    /// Flex base size along the main axis (border box).
    pub base: f32,
    /// Base size clamped by the item's min/max.
    pub hypothetical: f32,
    pub min: f32,
    pub max: f32,
    pub grow: f32,
    pub shrink: f32,
    /// Sum of both main-axis margins.
    pub margin_main: f32,
    pub margin_main_start: f32,
    /// Sum of both cross-axis margins.
    pub margin_cross: f32,
    pub margin_cross_start: f32,
    /// Hypothetical cross size (border box).
    pub cross: f32,
    /// True when the cross size is content-derived and may be stretched.
    pub cross_auto: bool,
    pub cross_min: f32,
    pub cross_max: f32,
    pub align: AlignItems,
    /// Distance from the margin-box top edge of the cross axis to the
    /// content baseline, when the item reports one.
    pub baseline: Option<f32>,
    /// Resolved main size after flexible length resolution.
    pub target: f32,
    pub frozen: bool,
}

impl FlexItem {
    fn outer(&self) -> f32 {
        let main = if self.frozen { self.target } else { self.base };
        main + self.margin_main
    }

    pub(crate) fn outer_hypothetical(&self) -> f32 {
        self.hypothetical + self.margin_main
    }
}

/// Partition items into flex lines.
///
/// A line breaks before the child whose outer hypothetical size would
/// overflow the available main space, unless the line is still empty; an
/// oversized child occupies a line of its own, so breaking always advances.
pub(crate) fn break_lines(
    items: &[FlexItem],
    available: f32,
    wrapping: bool,
) -> Vec<Range<usize>> {
    if !wrapping || items.len() <= 1 {
        return vec![0..items.len()];
    }

    let mut lines = Vec::new();
    let mut start = 0;
    let mut used = 0.0;
    for (i, item) in items.iter().enumerate() {
        let outer = item.outer_hypothetical();
        if i > start && used + outer > available + EPSILON {
            lines.push(start..i);
            start = i;
            used = 0.0;
        }
        used += outer;
    }
    lines.push(start..items.len());
    lines
}

/// Resolve the final main size of every item on one line.
///
/// Iterative clamp-and-freeze loop: propose proportional sizes, clamp each
/// item to its min/max, freeze every item that had to be clamped (items
/// hitting their bound in the same iteration freeze together) and
/// redistribute the remaining space among the unfrozen rest. Terminates when
/// an iteration clamps nothing or no unfrozen items remain.
pub(crate) fn resolve_flexible_lengths(items: &mut [FlexItem], available: f32) {
    if items.is_empty() {
        return;
    }

    let sum_outer: f32 = items.iter().map(FlexItem::outer_hypothetical).sum();
    let growing = sum_outer < available;

    // Inflexible items never leave their hypothetical size: a zero factor,
    // or a clamp already pulling against the flex direction.
    for item in items.iter_mut() {
        let factor = if growing { item.grow } else { item.shrink };
        item.target = item.hypothetical;
        item.frozen = factor == 0.0
            || (growing && item.base > item.hypothetical)
            || (!growing && item.base < item.hypothetical);
    }

    let initial_free = available - items.iter().map(FlexItem::outer).sum::<f32>();

    while !items.iter().all(|item| item.frozen) {
        let remaining = available - items.iter().map(FlexItem::outer).sum::<f32>();

        // A factor sum below one only distributes that fraction of the
        // initial free space.
        let factor_sum: f32 = items
            .iter()
            .filter(|item| !item.frozen)
            .map(|item| if growing { item.grow } else { item.shrink })
            .sum();
        let free = if factor_sum > 0.0 && factor_sum < 1.0 {
            let scaled = initial_free * factor_sum;
            if scaled.abs() < remaining.abs() {
                scaled
            } else {
                remaining
            }
        } else {
            remaining
        };

        if growing {
            let grow_sum: f32 = items
                .iter()
                .filter(|item| !item.frozen)
                .map(|item| item.grow)
                .sum();
            if grow_sum <= 0.0 {
                freeze_all(items);
                break;
            }
            for item in items.iter_mut().filter(|item| !item.frozen) {
                item.target = item.base + free * (item.grow / grow_sum);
            }
        } else {
            // Shrinking scales by the base size so large items give up
            // proportionally more space.
            let scaled_sum: f32 = items
                .iter()
                .filter(|item| !item.frozen)
                .map(|item| item.shrink * item.base)
                .sum();
            if scaled_sum <= 0.0 {
                freeze_all(items);
                break;
            }
            for item in items.iter_mut().filter(|item| !item.frozen) {
                let ratio = (item.shrink * item.base) / scaled_sum;
                item.target = item.base - free.abs() * ratio;
            }
        }

        // Clamp proposals and tally the violation to decide which side of
        // the clamp freezes this round.
        let mut total_violation = 0.0;
        for item in items.iter_mut().filter(|item| !item.frozen) {
            let clamped = item.target.clamp(item.min, item.max.max(item.min));
            total_violation += clamped - item.target;
            item.target = clamped;
        }

        if total_violation.abs() < EPSILON {
            freeze_all(items);
        } else if total_violation > 0.0 {
            // Items pushed up to a min bound absorbed too little; they are
            // done, the rest resettles.
            for item in items.iter_mut().filter(|item| !item.frozen) {
                if (item.target - item.min).abs() < EPSILON {
                    item.frozen = true;
                }
            }
        } else {
            for item in items.iter_mut().filter(|item| !item.frozen) {
                if (item.target - item.max.max(item.min)).abs() < EPSILON {
                    item.frozen = true;
                }
            }
        }
    }
}

fn freeze_all(items: &mut [FlexItem]) {
    for item in items.iter_mut() {
        item.frozen = true;
    }
}

/// Leading offset and inter-item gap for one line under `justify-content`.
///
/// Negative leftover space falls back the way CSS does: the space-*
/// distributions degrade to flex-start or center rather than producing
/// negative gaps.
pub(crate) fn justify_offsets(
    justify: JustifyContent,
    leftover: f32,
    count: usize,
) -> (f32, f32) {
    if count == 0 {
        return (0.0, 0.0);
    }
    let n = count as f32;
    match justify {
        JustifyContent::FlexStart => (0.0, 0.0),
        JustifyContent::FlexEnd => (leftover, 0.0),
        JustifyContent::Center => (leftover / 2.0, 0.0),
        JustifyContent::SpaceBetween => {
            if count <= 1 || leftover <= 0.0 {
                (0.0, 0.0)
            } else {
                (0.0, leftover / (n - 1.0))
            }
        }
        JustifyContent::SpaceAround => {
            if leftover <= 0.0 {
                (leftover / 2.0, 0.0)
            } else {
                let gap = leftover / n;
                (gap / 2.0, gap)
            }
        }
        JustifyContent::SpaceEvenly => {
            if leftover <= 0.0 {
                (leftover / 2.0, 0.0)
            } else {
                let gap = leftover / (n + 1.0);
                (gap, gap)
            }
        }
    }
}

/// Mirror a justification for reversed directions, which pack from the
/// opposite edge.
pub(crate) fn mirror_justify(justify: JustifyContent) -> JustifyContent {
    match justify {
        JustifyContent::FlexStart => JustifyContent::FlexEnd,
        JustifyContent::FlexEnd => JustifyContent::FlexStart,
        other => other,
    }
}
