//! The layout engine: sizes a styled box tree under constraints and
//! produces absolute geometry.
//!
//! A pass runs in two phases per container. First every child gets a flex
//! base size (explicit basis, explicit main size, or measured content);
//! children are then partitioned into lines, flexible lengths are resolved
//! against the container's content box, and each child is placed along the
//! main axis per `justify-content` and along the cross axis per its
//! alignment. The pass then recurses into each child with its final size.
//!
//! All sizes are border-box; children lay out inside the content box, which
//! is the border box minus padding and border.

use crate::config::LayoutConfig;
use crate::flex::{
    Axis, FlexItem, break_lines, justify_offsets, mirror_justify, resolve_flexible_lengths,
};
use crate::measure::Measure;
use crate::result::Layout;
use crate::tree::{BoxTree, NodeId};
use crate::LayoutError;
use flexo_style::{AlignItems, Dimension, FlexWrap, Style};
use flexo_types::{Constraint, Constraints, Rect, Size};
use log::warn;
use std::sync::Arc;

pub struct LayoutEngine {
    measurer: Arc<dyn Measure>,
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(measurer: Arc<dyn Measure>) -> Self {
        Self::with_config(measurer, LayoutConfig::default())
    }

    pub fn with_config(measurer: Arc<dyn Measure>, config: LayoutConfig) -> Self {
        Self { measurer, config }
    }

    /// Lay out `tree` within the given constraints.
    ///
    /// Always produces a rectangle for every node; subtrees beyond the
    /// configured depth limit are collapsed to zero size and logged rather
    /// than failing the pass.
    pub fn compute_layout(
        &self,
        tree: &BoxTree,
        width: Constraint,
        height: Constraint,
    ) -> Result<Layout, LayoutError> {
        let root = tree.root();
        let mut rects = vec![Rect::default(); tree.len()];

        let size = self.root_size(tree, root, Constraints::new(width, height));
        rects[root.index()] = Rect::new(0.0, 0.0, size.width, size.height);

        if let Err(err) = self.arrange(tree, root, size, 1, &mut rects) {
            warn!("{err}; collapsing children of the root");
        }
        Ok(Layout::new(rects))
    }

    /// Resolve the root's border-box size: explicit dimension first, then
    /// fill a definite constraint, then fall back to content.
    fn root_size(&self, tree: &BoxTree, root: NodeId, constraints: Constraints) -> Size {
        let style = tree.style(root);
        let w_basis = constraints.width.definite();
        let h_basis = constraints.height.definite();
        let explicit_w = style.width.resolve(w_basis);
        let explicit_h = style.height.resolve(h_basis);

        let needs_content = (explicit_w.is_none() && w_basis.is_none())
            || (explicit_h.is_none() && h_basis.is_none());
        let intrinsic = if needs_content {
            self.intrinsic_size(tree, root, constraints, 0)
        } else {
            Size::zero()
        };

        let width = resolve_root_axis(explicit_w, constraints.width, intrinsic.width);
        let height = resolve_root_axis(explicit_h, constraints.height, intrinsic.height);
        Size::new(
            clamp_value(width, style.min_width, style.max_width, w_basis),
            clamp_value(height, style.min_height, style.max_height, h_basis),
        )
    }

    /// Position the children of `node` inside its final border-box `size`
    /// and recurse. Child rectangles are relative to the content box.
    fn arrange(
        &self,
        tree: &BoxTree,
        node: NodeId,
        size: Size,
        depth: usize,
        rects: &mut [Rect],
    ) -> Result<(), LayoutError> {
        if let Some(limit) = self.config.max_depth
            && depth > limit
        {
            return Err(LayoutError::ExcessiveNesting { limit });
        }

        let children = tree.children(node);
        if children.is_empty() {
            return Ok(());
        }

        let style = tree.style(node);
        let main = Axis::main_of(style.direction);
        let cross_axis = main.cross();
        let content_main = (main.of(size) - pad_border_sum(style, main)).max(0.0);
        let content_cross = (cross_axis.of(size) - pad_border_sum(style, cross_axis)).max(0.0);

        let mut items = self.collect_items(tree, style, children, content_main, content_cross, depth);

        let lines = break_lines(&items, content_main, style.wrap.is_wrapping());
        for range in &lines {
            resolve_flexible_lengths(&mut items[range.clone()], content_main);
        }

        // A single unwrapped line fills the whole cross content box, so
        // stretch items reach the container edge. Wrapped lines take their
        // tallest item.
        let single = !style.wrap.is_wrapping();
        let extents: Vec<f32> = lines
            .iter()
            .map(|range| {
                if single {
                    content_cross
                } else {
                    items[range.clone()]
                        .iter()
                        .map(|item| item.cross + item.margin_cross)
                        .fold(0.0, f32::max)
                }
            })
            .collect();

        // Lines stack from the cross start; wrap-reverse anchors the first
        // line at the cross end instead.
        let mut line_positions = Vec::with_capacity(extents.len());
        let mut cursor = 0.0;
        for &extent in &extents {
            line_positions.push(cursor);
            cursor += extent;
        }
        if style.wrap == FlexWrap::WrapReverse {
            for (pos, &extent) in line_positions.iter_mut().zip(&extents) {
                *pos = content_cross - *pos - extent;
            }
        }

        let reversed = style.direction.is_reverse();
        let justify = if reversed {
            mirror_justify(style.justify_content)
        } else {
            style.justify_content
        };

        for (li, range) in lines.iter().enumerate() {
            let line = &items[range.clone()];
            if line.is_empty() {
                continue;
            }
            let used: f32 = line.iter().map(|item| item.target + item.margin_main).sum();
            let (lead, gap) = justify_offsets(justify, content_main - used, line.len());

            let max_baseline = line
                .iter()
                .filter(|item| item.align == AlignItems::Baseline)
                .filter_map(|item| item.baseline.map(|b| b + item.margin_cross_start))
                .fold(None, |acc: Option<f32>, b| {
                    Some(acc.map_or(b, |a: f32| a.max(b)))
                });

            let extent = extents[li];
            let line_pos = line_positions[li];
            let mut cursor = lead;

            let order: Vec<&FlexItem> = if reversed {
                line.iter().rev().collect()
            } else {
                line.iter().collect()
            };
            for item in order {
                let main_pos = cursor + item.margin_main_start;

                let cross_size = if item.align == AlignItems::Stretch && item.cross_auto {
                    let stretched = (extent - item.margin_cross).max(0.0);
                    stretched.clamp(item.cross_min, item.cross_max.max(item.cross_min))
                } else {
                    item.cross
                };
                let outer_cross = cross_size + item.margin_cross;
                let cross_pos = line_pos
                    + match item.align {
                        AlignItems::Stretch | AlignItems::FlexStart => item.margin_cross_start,
                        AlignItems::FlexEnd => extent - outer_cross + item.margin_cross_start,
                        AlignItems::Center => {
                            (extent - outer_cross) / 2.0 + item.margin_cross_start
                        }
                        AlignItems::Baseline => {
                            let own = item.baseline.map(|b| b + item.margin_cross_start);
                            match (own, max_baseline) {
                                (Some(b), Some(max_b)) => max_b - b + item.margin_cross_start,
                                _ => item.margin_cross_start,
                            }
                        }
                    };

                let child_size = main.pack(item.target, cross_size);
                let (x, y) = match main {
                    Axis::Horizontal => (main_pos, cross_pos),
                    Axis::Vertical => (cross_pos, main_pos),
                };
                rects[item.node.index()] = Rect::new(x, y, child_size.width, child_size.height);

                if let Err(err) = self.arrange(tree, item.node, child_size, depth + 1, rects) {
                    warn!("{err}; collapsing subtree under node {}", item.node.index());
                    rects[item.node.index()] = Rect::new(x, y, 0.0, 0.0);
                }

                cursor += item.margin_main + item.target + gap;
            }
        }
        Ok(())
    }

    /// Build the per-child flex bookkeeping for one container.
    fn collect_items(
        &self,
        tree: &BoxTree,
        container: &Style,
        children: &[NodeId],
        content_main: f32,
        content_cross: f32,
        depth: usize,
    ) -> Vec<FlexItem> {
        let main = Axis::main_of(container.direction);
        let cross_axis = main.cross();
        let cross_constraint = Constraint::Definite(content_cross);

        let mut items = Vec::with_capacity(children.len());
        for &child in children {
            let cs = tree.style(child);

            let base =
                self.flex_base(tree, child, main, Some(content_main), cross_constraint, depth);
            let min = axis_min(cs, main)
                .and_then(|d| d.resolve(Some(content_main)))
                .unwrap_or(0.0);
            let max = axis_max(cs, main)
                .and_then(|d| d.resolve(Some(content_main)))
                .unwrap_or(f32::INFINITY);
            let hypothetical = base.clamp(min, max.max(min));

            let cross_explicit = axis_dim(cs, cross_axis).resolve(Some(content_cross));
            let cross_auto = cross_explicit.is_none();
            let cross_raw = match cross_explicit {
                Some(v) => v,
                None => cross_axis.of(self.intrinsic_size(
                    tree,
                    child,
                    main.pack_constraints(Constraint::Unbounded, cross_constraint),
                    depth,
                )),
            };
            let cross_min = axis_min(cs, cross_axis)
                .and_then(|d| d.resolve(Some(content_cross)))
                .unwrap_or(0.0);
            let cross_max = axis_max(cs, cross_axis)
                .and_then(|d| d.resolve(Some(content_cross)))
                .unwrap_or(f32::INFINITY);
            let cross = cross_raw.clamp(cross_min, cross_max.max(cross_min));

            let align = cs.align_self.resolve(container.align_items);
            // Baseline alignment applies when baselines run across the
            // main axis, i.e. in row containers.
            let baseline = if align == AlignItems::Baseline && main == Axis::Horizontal {
                self.baseline_of(tree, child)
            } else {
                None
            };

            items.push(FlexItem {
                node: child,
                base,
                hypothetical,
                min,
                max,
                grow: cs.flex_grow,
                shrink: cs.flex_shrink,
                margin_main: margin_sum(cs, main),
                margin_main_start: margin_start(cs, main),
                margin_cross: margin_sum(cs, cross_axis),
                margin_cross_start: margin_start(cs, cross_axis),
                cross,
                cross_auto,
                cross_min,
                cross_max,
                align,
                baseline,
                target: hypothetical,
                frozen: false,
            });
        }
        items
    }

    /// Flex base size of `child` along the container's main axis: explicit
    /// basis, then explicit main dimension, then content.
    fn flex_base(
        &self,
        tree: &BoxTree,
        child: NodeId,
        main: Axis,
        avail_main: Option<f32>,
        cross: Constraint,
        depth: usize,
    ) -> f32 {
        let style = tree.style(child);
        let basis = style
            .flex_basis
            .resolve(avail_main)
            .or_else(|| axis_dim(style, main).resolve(avail_main));
        if let Some(v) = basis {
            return v;
        }
        let constraints = main.pack_constraints(Constraint::Unbounded, cross);
        main.of(self.intrinsic_size(tree, child, constraints, depth + 1))
    }

    /// Content-derived border-box size of a subtree: leaves are measured,
    /// containers sum child bases along their main axis and take the
    /// largest child across it.
    fn intrinsic_size(
        &self,
        tree: &BoxTree,
        node: NodeId,
        constraints: Constraints,
        depth: usize,
    ) -> Size {
        if let Some(limit) = self.config.max_depth
            && depth > limit
        {
            warn!("measuring past the depth limit of {limit}; treating subtree as empty");
            return Size::zero();
        }

        let style = tree.style(node);
        let w_basis = constraints.width.definite();
        let h_basis = constraints.height.definite();
        let explicit_w = style.width.resolve(w_basis);
        let explicit_h = style.height.resolve(h_basis);
        let pb_w = pad_border_sum(style, Axis::Horizontal);
        let pb_h = pad_border_sum(style, Axis::Vertical);

        let (content_w, content_h) = if explicit_w.is_some() && explicit_h.is_some() {
            (0.0, 0.0)
        } else if tree.is_leaf(node) {
            let m = self.measurer.measure(
                node,
                constraints.width.deflate(pb_w),
                constraints.height.deflate(pb_h),
            );
            (m.size.width, m.size.height)
        } else {
            let main = Axis::main_of(style.direction);
            let avail_main = main
                .constraint(constraints)
                .definite()
                .map(|v| (v - pad_border_sum(style, main)).max(0.0));
            let cross = main
                .cross()
                .constraint(constraints)
                .deflate(pad_border_sum(style, main.cross()));

            let mut sum = 0.0;
            let mut max_cross: f32 = 0.0;
            for &child in tree.children(node) {
                let cs = tree.style(child);
                sum += self.flex_base(tree, child, main, avail_main, cross, depth)
                    + margin_sum(cs, main);
                let child_constraints = main.pack_constraints(Constraint::Unbounded, cross);
                let child_cross = main
                    .cross()
                    .of(self.intrinsic_size(tree, child, child_constraints, depth + 1));
                max_cross = max_cross.max(child_cross + margin_sum(cs, main.cross()));
            }
            match main {
                Axis::Horizontal => (sum, max_cross),
                Axis::Vertical => (max_cross, sum),
            }
        };

        let width = explicit_w.unwrap_or(content_w + pb_w);
        let height = explicit_h.unwrap_or(content_h + pb_h);
        Size::new(
            clamp_value(width, style.min_width, style.max_width, w_basis),
            clamp_value(height, style.min_height, style.max_height, h_basis),
        )
    }

    /// Distance from the border-box top of `node` to its first baseline.
    /// Containers report the first descendant baseline they find.
    fn baseline_of(&self, tree: &BoxTree, node: NodeId) -> Option<f32> {
        let style = tree.style(node);
        let top = style.padding.top + style.border.top;
        if tree.is_leaf(node) {
            let m = self
                .measurer
                .measure(node, Constraint::Unbounded, Constraint::Unbounded);
            m.baseline.map(|b| b + top)
        } else {
            tree.children(node).iter().find_map(|&child| {
                self.baseline_of(tree, child)
                    .map(|b| b + top + tree.style(child).margin.top)
            })
        }
    }
}

fn resolve_root_axis(explicit: Option<f32>, constraint: Constraint, intrinsic: f32) -> f32 {
    if let Some(v) = explicit {
        return v;
    }
    match constraint {
        Constraint::Definite(v) => v,
        Constraint::Bounded(max) => intrinsic.min(max),
        Constraint::Unbounded => intrinsic,
    }
}

fn clamp_value(
    value: f32,
    min: Option<Dimension>,
    max: Option<Dimension>,
    basis: Option<f32>,
) -> f32 {
    let lo = min.and_then(|d| d.resolve(basis)).unwrap_or(0.0);
    let hi = max.and_then(|d| d.resolve(basis)).unwrap_or(f32::INFINITY);
    value.clamp(lo, hi.max(lo)).max(0.0)
}

fn axis_dim(style: &Style, axis: Axis) -> Dimension {
    match axis {
        Axis::Horizontal => style.width,
        Axis::Vertical => style.height,
    }
}

fn axis_min(style: &Style, axis: Axis) -> Option<Dimension> {
    match axis {
        Axis::Horizontal => style.min_width,
        Axis::Vertical => style.min_height,
    }
}

fn axis_max(style: &Style, axis: Axis) -> Option<Dimension> {
    match axis {
        Axis::Horizontal => style.max_width,
        Axis::Vertical => style.max_height,
    }
}

fn margin_sum(style: &Style, axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => style.margin.horizontal(),
        Axis::Vertical => style.margin.vertical(),
    }
}

fn margin_start(style: &Style, axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => style.margin.left,
        Axis::Vertical => style.margin.top,
    }
}

fn pad_border_sum(style: &Style, axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => style.padding.horizontal() + style.border.horizontal(),
        Axis::Vertical => style.padding.vertical() + style.border.vertical(),
    }
}
