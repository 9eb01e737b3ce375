use crate::config::LayoutConfig;
use crate::engine::LayoutEngine;
use crate::measure::{Measurement, ZeroMeasure};
use crate::test_utils::{FixedMeasure, TableMeasure, sized, style};
use crate::tree::BoxTree;
use flexo_style::{
    AlignItems, AlignSelf, Dimension, Edges, FlexDirection, FlexWrap, JustifyContent, StyleData,
};
use flexo_types::{Constraint, Rect, Size};
use std::sync::Arc;

fn engine() -> LayoutEngine {
    LayoutEngine::new(Arc::new(ZeroMeasure))
}

fn definite(width: f32, height: f32) -> (Constraint, Constraint) {
    (Constraint::Definite(width), Constraint::Definite(height))
}

#[test]
fn test_grow_distribution() {
    let mut tree = BoxTree::new(style(StyleData::default()));
    let root = tree.root();
    let grow_child = |grow| {
        style(StyleData {
            flex_basis: Dimension::Px(20.0),
            flex_grow: grow,
            ..Default::default()
        })
    };
    let a = tree.add_child(root, grow_child(1.0)).unwrap();
    let b = tree.add_child(root, grow_child(1.0)).unwrap();
    let c = tree.add_child(root, grow_child(2.0)).unwrap();

    let (w, h) = definite(100.0, 50.0);
    let layout = engine().compute_layout(&tree, w, h).unwrap();

    assert_eq!(layout.get(root), Rect::new(0.0, 0.0, 100.0, 50.0));
    assert_eq!(layout.get(a), Rect::new(0.0, 0.0, 30.0, 50.0));
    assert_eq!(layout.get(b), Rect::new(30.0, 0.0, 30.0, 50.0));
    assert_eq!(layout.get(c), Rect::new(60.0, 0.0, 40.0, 50.0));
}

#[test]
fn test_shrink_with_min_totals_exactly() {
    let mut tree = BoxTree::new(style(StyleData::default()));
    let root = tree.root();
    let a = tree
        .add_child(
            root,
            style(StyleData {
                width: Dimension::Px(60.0),
                ..Default::default()
            }),
        )
        .unwrap();
    let b = tree
        .add_child(
            root,
            style(StyleData {
                width: Dimension::Px(60.0),
                min_width: Some(Dimension::Px(55.0)),
                ..Default::default()
            }),
        )
        .unwrap();

    let (w, h) = definite(100.0, 50.0);
    let layout = engine().compute_layout(&tree, w, h).unwrap();

    assert_eq!(layout.get(a).width, 45.0);
    assert_eq!(layout.get(b).width, 55.0);
    assert_eq!(layout.get(b).x, 45.0);
}

#[test]
fn test_wrap_produces_lines() {
    let mut tree = BoxTree::new(style(StyleData {
        wrap: FlexWrap::Wrap,
        ..Default::default()
    }));
    let root = tree.root();
    let children: Vec<_> = (0..5)
        .map(|_| tree.add_child(root, sized(100.0, 20.0)).unwrap())
        .collect();

    let (w, h) = definite(250.0, 100.0);
    let layout = engine().compute_layout(&tree, w, h).unwrap();

    let expected = [
        (0.0, 0.0),
        (100.0, 0.0),
        (0.0, 20.0),
        (100.0, 20.0),
        (0.0, 40.0),
    ];
    for (child, (x, y)) in children.iter().zip(expected) {
        assert_eq!(layout.get(*child), Rect::new(x, y, 100.0, 20.0));
    }
}

#[test]
fn test_wrap_reverse_stacks_from_cross_end() {
    let mut tree = BoxTree::new(style(StyleData {
        wrap: FlexWrap::WrapReverse,
        ..Default::default()
    }));
    let root = tree.root();
    let a = tree.add_child(root, sized(100.0, 20.0)).unwrap();
    let b = tree.add_child(root, sized(100.0, 20.0)).unwrap();
    let c = tree.add_child(root, sized(100.0, 20.0)).unwrap();

    let (w, h) = definite(250.0, 100.0);
    let layout = engine().compute_layout(&tree, w, h).unwrap();

    // First line sits at the bottom, the next one above it. Items keep
    // their main-axis order.
    assert_eq!(layout.get(a), Rect::new(0.0, 80.0, 100.0, 20.0));
    assert_eq!(layout.get(b), Rect::new(100.0, 80.0, 100.0, 20.0));
    assert_eq!(layout.get(c), Rect::new(0.0, 60.0, 100.0, 20.0));
}

#[test]
fn test_row_reverse_mirrors_positions() {
    let mut tree = BoxTree::new(style(StyleData {
        direction: FlexDirection::RowReverse,
        ..Default::default()
    }));
    let root = tree.root();
    let a = tree.add_child(root, sized(50.0, 50.0)).unwrap();
    let b = tree.add_child(root, sized(50.0, 50.0)).unwrap();
    let c = tree.add_child(root, sized(50.0, 50.0)).unwrap();

    let (w, h) = definite(300.0, 50.0);
    let layout = engine().compute_layout(&tree, w, h).unwrap();

    // The first child sits at the main end; sizes are unaffected.
    assert_eq!(layout.get(a), Rect::new(250.0, 0.0, 50.0, 50.0));
    assert_eq!(layout.get(b), Rect::new(200.0, 0.0, 50.0, 50.0));
    assert_eq!(layout.get(c), Rect::new(150.0, 0.0, 50.0, 50.0));
}

#[test]
fn test_column_distributes_height() {
    let mut tree = BoxTree::new(style(StyleData {
        direction: FlexDirection::Column,
        ..Default::default()
    }));
    let root = tree.root();
    let grow = style(StyleData {
        flex_grow: 1.0,
        ..Default::default()
    });
    let a = tree.add_child(root, grow.clone()).unwrap();
    let b = tree.add_child(root, grow.clone()).unwrap();
    let c = tree.add_child(root, grow).unwrap();

    let (w, h) = definite(100.0, 300.0);
    let layout = engine().compute_layout(&tree, w, h).unwrap();

    // Heights flex, widths stretch to the container.
    assert_eq!(layout.get(a), Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(layout.get(b), Rect::new(0.0, 100.0, 100.0, 100.0));
    assert_eq!(layout.get(c), Rect::new(0.0, 200.0, 100.0, 100.0));
}

#[test]
fn test_justify_space_evenly() {
    let mut tree = BoxTree::new(style(StyleData {
        justify_content: JustifyContent::SpaceEvenly,
        ..Default::default()
    }));
    let root = tree.root();
    let a = tree.add_child(root, sized(60.0, 50.0)).unwrap();
    let b = tree.add_child(root, sized(60.0, 50.0)).unwrap();

    let (w, h) = definite(300.0, 50.0);
    let layout = engine().compute_layout(&tree, w, h).unwrap();

    assert_eq!(layout.get(a).x, 60.0);
    assert_eq!(layout.get(b).x, 180.0);
}

#[test]
fn test_overflow_space_around_centers() {
    let mut tree = BoxTree::new(style(StyleData {
        justify_content: JustifyContent::SpaceAround,
        ..Default::default()
    }));
    let root = tree.root();
    let rigid = style(StyleData {
        width: Dimension::Px(60.0),
        flex_shrink: 0.0,
        ..Default::default()
    });
    let a = tree.add_child(root, rigid.clone()).unwrap();
    let b = tree.add_child(root, rigid).unwrap();

    let (w, h) = definite(100.0, 50.0);
    let layout = engine().compute_layout(&tree, w, h).unwrap();

    // 20 units of overflow, centered: the line starts 10 to the left.
    assert_eq!(layout.get(a).x, -10.0);
    assert_eq!(layout.get(b).x, 50.0);
}

#[test]
fn test_stretch_fills_cross_minus_margins() {
    let mut tree = BoxTree::new(style(StyleData {
        padding: Edges::all(10.0),
        ..Default::default()
    }));
    let root = tree.root();
    let child = tree
        .add_child(
            root,
            style(StyleData {
                width: Dimension::Px(50.0),
                margin: Edges::y(5.0),
                ..Default::default()
            }),
        )
        .unwrap();

    let (w, h) = definite(200.0, 100.0);
    let layout = engine().compute_layout(&tree, w, h).unwrap();

    // Positions are relative to the content box, so the padding does not
    // show up in the child's coordinates.
    assert_eq!(layout.get(child), Rect::new(0.0, 5.0, 50.0, 70.0));
}

#[test]
fn test_stretch_respects_max() {
    let mut tree = BoxTree::new(style(StyleData::default()));
    let root = tree.root();
    let child = tree
        .add_child(
            root,
            style(StyleData {
                width: Dimension::Px(50.0),
                max_height: Some(Dimension::Px(40.0)),
                ..Default::default()
            }),
        )
        .unwrap();

    let (w, h) = definite(200.0, 100.0);
    let layout = engine().compute_layout(&tree, w, h).unwrap();
    assert_eq!(layout.get(child).height, 40.0);
}

#[test]
fn test_align_self_overrides_container() {
    let mut tree = BoxTree::new(style(StyleData {
        align_items: AlignItems::FlexStart,
        ..Default::default()
    }));
    let root = tree.root();
    let a = tree.add_child(root, sized(50.0, 20.0)).unwrap();
    let b = tree
        .add_child(
            root,
            style(StyleData {
                width: Dimension::Px(50.0),
                height: Dimension::Px(20.0),
                align_self: AlignSelf::FlexEnd,
                ..Default::default()
            }),
        )
        .unwrap();
    let c = tree
        .add_child(
            root,
            style(StyleData {
                width: Dimension::Px(50.0),
                height: Dimension::Px(20.0),
                align_self: AlignSelf::Center,
                ..Default::default()
            }),
        )
        .unwrap();

    let (w, h) = definite(300.0, 100.0);
    let layout = engine().compute_layout(&tree, w, h).unwrap();

    assert_eq!(layout.get(a).y, 0.0);
    assert_eq!(layout.get(b).y, 80.0);
    assert_eq!(layout.get(c).y, 40.0);
}

#[test]
fn test_baseline_alignment() {
    let mut tree = BoxTree::new(style(StyleData {
        align_items: AlignItems::Baseline,
        ..Default::default()
    }));
    let root = tree.root();
    let a = tree.add_child(root, sized(50.0, 50.0)).unwrap();
    let b = tree.add_child(root, sized(50.0, 30.0)).unwrap();

    let mut measure = TableMeasure::default();
    measure.set(a, Measurement::with_baseline(Size::new(50.0, 50.0), 40.0));
    measure.set(b, Measurement::with_baseline(Size::new(50.0, 30.0), 20.0));
    let engine = LayoutEngine::new(Arc::new(measure));

    let (w, h) = definite(200.0, 100.0);
    let layout = engine.compute_layout(&tree, w, h).unwrap();

    // Baselines coincide 40 units below the line start.
    assert_eq!(layout.get(a).y, 0.0);
    assert_eq!(layout.get(b).y, 20.0);
}

#[test]
fn test_measured_leaf_includes_padding() {
    let mut tree = BoxTree::new(style(StyleData {
        align_items: AlignItems::FlexStart,
        ..Default::default()
    }));
    let root = tree.root();
    let child = tree
        .add_child(
            root,
            style(StyleData {
                padding: Edges::all(5.0),
                ..Default::default()
            }),
        )
        .unwrap();

    let engine = LayoutEngine::new(Arc::new(FixedMeasure::new(30.0, 10.0)));
    let (w, h) = definite(200.0, 100.0);
    let layout = engine.compute_layout(&tree, w, h).unwrap();

    assert_eq!(layout.get(child), Rect::new(0.0, 0.0, 40.0, 20.0));
}

#[test]
fn test_percentages_resolve_against_content_box() {
    let mut tree = BoxTree::new(style(StyleData {
        align_items: AlignItems::FlexStart,
        ..Default::default()
    }));
    let root = tree.root();
    let child = tree
        .add_child(
            root,
            style(StyleData {
                width: Dimension::Percent(50.0),
                height: Dimension::Percent(25.0),
                ..Default::default()
            }),
        )
        .unwrap();

    let (w, h) = definite(200.0, 100.0);
    let layout = engine().compute_layout(&tree, w, h).unwrap();
    assert_eq!(layout.get(child), Rect::new(0.0, 0.0, 100.0, 25.0));
}

#[test]
fn test_percentage_under_unbounded_parent_falls_back() {
    let mut tree = BoxTree::new(style(StyleData::default()));
    let root = tree.root();
    let child = tree
        .add_child(
            root,
            style(StyleData {
                width: Dimension::Percent(50.0),
                height: Dimension::Px(10.0),
                ..Default::default()
            }),
        )
        .unwrap();

    // No definite width anywhere; the percentage degrades to content
    // sizing and the zero measurer reports empty content.
    let layout = engine()
        .compute_layout(&tree, Constraint::Unbounded, Constraint::Definite(50.0))
        .unwrap();
    assert_eq!(layout.get(root).width, 0.0);
    assert_eq!(layout.get(child).width, 0.0);
}

#[test]
fn test_root_auto_sizes_to_content() {
    let mut tree = BoxTree::new(style(StyleData {
        padding: Edges::all(10.0),
        ..Default::default()
    }));
    let root = tree.root();
    tree.add_child(root, sized(40.0, 30.0)).unwrap();
    tree.add_child(root, sized(60.0, 20.0)).unwrap();

    let layout = engine()
        .compute_layout(&tree, Constraint::Unbounded, Constraint::Unbounded)
        .unwrap();
    assert_eq!(layout.get(root), Rect::new(0.0, 0.0, 120.0, 50.0));
}

#[test]
fn test_root_bounded_caps_content() {
    let mut tree = BoxTree::new(style(StyleData::default()));
    let root = tree.root();
    tree.add_child(root, sized(300.0, 20.0)).unwrap();

    let layout = engine()
        .compute_layout(&tree, Constraint::Bounded(200.0), Constraint::Unbounded)
        .unwrap();
    assert_eq!(layout.get(root).width, 200.0);
}

#[test]
fn test_depth_limit_collapses_subtree() {
    let mut tree = BoxTree::new(style(StyleData {
        align_items: AlignItems::FlexStart,
        ..Default::default()
    }));
    let root = tree.root();
    let a = tree.add_child(root, sized(80.0, 80.0)).unwrap();
    let b = tree.add_child(a, sized(60.0, 60.0)).unwrap();
    let c = tree.add_child(b, sized(40.0, 40.0)).unwrap();

    let engine = LayoutEngine::with_config(
        Arc::new(ZeroMeasure),
        LayoutConfig {
            max_depth: Some(2),
        },
    );
    let (w, h) = definite(100.0, 100.0);
    let layout = engine.compute_layout(&tree, w, h).unwrap();

    // The pass still completes; only the too-deep subtree is zeroed.
    assert_eq!(layout.get(a).size(), Size::new(80.0, 80.0));
    assert_eq!(layout.get(b).size(), Size::zero());
    assert_eq!(layout.get(c).size(), Size::zero());
}

#[test]
fn test_layout_is_deterministic() {
    let mut tree = BoxTree::new(style(StyleData {
        wrap: FlexWrap::Wrap,
        justify_content: JustifyContent::SpaceBetween,
        ..Default::default()
    }));
    let root = tree.root();
    for i in 0..6 {
        let grow = if i % 2 == 0 { 1.0 } else { 0.0 };
        tree.add_child(
            root,
            style(StyleData {
                width: Dimension::Px(70.0),
                height: Dimension::Px(20.0),
                flex_grow: grow,
                ..Default::default()
            }),
        )
        .unwrap();
    }

    let engine = engine();
    let (w, h) = definite(250.0, 120.0);
    let first = engine.compute_layout(&tree, w, h).unwrap();
    let second = engine.compute_layout(&tree, w, h).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_childless_root_still_produces_geometry() {
    let tree = BoxTree::new(style(StyleData::default()));
    let (w, h) = definite(100.0, 100.0);
    let layout = engine().compute_layout(&tree, w, h).unwrap();
    assert_eq!(layout.get(tree.root()), Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(layout.len(), 1);
}
