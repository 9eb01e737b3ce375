//! Flexbox-style layout: styled box trees in, absolute geometry out.
//!
//! Build a [`BoxTree`] of [`Style`] nodes, hand it to a [`LayoutEngine`]
//! together with the available space, and read the resulting rectangle of
//! every node out of the returned [`Layout`]. Leaf content (text, images,
//! widgets) is sized through the [`Measure`] trait.
//!
//! ```
//! use std::sync::Arc;
//! use flexo::{BoxTree, Constraint, LayoutEngine, Style, StyleData, ZeroMeasure};
//!
//! let mut tree = BoxTree::new(Style::default());
//! let child = tree.add_child(
//!     tree.root(),
//!     Style::new(StyleData {
//!         flex_grow: 1.0,
//!         ..Default::default()
//!     })?,
//! )?;
//!
//! let engine = LayoutEngine::new(Arc::new(ZeroMeasure));
//! let layout = engine.compute_layout(
//!     &tree,
//!     Constraint::Definite(320.0),
//!     Constraint::Definite(200.0),
//! )?;
//! assert_eq!(layout.get(child).width, 320.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use flexo_layout::{
    BoxTree, Layout, LayoutConfig, LayoutEngine, LayoutError, Measure, Measurement, NodeId,
    ZeroMeasure,
};
pub use flexo_style::{
    AlignItems, AlignSelf, Dimension, Edges, FlexDirection, FlexWrap, JustifyContent, Style,
    StyleData, StyleError,
};
pub use flexo_types::{Constraint, Constraints, Point, Rect, Size};
