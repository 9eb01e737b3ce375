pub mod constraint;
pub mod geometry;

pub use constraint::{Constraint, Constraints};
pub use geometry::{Point, Rect, Size};
