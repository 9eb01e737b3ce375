pub mod dimension;
pub mod flex;
pub mod style;

pub use dimension::{Dimension, Edges};
pub use flex::{AlignItems, AlignSelf, FlexDirection, FlexWrap, JustifyContent};
pub use style::{Style, StyleData, StyleError};
