//! The validated per-box style attribute set.

use crate::dimension::{Dimension, Edges};
use crate::flex::{AlignItems, AlignSelf, FlexDirection, FlexWrap, JustifyContent};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Errors raised when a style attribute is outside its domain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("Negative value for '{property}': {value}")]
    Negative { property: &'static str, value: f32 },

    #[error("Non-finite value for '{property}'")]
    NonFinite { property: &'static str },
}

/// Raw style attributes, prior to validation.
///
/// All fields are public so a definition can be written with struct-update
/// syntax or deserialized from a declarative source; conversion into
/// [`Style`] performs the domain checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleData {
    // Container properties
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,

    // Item properties
    pub align_self: AlignSelf,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: Dimension,

    // Box model
    pub width: Dimension,
    pub height: Dimension,
    pub min_width: Option<Dimension>,
    pub min_height: Option<Dimension>,
    pub max_width: Option<Dimension>,
    pub max_height: Option<Dimension>,
    pub margin: Edges,
    pub padding: Edges,
    pub border: Edges,
}

impl Default for StyleData {
    fn default() -> Self {
        Self {
            direction: FlexDirection::default(),
            wrap: FlexWrap::default(),
            justify_content: JustifyContent::default(),
            align_items: AlignItems::default(),
            align_self: AlignSelf::default(),
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: Dimension::Auto,
            width: Dimension::Auto,
            height: Dimension::Auto,
            min_width: None,
            min_height: None,
            max_width: None,
            max_height: None,
            margin: Edges::default(),
            padding: Edges::default(),
            border: Edges::default(),
        }
    }
}

/// A validated, normalized style.
///
/// Construction rejects out-of-domain values (negative flex factors,
/// negative spacing) and normalizes the rest (negative percentages clamp to
/// zero; a definite max below a definite min is raised to the min). The data
/// is read-only afterwards; replace the whole style to change a box.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "StyleData")]
pub struct Style {
    inner: StyleData,
}

impl Style {
    pub fn new(data: StyleData) -> Result<Self, StyleError> {
        Self::try_from(data)
    }
}

impl Default for Style {
    fn default() -> Self {
        // The default attribute set is inside every domain.
        Self {
            inner: StyleData::default(),
        }
    }
}

impl std::ops::Deref for Style {
    type Target = StyleData;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}

impl TryFrom<StyleData> for Style {
    type Error = StyleError;

    fn try_from(mut data: StyleData) -> Result<Self, StyleError> {
        check_factor("flexGrow", data.flex_grow)?;
        check_factor("flexShrink", data.flex_shrink)?;

        check_edges("margin", &data.margin)?;
        check_edges("padding", &data.padding)?;
        check_edges("border", &data.border)?;

        data.flex_basis = check_dimension("flexBasis", data.flex_basis)?;
        data.width = check_dimension("width", data.width)?;
        data.height = check_dimension("height", data.height)?;
        data.min_width = check_optional("minWidth", data.min_width)?;
        data.min_height = check_optional("minHeight", data.min_height)?;
        data.max_width = check_optional("maxWidth", data.max_width)?;
        data.max_height = check_optional("maxHeight", data.max_height)?;

        // When both clamps are definite and disagree, the max yields.
        data.max_width = raise_max(data.min_width, data.max_width);
        data.max_height = raise_max(data.min_height, data.max_height);

        Ok(Self { inner: data })
    }
}

fn check_factor(property: &'static str, value: f32) -> Result<(), StyleError> {
    if !value.is_finite() {
        return Err(StyleError::NonFinite { property });
    }
    if value < 0.0 {
        return Err(StyleError::Negative { property, value });
    }
    Ok(())
}

fn check_edges(property: &'static str, edges: &Edges) -> Result<(), StyleError> {
    for side in [edges.top, edges.right, edges.bottom, edges.left] {
        if !side.is_finite() {
            return Err(StyleError::NonFinite { property });
        }
        if side < 0.0 {
            return Err(StyleError::Negative {
                property,
                value: side,
            });
        }
    }
    Ok(())
}

fn check_dimension(property: &'static str, dim: Dimension) -> Result<Dimension, StyleError> {
    match dim {
        Dimension::Px(v) => {
            if !v.is_finite() {
                return Err(StyleError::NonFinite { property });
            }
            if v < 0.0 {
                return Err(StyleError::Negative { property, value: v });
            }
            Ok(dim)
        }
        Dimension::Percent(p) => {
            if !p.is_finite() {
                return Err(StyleError::NonFinite { property });
            }
            // Percentages are length-resolution inputs; clamp to [0, inf).
            Ok(Dimension::Percent(p.max(0.0)))
        }
        Dimension::Auto => Ok(dim),
    }
}

fn check_optional(
    property: &'static str,
    dim: Option<Dimension>,
) -> Result<Option<Dimension>, StyleError> {
    dim.map(|d| check_dimension(property, d)).transpose()
}

fn raise_max(min: Option<Dimension>, max: Option<Dimension>) -> Option<Dimension> {
    if let (Some(Dimension::Px(lo)), Some(Dimension::Px(hi))) = (min, max)
        && hi < lo
    {
        return Some(Dimension::Px(lo));
    }
    max
}
