//! Primitives for sizes and four-sided spacing.
use serde::{Deserialize, Deserializer, Serialize};

/// A length specification for a box edge or axis.
///
/// Percentages resolve against the parent's resolved content size on the same
/// axis; when that size is unknown for a pass, a percentage behaves like
/// `Auto`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Px(f32),
    Percent(f32),
    #[default]
    Auto,
}

impl Dimension {
    /// Resolve to a concrete length against an optional percentage basis.
    pub fn resolve(self, basis: Option<f32>) -> Option<f32> {
        match self {
            Dimension::Px(v) => Some(v),
            Dimension::Percent(p) => basis.map(|b| p * b / 100.0),
            Dimension::Auto => None,
        }
    }

    pub fn is_auto(self) -> bool {
        matches!(self, Dimension::Auto)
    }

    /// True when the dimension resolves without knowing the parent size.
    pub fn is_definite(self) -> bool {
        matches!(self, Dimension::Px(_))
    }
}

/// Four-sided spacing (margin, padding or border widths), each side >= 0.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn x(value: f32) -> Self {
        Self {
            top: 0.0,
            right: value,
            bottom: 0.0,
            left: value,
        }
    }

    pub fn y(value: f32) -> Self {
        Self {
            top: value,
            right: 0.0,
            bottom: value,
            left: 0.0,
        }
    }

    /// Sum of the left and right sides.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of the top and bottom sides.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl<'de> Deserialize<'de> for Edges {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Accept either a uniform number or a per-side map.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum EdgesDef {
            Uniform(f32),
            Sides {
                #[serde(default)]
                top: f32,
                #[serde(default)]
                right: f32,
                #[serde(default)]
                bottom: f32,
                #[serde(default)]
                left: f32,
            },
        }

        match EdgesDef::deserialize(deserializer)? {
            EdgesDef::Uniform(v) => Ok(Edges::all(v)),
            EdgesDef::Sides {
                top,
                right,
                bottom,
                left,
            } => Ok(Edges {
                top,
                right,
                bottom,
                left,
            }),
        }
    }
}
