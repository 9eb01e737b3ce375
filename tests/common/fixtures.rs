//! Builders and measurers shared by the integration tests.

use flexo::{Constraint, Measure, Measurement, NodeId, Size, Style};
use serde_json::Value;

/// Deserialize a style from its declarative JSON form.
pub fn style_from_json(value: Value) -> Result<Style, serde_json::Error> {
    serde_json::from_value(value)
}

/// A measurer that sizes every leaf as a run of fixed-width glyphs,
/// wrapping within the offered width.
pub struct GlyphMeasure {
    pub glyph_width: f32,
    pub line_height: f32,
    pub glyphs: usize,
}

impl Measure for GlyphMeasure {
    fn measure(&self, _node: NodeId, width: Constraint, _height: Constraint) -> Measurement {
        let natural = self.glyph_width * self.glyphs as f32;
        let (w, lines) = match width {
            Constraint::Definite(max) | Constraint::Bounded(max) if max < natural => {
                let per_line = (max / self.glyph_width).floor().max(1.0);
                let lines = (self.glyphs as f32 / per_line).ceil();
                (per_line * self.glyph_width, lines)
            }
            _ => (natural, 1.0),
        };
        Measurement::with_baseline(
            Size::new(w, lines * self.line_height),
            self.line_height * 0.8,
        )
    }
}
