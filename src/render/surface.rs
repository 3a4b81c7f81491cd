use serde::{Deserialize, Serialize};

use crate::core::{Rect, Size};
use crate::render::{
    ArcPrimitive, CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive,
};

/// Immediate-mode 2D drawing target consumed by every chart renderer.
///
/// Chart drawing code only ever talks to this trait, so any canvas API can
/// host the charts: the recording `RenderFrame`, a Cairo context, or a host
/// widget toolkit. Drawing calls are infallible; backends that can fail
/// record the error and report it when the frame is flushed.
pub trait DrawSurface {
    fn draw_line(&mut self, line: LinePrimitive);
    fn draw_rect(&mut self, rect: RectPrimitive);
    fn draw_circle(&mut self, circle: CirclePrimitive);
    fn draw_arc(&mut self, arc: ArcPrimitive);
    fn draw_path(&mut self, path: PathPrimitive);
    fn draw_text(&mut self, text: TextPrimitive);

    /// Measures the bounding box of a single-line label.
    fn measure_text(&self, text: &str, font_size_px: f64) -> Size;

    /// Restricts subsequent drawing to `rect` until the matching `pop_clip`.
    fn push_clip(&mut self, rect: Rect);
    fn pop_clip(&mut self);
}

/// Approximate text metrics for surfaces without a real font engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    /// Average glyph advance as a fraction of the font size.
    pub char_width_ratio: f64,
    /// Line box height as a fraction of the font size.
    pub line_height_ratio: f64,
}

impl FontMetrics {
    #[must_use]
    pub fn measure(self, text: &str, font_size_px: f64) -> Size {
        if text.is_empty() || !font_size_px.is_finite() || font_size_px <= 0.0 {
            return Size::new(0.0, 0.0);
        }
        let glyphs = text.chars().count() as f64;
        Size::new(
            glyphs * font_size_px * self.char_width_ratio,
            font_size_px * self.line_height_ratio,
        )
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            char_width_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}
