use tracing::trace;

use crate::core::{BubbleDataSet, ChartDataSet, Point, Viewport};
use crate::render::{CirclePrimitive, Color, DrawSurface, Paint};

use super::value_labels::draw_centered_value_label;

/// Largest bubble radius as a fraction of the content width.
pub const MAX_BUBBLE_RADIUS_RATIO: f64 = 0.1;
pub const BUBBLE_ALPHA: f64 = 0.75;
pub const BUBBLE_HIGHLIGHT_COLOR: Color = Color::from_argb_hex(0xFFFF_BB73);

/// Pixel radius of a bubble. Normalized sizes are relative to `max_size`;
/// a non-positive `max_size` yields `0` instead of dividing by zero.
#[must_use]
pub fn bubble_radius(size: f64, max_size: f64, max_radius_px: f64, normalize: bool, phase: f64) -> f64 {
    if normalize {
        if max_size <= 0.0 || !max_size.is_finite() {
            return 0.0;
        }
        size / max_size * max_radius_px * phase
    } else {
        size * phase
    }
}

/// Draws translucent bubbles. `max_size` is shared by every bubble dataset of
/// the chart so sizes stay comparable.
pub fn draw_bubble_data_set(
    surface: &mut dyn DrawSurface,
    data_set: &BubbleDataSet,
    viewport: &Viewport,
    max_size: f64,
    phase: f64,
) {
    if !data_set.is_visible() || data_set.is_empty() {
        return;
    }
    if max_size <= 0.0 || !max_size.is_finite() {
        trace!(label = data_set.label(), "bubble max size is zero, nothing to draw");
        return;
    }
    trace!(
        label = data_set.label(),
        entries = data_set.entry_count(),
        "drawing bubble data set"
    );
    let style = data_set.style();
    let normalize = data_set.bubble_style().normalize_size;
    let max_radius_px = viewport.content_width() * MAX_BUBBLE_RADIUS_RATIO;
    for (index, entry) in data_set.entries().iter().enumerate() {
        let x = viewport.data_to_pixel_x(entry.x);
        if !viewport.is_in_bounds_x(x) {
            continue;
        }
        let radius = bubble_radius(entry.size, max_size, max_radius_px, normalize, phase);
        if radius <= 0.0 {
            continue;
        }
        let center = Point::new(x, viewport.data_to_pixel_y(entry.y));
        surface.draw_circle(CirclePrimitive::new(
            center,
            radius,
            Paint::fill(style.color(index).with_alpha(BUBBLE_ALPHA)),
        ));
        draw_centered_value_label(surface, style, entry.size, center);
    }
}

/// Outlines bubble `index` with a highlight ring.
pub fn draw_bubble_highlight(
    surface: &mut dyn DrawSurface,
    data_set: &BubbleDataSet,
    viewport: &Viewport,
    max_size: f64,
    phase: f64,
    index: usize,
) {
    if !data_set.style().highlight_enabled {
        return;
    }
    let Some(entry) = data_set.entries().get(index) else {
        return;
    };
    let x = viewport.data_to_pixel_x(entry.x);
    if !viewport.is_in_bounds_x(x) {
        return;
    }
    let bubble = data_set.bubble_style();
    let max_radius_px = viewport.content_width() * MAX_BUBBLE_RADIUS_RATIO;
    let radius = bubble_radius(entry.size, max_size, max_radius_px, bubble.normalize_size, phase);
    if radius <= 0.0 || bubble.highlight_circle_width <= 0.0 {
        return;
    }
    surface.draw_circle(CirclePrimitive::new(
        Point::new(x, viewport.data_to_pixel_y(entry.y)),
        radius + bubble.highlight_circle_width,
        Paint::stroke(BUBBLE_HIGHLIGHT_COLOR, bubble.highlight_circle_width),
    ));
}
