use tracing::trace;

use crate::core::{ChartDataSet, Point, ScatterDataSet, ScatterShape, Viewport};
use crate::render::{
    CirclePrimitive, Color, DrawSurface, LinePrimitive, Paint, PathPrimitive, RectPrimitive,
};

use super::value_labels::draw_value_label;

/// Draws one glyph per entry centered on its projected point.
pub fn draw_scatter_data_set(
    surface: &mut dyn DrawSurface,
    data_set: &ScatterDataSet,
    viewport: &Viewport,
    phase: f64,
) {
    if !data_set.is_visible() || data_set.is_empty() {
        return;
    }
    trace!(
        label = data_set.label(),
        entries = data_set.entry_count(),
        "drawing scatter data set"
    );
    let style = data_set.style();
    let scatter = data_set.scatter_style();
    if scatter.size <= 0.0 {
        return;
    }
    for (index, entry) in data_set.entries().iter().enumerate() {
        let x = viewport.data_to_pixel_x(entry.x);
        if !viewport.is_in_bounds_x(x) {
            continue;
        }
        let center = Point::new(x, viewport.data_to_pixel_y(entry.y * phase));
        if !viewport.is_in_bounds_y(center.y) {
            continue;
        }
        draw_glyph(
            surface,
            scatter.shape,
            center,
            scatter.size,
            style.color(index),
            scatter.hole_radius,
            scatter.hole_color,
        );
        draw_value_label(surface, style, entry.y, Point::new(center.x, center.y - scatter.size / 2.0));
    }
}

/// Draws a single scatter glyph; used by the renderer and by legends that
/// want a matching swatch.
pub fn draw_glyph(
    surface: &mut dyn DrawSurface,
    shape: ScatterShape,
    center: Point,
    size: f64,
    color: Color,
    hole_radius: f64,
    hole_color: Color,
) {
    let half = size / 2.0;
    let stroke_width = size / 4.0;
    let (cx, cy) = (center.x, center.y);
    match shape {
        ScatterShape::Circle => {
            surface.draw_circle(CirclePrimitive::new(center, half, Paint::fill(color)));
            if hole_radius > 0.0 && hole_radius < half {
                surface.draw_circle(CirclePrimitive::new(center, hole_radius, Paint::fill(hole_color)));
            }
        }
        ScatterShape::Square => {
            surface.draw_rect(RectPrimitive::new(cx - half, cy - half, size, size, Paint::fill(color)));
            if hole_radius > 0.0 && hole_radius < half {
                surface.draw_rect(RectPrimitive::new(
                    cx - hole_radius,
                    cy - hole_radius,
                    hole_radius * 2.0,
                    hole_radius * 2.0,
                    Paint::fill(hole_color),
                ));
            }
        }
        ScatterShape::Triangle => {
            surface.draw_path(PathPrimitive::polygon(
                &[
                    Point::new(cx, cy - half),
                    Point::new(cx + half, cy + half),
                    Point::new(cx - half, cy + half),
                ],
                Paint::fill(color),
            ));
        }
        ScatterShape::Cross => {
            surface.draw_line(LinePrimitive::new(cx - half, cy, cx + half, cy, stroke_width, color));
            surface.draw_line(LinePrimitive::new(cx, cy - half, cx, cy + half, stroke_width, color));
        }
        ScatterShape::X => {
            surface.draw_line(LinePrimitive::new(
                cx - half,
                cy - half,
                cx + half,
                cy + half,
                stroke_width,
                color,
            ));
            surface.draw_line(LinePrimitive::new(
                cx + half,
                cy - half,
                cx - half,
                cy + half,
                stroke_width,
                color,
            ));
        }
        ScatterShape::ChevronUp | ScatterShape::ChevronDown => {
            let tip_y = if shape == ScatterShape::ChevronUp {
                cy - half
            } else {
                cy + half
            };
            let mut path = PathPrimitive::with_capacity(4, Paint::stroke(color, stroke_width));
            path.move_to(Point::new(cx, tip_y));
            path.line_to(Point::new(cx + half, cy));
            path.move_to(Point::new(cx, tip_y));
            path.line_to(Point::new(cx - half, cy));
            surface.draw_path(path);
        }
    }
}
