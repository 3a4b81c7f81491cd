use tracing::trace;

use crate::core::{CandleDataSet, ChartDataSet, Point, Viewport};
use crate::render::{Color, DrawSurface, LinePrimitive, Paint, PaintStyle, RectPrimitive};

use super::value_labels::draw_value_label;

/// Bodies shorter than this are stretched so flat candles stay visible.
pub const MIN_CANDLE_BODY_PX: f64 = 1.0;
/// Outline width of stroked bodies when the shadow width is zero.
pub const FALLBACK_BODY_STROKE_PX: f64 = 1.0;

/// Pixel geometry of one candle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandleGeometry {
    pub index: usize,
    pub center_x: f64,
    pub half_width: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub body_top: f64,
    pub body_bottom: f64,
    pub open_y: f64,
    pub close_y: f64,
    pub body_color: Color,
    pub body_style: PaintStyle,
}

/// Projects every candle inside the X bounds; prices are scaled by `phase`.
#[must_use]
pub fn project_candles(data_set: &CandleDataSet, viewport: &Viewport, phase: f64) -> Vec<CandleGeometry> {
    let candle = data_set.candle_style();
    let half_width = viewport.scale_x() * (1.0 - candle.bar_space.clamp(0.0, 1.0)) / 2.0;
    let mut projected = Vec::with_capacity(data_set.entry_count());
    for (index, entry) in data_set.entries().iter().enumerate() {
        let center_x = viewport.data_to_pixel_x(entry.x);
        if !viewport.is_in_bounds_x(center_x) {
            continue;
        }
        let high = viewport.data_to_pixel_y(entry.high * phase);
        let low = viewport.data_to_pixel_y(entry.low * phase);
        let open_y = viewport.data_to_pixel_y(entry.open * phase);
        let close_y = viewport.data_to_pixel_y(entry.close * phase);
        let body_top = open_y.min(close_y);
        let mut body_bottom = open_y.max(close_y);
        if body_bottom - body_top < MIN_CANDLE_BODY_PX {
            body_bottom = body_top + MIN_CANDLE_BODY_PX;
        }
        let (body_color, body_style) = data_set.body_paint(*entry);
        projected.push(CandleGeometry {
            index,
            center_x,
            half_width,
            wick_top: high.min(low),
            wick_bottom: high.max(low),
            body_top,
            body_bottom,
            open_y,
            close_y,
            body_color,
            body_style,
        });
    }
    projected
}

/// Draws the wick of every candle, then its body (or open/close ticks when
/// bodies are hidden).
pub fn draw_candle_data_set(
    surface: &mut dyn DrawSurface,
    data_set: &CandleDataSet,
    viewport: &Viewport,
    phase: f64,
) {
    if !data_set.is_visible() || data_set.is_empty() {
        return;
    }
    trace!(
        label = data_set.label(),
        entries = data_set.entry_count(),
        "drawing candle data set"
    );
    let style = data_set.style();
    let candle = data_set.candle_style();
    let shadow_width = candle.shadow_width;
    // Stroked bodies keep their outline when shadows are switched off.
    let body_stroke_width = if shadow_width > 0.0 {
        shadow_width
    } else {
        FALLBACK_BODY_STROKE_PX
    };

    for geometry in project_candles(data_set, viewport, phase) {
        let shadow_color = data_set.shadow_color(geometry.body_color);
        if shadow_width > 0.0 {
            surface.draw_line(LinePrimitive::new(
                geometry.center_x,
                geometry.wick_top,
                geometry.center_x,
                geometry.wick_bottom,
                shadow_width,
                shadow_color,
            ));
        }

        if candle.show_candle_bar {
            let paint = match geometry.body_style {
                PaintStyle::Fill => Paint::fill(geometry.body_color),
                PaintStyle::Stroke => Paint::stroke(geometry.body_color, body_stroke_width),
                PaintStyle::FillAndStroke => Paint {
                    style: PaintStyle::FillAndStroke,
                    stroke_width: body_stroke_width,
                    ..Paint::fill(geometry.body_color)
                },
            };
            surface.draw_rect(RectPrimitive::from_edges(
                geometry.center_x - geometry.half_width,
                geometry.body_top,
                geometry.center_x + geometry.half_width,
                geometry.body_bottom,
                paint,
            ));
        } else if shadow_width > 0.0 {
            surface.draw_line(LinePrimitive::new(
                geometry.center_x - geometry.half_width,
                geometry.open_y,
                geometry.center_x,
                geometry.open_y,
                shadow_width,
                geometry.body_color,
            ));
            surface.draw_line(LinePrimitive::new(
                geometry.center_x,
                geometry.close_y,
                geometry.center_x + geometry.half_width,
                geometry.close_y,
                shadow_width,
                geometry.body_color,
            ));
        }

        if style.draw_values {
            let entry = data_set.entries()[geometry.index];
            draw_value_label(
                surface,
                style,
                entry.high,
                Point::new(geometry.center_x, geometry.wick_top),
            );
        }
    }
}
