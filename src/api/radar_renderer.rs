use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{ChartDataSet, Point, RadarDataSet};
use crate::render::{Color, DrawSurface, LinePrimitive, Paint, PathPrimitive, TextHAlign, TextPrimitive};

use super::value_labels::draw_centered_value_label;

/// Radar needs at least a triangle to form a polygon.
pub const MIN_RADAR_AXES: usize = 3;
/// Distance between the outer ring and the axis labels.
pub const RADAR_LABEL_OFFSET_PX: f64 = 16.0;

/// Background web: spokes from the center plus concentric rings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarWebStyle {
    pub enabled: bool,
    pub color: Color,
    pub inner_color: Color,
    pub alpha: f64,
    /// Spoke width.
    pub line_width: f64,
    /// Ring width.
    pub inner_line_width: f64,
    pub ring_count: usize,
    /// Spokes skipped between two drawn spokes.
    pub skip_line_count: usize,
}

impl Default for RadarWebStyle {
    fn default() -> Self {
        let web = Color::from_argb_hex(0xFF7A_7A7A);
        Self {
            enabled: true,
            color: web,
            inner_color: web,
            alpha: 150.0 / 255.0,
            line_width: 1.5,
            inner_line_width: 0.75,
            ring_count: 5,
            skip_line_count: 0,
        }
    }
}

/// Polar frame shared by the web, the labels and every dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    pub center: Point,
    pub radius: f64,
    pub rotation_deg: f64,
    pub axis_count: usize,
}

impl RadarGeometry {
    #[must_use]
    pub fn new(center: Point, radius: f64, rotation_deg: f64, axis_count: usize) -> Self {
        Self {
            center,
            radius,
            rotation_deg,
            axis_count,
        }
    }

    /// Ray angle of axis `index`, in degrees.
    #[must_use]
    pub fn axis_angle(self, index: usize) -> f64 {
        self.rotation_deg + index as f64 * 360.0 / self.axis_count as f64
    }

    #[must_use]
    pub fn point_on_axis(self, index: usize, distance: f64) -> Point {
        self.center.polar_offset(distance, self.axis_angle(index))
    }

    fn is_drawable(self) -> bool {
        self.axis_count >= MIN_RADAR_AXES && self.radius > 0.0
    }
}

/// Polygon vertices of a dataset: value `v` on axis `i` lands at
/// `v * phase / max_value * radius` along the ray at
/// `rotation + i * 360 / axis_count`.
#[must_use]
pub fn radar_vertices(
    data_set: &RadarDataSet,
    geometry: RadarGeometry,
    max_value: f64,
    phase: f64,
) -> Vec<Point> {
    if max_value <= 0.0 || !max_value.is_finite() || !geometry.is_drawable() {
        return Vec::new();
    }
    data_set
        .entries()
        .iter()
        .take(geometry.axis_count)
        .enumerate()
        .map(|(index, entry)| {
            geometry.point_on_axis(index, entry.value * phase / max_value * geometry.radius)
        })
        .collect()
}

/// Draws the closed polygon of one dataset, filled first when configured.
pub fn draw_radar_data_set(
    surface: &mut dyn DrawSurface,
    data_set: &RadarDataSet,
    geometry: RadarGeometry,
    max_value: f64,
    phase: f64,
) {
    if !data_set.is_visible() || data_set.is_empty() {
        return;
    }
    if max_value <= 0.0 || geometry.axis_count < MIN_RADAR_AXES {
        trace!(
            label = data_set.label(),
            max_value,
            axis_count = geometry.axis_count,
            "radar data set has nothing to draw"
        );
        return;
    }
    let vertices = radar_vertices(data_set, geometry, max_value, phase);
    if vertices.is_empty() {
        return;
    }
    trace!(
        label = data_set.label(),
        vertices = vertices.len(),
        "drawing radar data set"
    );
    let style = data_set.style();
    let radar = data_set.radar_style();
    if radar.draw_filled {
        surface.draw_path(PathPrimitive::polygon(
            &vertices,
            Paint::fill(radar.fill_color.with_alpha(radar.fill_alpha)),
        ));
    }
    if radar.line_width > 0.0 {
        surface.draw_path(PathPrimitive::polygon(
            &vertices,
            Paint::stroke(style.first_color(), radar.line_width),
        ));
    }
    if style.draw_values {
        for (entry, vertex) in data_set.entries().iter().zip(&vertices) {
            draw_centered_value_label(surface, style, entry.value, *vertex);
        }
    }
}

/// Draws spokes and rings behind the datasets. No-op below three axes.
pub fn draw_radar_web(surface: &mut dyn DrawSurface, geometry: RadarGeometry, web: &RadarWebStyle) {
    if !web.enabled || !geometry.is_drawable() {
        return;
    }
    let step = web.skip_line_count.saturating_add(1);
    if web.line_width > 0.0 {
        let color = web.color.with_alpha(web.alpha);
        for index in (0..geometry.axis_count).step_by(step) {
            let tip = geometry.point_on_axis(index, geometry.radius);
            surface.draw_line(LinePrimitive::between(geometry.center, tip, web.line_width, color));
        }
    }
    if web.inner_line_width > 0.0 {
        let color = web.inner_color.with_alpha(web.alpha);
        for ring in 1..=web.ring_count {
            let ring_radius = geometry.radius * ring as f64 / web.ring_count as f64;
            let corners: Vec<Point> = (0..geometry.axis_count)
                .map(|index| geometry.point_on_axis(index, ring_radius))
                .collect();
            surface.draw_path(PathPrimitive::polygon(
                &corners,
                Paint::stroke(color, web.inner_line_width),
            ));
        }
    }
}

/// Axis labels centered just outside the outer ring.
pub fn draw_radar_labels(
    surface: &mut dyn DrawSurface,
    geometry: RadarGeometry,
    labels: &[String],
    text_size: f64,
    text_color: Color,
) {
    if geometry.axis_count < MIN_RADAR_AXES {
        return;
    }
    for (index, label) in labels.iter().take(geometry.axis_count).enumerate() {
        if label.is_empty() {
            continue;
        }
        let anchor = geometry.point_on_axis(index, geometry.radius + RADAR_LABEL_OFFSET_PX);
        let size = surface.measure_text(label, text_size);
        surface.draw_text(TextPrimitive::new(
            label.clone(),
            anchor.x,
            anchor.y - size.height / 2.0,
            text_size,
            text_color,
            TextHAlign::Center,
        ));
    }
}
