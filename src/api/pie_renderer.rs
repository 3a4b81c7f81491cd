use tracing::trace;

use crate::core::{ChartDataSet, PieDataSet, Point};
use crate::render::{ArcPrimitive, Color, DrawSurface, Paint};

use super::value_labels::draw_centered_value_label;

/// Angular placement of one drawn slice, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub index: usize,
    /// Angle the slice occupies before the slice gap is removed.
    pub slice_angle: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub color: Color,
}

impl PieSlice {
    #[must_use]
    pub fn mid_angle(self) -> f64 {
        self.start_angle + self.sweep_angle / 2.0
    }
}

/// Slices laid out consecutively from `rotation_deg`; each slice is inset by
/// half the slice gap on both edges. Empty when the values sum to zero.
#[must_use]
pub fn pie_slices(data_set: &PieDataSet, rotation_deg: f64, phase: f64) -> Vec<PieSlice> {
    let sum = data_set.value_sum();
    if sum == 0.0 || !sum.is_finite() {
        trace!(label = data_set.label(), "pie value sum is zero, nothing to draw");
        return Vec::new();
    }
    let space = data_set.pie_style().slice_space.max(0.0);
    let mut angle = rotation_deg;
    let mut slices = Vec::with_capacity(data_set.entry_count());
    for (index, entry) in data_set.entries().iter().enumerate() {
        let slice_angle = entry.value / sum * 360.0 * phase;
        if slice_angle > 0.0 {
            let sweep_angle = slice_angle - space;
            if sweep_angle > 0.0 {
                slices.push(PieSlice {
                    index,
                    slice_angle,
                    start_angle: angle + space / 2.0,
                    sweep_angle,
                    color: data_set.style().color(index),
                });
            }
        }
        angle += slice_angle;
    }
    slices
}

pub fn draw_pie_data_set(
    surface: &mut dyn DrawSurface,
    data_set: &PieDataSet,
    center: Point,
    radius: f64,
    rotation_deg: f64,
    phase: f64,
) {
    if !data_set.is_visible() || data_set.is_empty() || radius <= 0.0 {
        return;
    }
    trace!(
        label = data_set.label(),
        entries = data_set.entry_count(),
        "drawing pie data set"
    );
    let slices = pie_slices(data_set, rotation_deg, phase);
    for slice in &slices {
        surface.draw_arc(ArcPrimitive::new(
            center,
            radius,
            slice.start_angle,
            slice.sweep_angle,
            true,
            Paint::fill(slice.color),
        ));
    }

    let style = data_set.style();
    if style.draw_values {
        for slice in &slices {
            let value = data_set.entries()[slice.index].value;
            let anchor = center.polar_offset(radius * 0.7, slice.mid_angle());
            draw_centered_value_label(surface, style, value, anchor);
        }
    }
}

/// Redraws slice `index` pushed outward along its angular midpoint.
pub fn draw_pie_highlight(
    surface: &mut dyn DrawSurface,
    data_set: &PieDataSet,
    center: Point,
    radius: f64,
    rotation_deg: f64,
    phase: f64,
    index: usize,
) {
    if !data_set.style().highlight_enabled || radius <= 0.0 {
        return;
    }
    let Some(slice) = pie_slices(data_set, rotation_deg, phase)
        .into_iter()
        .find(|slice| slice.index == index)
    else {
        return;
    };
    let shifted = center.polar_offset(data_set.pie_style().selection_shift, slice.mid_angle());
    surface.draw_arc(ArcPrimitive::new(
        shifted,
        radius,
        slice.start_angle,
        slice.sweep_angle,
        true,
        Paint::fill(slice.color),
    ));
}
