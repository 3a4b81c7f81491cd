use crate::core::{DataSetStyle, Point};
use crate::render::{DrawSurface, TextHAlign, TextPrimitive};

use super::axis_label_format::default_axis_label;

const VALUE_LABEL_LIFT_PX: f64 = 4.0;

/// Draws `value` centered above `anchor` when the dataset asks for values.
pub(super) fn draw_value_label(
    surface: &mut dyn DrawSurface,
    style: &DataSetStyle,
    value: f64,
    anchor: Point,
) {
    if !style.draw_values || !anchor.is_finite() {
        return;
    }
    let text = default_axis_label(value);
    let size = surface.measure_text(&text, style.value_text_size);
    surface.draw_text(TextPrimitive::new(
        text,
        anchor.x,
        anchor.y - size.height - VALUE_LABEL_LIFT_PX,
        style.value_text_size,
        style.value_text_color,
        TextHAlign::Center,
    ));
}

/// Draws `value` centered on `anchor`.
pub(super) fn draw_centered_value_label(
    surface: &mut dyn DrawSurface,
    style: &DataSetStyle,
    value: f64,
    anchor: Point,
) {
    if !style.draw_values || !anchor.is_finite() {
        return;
    }
    let text = default_axis_label(value);
    let size = surface.measure_text(&text, style.value_text_size);
    surface.draw_text(TextPrimitive::new(
        text,
        anchor.x,
        anchor.y - size.height / 2.0,
        style.value_text_size,
        style.value_text_color,
        TextHAlign::Center,
    ));
}
