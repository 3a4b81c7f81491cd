use smallvec::{SmallVec, smallvec};
use tracing::trace;

use crate::core::{Point, Viewport};
use crate::render::{DrawSurface, LinePrimitive, TextHAlign, TextPrimitive};

use super::axis_config::{
    AxisConfig, AxisSide, LimitLabelPosition, LimitLineConfig, XAxisConfig, XAxisPosition,
    YAxisConfig, YAxisLabelPosition,
};
use super::axis_ticks::{AXIS_LABEL_MIN_GAP_PX, AxisLabelSlot, compute_axis_values, select_non_overlapping};

/// Gap between the content edge and X tick labels.
const X_LABEL_OFFSET_PX: f64 = 4.0;
/// Gap between the content edge and Y tick labels.
const Y_LABEL_OFFSET_PX: f64 = 8.0;
const LIMIT_LABEL_MARGIN_PX: f64 = 4.0;
const LIMIT_LABEL_LIFT_PX: f64 = 2.0;

/// Tick values an axis shows for `min..max`; a zero-width range yields one tick.
#[must_use]
pub fn axis_tick_values(config: &AxisConfig, min: f64, max: f64) -> Vec<f64> {
    let mut values = compute_axis_values(min, max, config.effective_label_count());
    values.dedup();
    values
}

/// Vertical gridlines, the X axis line(s) and the X tick labels.
pub fn draw_x_axis(surface: &mut dyn DrawSurface, viewport: &Viewport, config: &XAxisConfig) {
    let axis = &config.axis;
    if !axis.enabled {
        return;
    }
    let content = viewport.content_rect();
    let values = axis_tick_values(axis, viewport.x_min(), viewport.x_max());

    if axis.draw_grid_lines {
        for value in &values {
            let x = viewport.data_to_pixel_x(*value);
            if !viewport.is_in_bounds_x(x) {
                continue;
            }
            surface.draw_line(
                LinePrimitive::new(x, content.top, x, content.bottom, axis.grid_line_width, axis.grid_color)
                    .with_dash(axis.grid_dash.clone()),
            );
        }
    }

    if axis.draw_axis_line {
        if config.position.draws_top() {
            surface.draw_line(LinePrimitive::new(
                content.left,
                content.top,
                content.right,
                content.top,
                axis.axis_line_width,
                axis.axis_line_color,
            ));
        }
        if config.position.draws_bottom() {
            surface.draw_line(LinePrimitive::new(
                content.left,
                content.bottom,
                content.right,
                content.bottom,
                axis.axis_line_width,
                axis.axis_line_color,
            ));
        }
    }

    if !axis.draw_labels {
        return;
    }

    let mut slots = Vec::with_capacity(values.len());
    let mut label_height: f64 = 0.0;
    for value in values {
        let x = viewport.data_to_pixel_x(value);
        if !viewport.is_in_bounds_x(x) {
            continue;
        }
        let text = axis.format_label(value);
        if text.is_empty() {
            continue;
        }
        let size = surface.measure_text(&text, axis.text_size);
        label_height = label_height.max(size.height);
        let mut slot = AxisLabelSlot::new(value, text, x, size.width);
        if config.avoid_first_last_clipping {
            if slot.start < content.left {
                slot.end += content.left - slot.start;
                slot.start = content.left;
            }
            if slot.end > content.right {
                slot.start -= slot.end - content.right;
                slot.end = content.right;
            }
        }
        slots.push(slot);
    }
    let total = slots.len();
    let selected = select_non_overlapping(slots, AXIS_LABEL_MIN_GAP_PX);
    if selected.len() < total {
        trace!(
            dropped = total - selected.len(),
            "x axis labels dropped to avoid overlap"
        );
    }

    let above = content.top - label_height - X_LABEL_OFFSET_PX;
    let below = content.bottom + X_LABEL_OFFSET_PX;
    let rows: SmallVec<[f64; 2]> = match config.position {
        XAxisPosition::Top => smallvec![above],
        XAxisPosition::Bottom => smallvec![below],
        XAxisPosition::TopInside => smallvec![content.top + X_LABEL_OFFSET_PX],
        XAxisPosition::BottomInside => {
            smallvec![content.bottom - label_height - X_LABEL_OFFSET_PX]
        }
        XAxisPosition::BothSided => smallvec![above, below],
    };
    for slot in &selected {
        let center = (slot.start + slot.end) / 2.0;
        for top in &rows {
            surface.draw_text(TextPrimitive::new(
                slot.text.clone(),
                center,
                *top,
                axis.text_size,
                axis.text_color,
                TextHAlign::Center,
            ));
        }
    }
}

/// Horizontal gridlines, the axis line, the zero line and the Y tick labels
/// for the axis on `side`.
pub fn draw_y_axis(
    surface: &mut dyn DrawSurface,
    viewport: &Viewport,
    config: &YAxisConfig,
    side: AxisSide,
) {
    let axis = &config.axis;
    if !axis.enabled {
        return;
    }
    let content = viewport.content_rect();
    let values = axis_tick_values(axis, viewport.y_min(), viewport.y_max());

    if axis.draw_grid_lines {
        for value in &values {
            let y = viewport.data_to_pixel_y(*value);
            if !viewport.is_in_bounds_y(y) {
                continue;
            }
            surface.draw_line(
                LinePrimitive::new(content.left, y, content.right, y, axis.grid_line_width, axis.grid_color)
                    .with_dash(axis.grid_dash.clone()),
            );
        }
    }

    if config.draw_zero_line {
        let y = viewport.data_to_pixel_y(0.0);
        if viewport.is_in_bounds_y(y) {
            surface.draw_line(LinePrimitive::new(
                content.left,
                y,
                content.right,
                y,
                config.zero_line_width,
                config.zero_line_color,
            ));
        }
    }

    if axis.draw_axis_line {
        let x = match side {
            AxisSide::Left => content.left,
            AxisSide::Right => content.right,
        };
        surface.draw_line(LinePrimitive::new(
            x,
            content.top,
            x,
            content.bottom,
            axis.axis_line_width,
            axis.axis_line_color,
        ));
    }

    if !axis.draw_labels {
        return;
    }

    let (anchor_x, h_align) = match (side, config.label_position) {
        (AxisSide::Left, YAxisLabelPosition::OutsideChart) => {
            (content.left - Y_LABEL_OFFSET_PX, TextHAlign::Right)
        }
        (AxisSide::Left, YAxisLabelPosition::InsideChart) => {
            (content.left + Y_LABEL_OFFSET_PX, TextHAlign::Left)
        }
        (AxisSide::Right, YAxisLabelPosition::OutsideChart) => {
            (content.right + Y_LABEL_OFFSET_PX, TextHAlign::Left)
        }
        (AxisSide::Right, YAxisLabelPosition::InsideChart) => {
            (content.right - Y_LABEL_OFFSET_PX, TextHAlign::Right)
        }
    };

    let mut slots = Vec::with_capacity(values.len());
    for value in values {
        let y = viewport.data_to_pixel_y(value);
        if !viewport.is_in_bounds_y(y) {
            continue;
        }
        let text = axis.format_label(value);
        if text.is_empty() {
            continue;
        }
        let size = surface.measure_text(&text, axis.text_size);
        slots.push(AxisLabelSlot::new(value, text, y, size.height));
    }
    let total = slots.len();
    let selected = select_non_overlapping(slots, 0.0);
    if selected.len() < total {
        trace!(
            dropped = total - selected.len(),
            ?side,
            "y axis labels dropped to avoid overlap"
        );
    }

    for slot in selected {
        surface.draw_text(TextPrimitive::new(
            slot.text,
            anchor_x,
            slot.start,
            axis.text_size,
            axis.text_color,
            h_align,
        ));
    }
}

/// Vertical limit lines at fixed X values.
pub fn draw_x_limit_lines(surface: &mut dyn DrawSurface, viewport: &Viewport, config: &AxisConfig) {
    if !config.enabled {
        return;
    }
    let content = viewport.content_rect();
    for limit in config.limit_lines.iter().filter(|limit| limit.enabled) {
        let x = viewport.data_to_pixel_x(limit.value);
        if !viewport.is_in_bounds_x(x) {
            continue;
        }
        draw_limit_rule(
            surface,
            limit,
            Point::new(x, content.top),
            Point::new(x, content.bottom),
        );
        if limit.label.is_empty() {
            continue;
        }
        let size = surface.measure_text(&limit.label, limit.text_size);
        let left = match limit.label_position {
            LimitLabelPosition::RightTop | LimitLabelPosition::RightBottom => {
                x + LIMIT_LABEL_MARGIN_PX
            }
            LimitLabelPosition::LeftTop | LimitLabelPosition::LeftBottom => {
                x - size.width - LIMIT_LABEL_MARGIN_PX
            }
        };
        let top = match limit.label_position {
            LimitLabelPosition::RightTop | LimitLabelPosition::LeftTop => {
                content.top + LIMIT_LABEL_LIFT_PX
            }
            LimitLabelPosition::RightBottom | LimitLabelPosition::LeftBottom => {
                content.bottom - size.height - LIMIT_LABEL_LIFT_PX
            }
        };
        draw_limit_label(surface, limit, left, top);
    }
}

/// Horizontal limit lines at fixed Y values.
pub fn draw_y_limit_lines(surface: &mut dyn DrawSurface, viewport: &Viewport, config: &AxisConfig) {
    if !config.enabled {
        return;
    }
    let content = viewport.content_rect();
    for limit in config.limit_lines.iter().filter(|limit| limit.enabled) {
        let y = viewport.data_to_pixel_y(limit.value);
        if !viewport.is_in_bounds_y(y) {
            continue;
        }
        draw_limit_rule(
            surface,
            limit,
            Point::new(content.left, y),
            Point::new(content.right, y),
        );
        if limit.label.is_empty() {
            continue;
        }
        let size = surface.measure_text(&limit.label, limit.text_size);
        let left = match limit.label_position {
            LimitLabelPosition::RightTop | LimitLabelPosition::RightBottom => {
                content.right - size.width - LIMIT_LABEL_MARGIN_PX
            }
            LimitLabelPosition::LeftTop | LimitLabelPosition::LeftBottom => {
                content.left + LIMIT_LABEL_MARGIN_PX
            }
        };
        let top = match limit.label_position {
            LimitLabelPosition::RightTop | LimitLabelPosition::LeftTop => {
                y - size.height - LIMIT_LABEL_LIFT_PX
            }
            LimitLabelPosition::RightBottom | LimitLabelPosition::LeftBottom => {
                y + LIMIT_LABEL_LIFT_PX
            }
        };
        draw_limit_label(surface, limit, left, top);
    }
}

fn draw_limit_rule(surface: &mut dyn DrawSurface, limit: &LimitLineConfig, from: Point, to: Point) {
    if limit.line_width <= 0.0 {
        return;
    }
    surface.draw_line(
        LinePrimitive::between(from, to, limit.line_width, limit.line_color)
            .with_dash(limit.dash.clone()),
    );
}

fn draw_limit_label(surface: &mut dyn DrawSurface, limit: &LimitLineConfig, left: f64, top: f64) {
    surface.draw_text(TextPrimitive::new(
        limit.label.clone(),
        left,
        top,
        limit.text_size,
        limit.text_color,
        TextHAlign::Left,
    ));
}
