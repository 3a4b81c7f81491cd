use smallvec::SmallVec;
use tracing::trace;

use crate::core::{BarData, BarDataSet, BarEntry, ChartDataSet, Point, Rect, StackRange, Viewport};
use crate::render::{Color, DrawSurface, Paint, PaintStyle, RectPrimitive};

use super::value_labels::draw_value_label;

/// Position of one dataset inside a group of side-by-side bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGroup {
    pub group_index: usize,
    pub group_count: usize,
    /// Fraction of one category unit shared by the whole group.
    pub bar_width: f64,
}

impl BarGroup {
    #[must_use]
    pub fn new(group_index: usize, group_count: usize, bar_width: f64) -> Self {
        Self {
            group_index,
            group_count: group_count.max(1),
            bar_width,
        }
    }

    #[must_use]
    pub fn single(bar_width: f64) -> Self {
        Self::new(0, 1, bar_width)
    }

    /// Pixel span `(start, end)` of this dataset's bar along the category axis,
    /// given the category center and pixels per category unit.
    #[must_use]
    pub fn span(self, center_px: f64, scale: f64) -> (f64, f64) {
        let count = self.group_count as f64;
        let bar_px = self.bar_width / count * scale;
        let start = center_px - bar_px * count / 2.0 + self.group_index as f64 * bar_px;
        (start, start + bar_px)
    }
}

/// One colored segment of a stacked bar, in data units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackSegment {
    pub stack_index: usize,
    pub from: f64,
    pub to: f64,
}

/// Segments of a stacked entry scaled by `phase`. Positive values stack up
/// from zero, negative values stack down from zero.
#[must_use]
pub fn stacked_bar_segments(entry: &BarEntry, phase: f64) -> SmallVec<[StackSegment; 4]> {
    entry
        .stack_ranges()
        .into_iter()
        .enumerate()
        .map(|(stack_index, StackRange { from, to })| StackSegment {
            stack_index,
            from: from * phase,
            to: to * phase,
        })
        .collect()
}

/// Pixel rectangle of a vertical bar spanning data `y_from..y_to`.
#[must_use]
pub fn bar_rect(viewport: &Viewport, x: f64, y_from: f64, y_to: f64, group: BarGroup) -> Rect {
    let (left, right) = group.span(viewport.data_to_pixel_x(x), viewport.scale_x());
    let from = viewport.data_to_pixel_y(y_from);
    let to = viewport.data_to_pixel_y(y_to);
    Rect::new(left, from.min(to), right, from.max(to))
}

/// Pixel rectangle of a horizontal bar; the viewport's X axis carries values
/// and its Y axis carries categories.
#[must_use]
pub fn horizontal_bar_rect(
    viewport: &Viewport,
    x: f64,
    value_from: f64,
    value_to: f64,
    group: BarGroup,
) -> Rect {
    let (top, bottom) = group.span(viewport.data_to_pixel_y(x), viewport.scale_y());
    let from = viewport.data_to_pixel_x(value_from);
    let to = viewport.data_to_pixel_x(value_to);
    Rect::new(from.min(to), top.min(bottom), from.max(to), top.max(bottom))
}

/// Draws every visible dataset of `data` side by side within each category.
pub fn draw_bar_data(surface: &mut dyn DrawSurface, data: &BarData, viewport: &Viewport, phase: f64) {
    let group_count = data.group_count();
    for (group_index, data_set) in data.visible_data_sets().enumerate() {
        let group = BarGroup::new(group_index, group_count, data.bar_width());
        draw_bars(surface, data_set, viewport, group, phase, Orientation::Vertical);
    }
}

/// Grouped horizontal bars; `viewport` must already be swapped.
pub fn draw_horizontal_bar_data(
    surface: &mut dyn DrawSurface,
    data: &BarData,
    viewport: &Viewport,
    phase: f64,
) {
    let group_count = data.group_count();
    for (group_index, data_set) in data.visible_data_sets().enumerate() {
        let group = BarGroup::new(group_index, group_count, data.bar_width());
        draw_bars(surface, data_set, viewport, group, phase, Orientation::Horizontal);
    }
}

#[derive(Clone, Copy)]
enum Orientation {
    Vertical,
    Horizontal,
}

pub fn draw_bar_data_set(
    surface: &mut dyn DrawSurface,
    data_set: &BarDataSet,
    viewport: &Viewport,
    group: BarGroup,
    phase: f64,
) {
    draw_bars(surface, data_set, viewport, group, phase, Orientation::Vertical);
}

/// Same geometry as [`draw_bar_data_set`] with the value axis horizontal.
pub fn draw_horizontal_bar_data_set(
    surface: &mut dyn DrawSurface,
    data_set: &BarDataSet,
    viewport: &Viewport,
    group: BarGroup,
    phase: f64,
) {
    draw_bars(surface, data_set, viewport, group, phase, Orientation::Horizontal);
}

fn draw_bars(
    surface: &mut dyn DrawSurface,
    data_set: &BarDataSet,
    viewport: &Viewport,
    group: BarGroup,
    phase: f64,
    orientation: Orientation,
) {
    if !data_set.is_visible() || data_set.is_empty() {
        return;
    }
    trace!(
        label = data_set.label(),
        entries = data_set.entry_count(),
        "drawing bar data set"
    );
    let content = viewport.content_rect();
    let style = data_set.style();
    let bar_style = data_set.bar_style();

    let rect_for = |x: f64, from: f64, to: f64| match orientation {
        Orientation::Vertical => bar_rect(viewport, x, from, to, group),
        Orientation::Horizontal => horizontal_bar_rect(viewport, x, from, to, group),
    };

    for (index, entry) in data_set.entries().iter().enumerate() {
        let category_span = rect_for(entry.x, 0.0, 0.0);
        let off_screen = match orientation {
            Orientation::Vertical => {
                category_span.right < content.left || category_span.left > content.right
            }
            Orientation::Horizontal => {
                category_span.bottom < content.top || category_span.top > content.bottom
            }
        };
        if off_screen {
            continue;
        }

        if entry.is_stacked() {
            for segment in stacked_bar_segments(entry, phase) {
                let rect = clamp_to_content(rect_for(entry.x, segment.from, segment.to), content);
                fill_bar(
                    surface,
                    rect,
                    data_set.stack_color(segment.stack_index),
                    bar_style.border_width,
                    bar_style.border_color,
                );
            }
        } else {
            let rect = clamp_to_content(rect_for(entry.x, 0.0, entry.y * phase), content);
            fill_bar(
                surface,
                rect,
                style.color(index),
                bar_style.border_width,
                bar_style.border_color,
            );
        }

        if style.draw_values {
            let value = entry.y * phase;
            let anchor = match orientation {
                Orientation::Vertical => Point::new(
                    viewport.data_to_pixel_x(entry.x),
                    viewport.data_to_pixel_y(value.max(0.0)),
                ),
                Orientation::Horizontal => {
                    let bar = rect_for(entry.x, 0.0, value);
                    Point::new(bar.right, bar.center().y)
                }
            };
            draw_value_label(surface, style, entry.y, anchor);
        }
    }
}

/// Keeps the zero baseline and bar ends inside the content rectangle.
fn clamp_to_content(rect: Rect, content: Rect) -> Rect {
    Rect::new(
        rect.left.clamp(content.left, content.right),
        rect.top.clamp(content.top, content.bottom),
        rect.right.clamp(content.left, content.right),
        rect.bottom.clamp(content.top, content.bottom),
    )
}

fn fill_bar(
    surface: &mut dyn DrawSurface,
    rect: Rect,
    color: Color,
    border_width: f64,
    border_color: Color,
) {
    let paint = if border_width > 0.0 {
        Paint {
            style: PaintStyle::FillAndStroke,
            stroke_width: border_width,
            ..Paint::fill(color)
        }
        .with_stroke_color(border_color)
    } else {
        Paint::fill(color)
    };
    surface.draw_rect(RectPrimitive::from_rect(rect, paint));
}
