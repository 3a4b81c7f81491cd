use tracing::trace;

use crate::core::{BarDataSet, ChartDataSet, Point, Rect};
use crate::render::{
    CirclePrimitive, Color, DrawSurface, LineCap, LinePrimitive, Paint, RectPrimitive, TextHAlign,
    TextPrimitive,
};

use super::legend_config::{
    LegendConfig, LegendEntry, LegendForm, LegendHorizontalAlignment, LegendOrientation,
    LegendVerticalAlignment,
};

/// Margin between the legend block and the chart edge.
pub const LEGEND_EDGE_MARGIN_PX: f64 = 8.0;

/// One entry placed by [`layout_legend`].
#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub label: String,
    /// Resolved swatch; never `LegendForm::Default`.
    pub form: LegendForm,
    pub color: Color,
    pub form_size: f64,
    pub form_line_width: f64,
    pub row: usize,
    /// Left edge of the swatch (or of the label when there is no swatch).
    pub x: f64,
    /// Vertical center of the row.
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
    pub text_x: f64,
    pub text_top: f64,
}

impl LegendItem {
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.x,
            self.center_y - self.height / 2.0,
            self.x + self.width,
            self.center_y + self.height / 2.0,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegendLayout {
    pub items: Vec<LegendItem>,
    pub row_count: usize,
    /// Entries that did not fit within `max_rows`.
    pub dropped: usize,
}

/// One entry per visible dataset, colored with the dataset's first color and
/// drawn with the legend-wide form.
#[must_use]
pub fn build_entries<D: ChartDataSet>(data_sets: &[D]) -> Vec<LegendEntry> {
    data_sets
        .iter()
        .filter(|data_set| data_set.is_visible())
        .map(|data_set| {
            LegendEntry::new(
                data_set.label(),
                LegendForm::Default,
                data_set.style().first_color(),
            )
        })
        .collect()
}

/// Like [`build_entries`], except that a stacked dataset with stack labels
/// lists one entry per segment followed by a formless entry with its label.
#[must_use]
pub fn bar_legend_entries(data_sets: &[BarDataSet]) -> Vec<LegendEntry> {
    let mut entries = Vec::new();
    for data_set in data_sets.iter().filter(|data_set| data_set.is_visible()) {
        let labels = &data_set.bar_style().stack_labels;
        if !data_set.is_stacked() || labels.is_empty() {
            entries.extend(build_entries(std::slice::from_ref(data_set)));
            continue;
        }
        entries.extend((0..data_set.stack_size()).map(|stack_index| {
            LegendEntry::new(
                labels[stack_index % labels.len()].clone(),
                LegendForm::Default,
                data_set.stack_color(stack_index),
            )
        }));
        entries.push(LegendEntry::new(
            data_set.label(),
            LegendForm::None,
            data_set.style().first_color(),
        ));
    }
    entries
}

/// Custom entries replace the automatic ones; extra entries are appended.
#[must_use]
pub fn resolve_entries(config: &LegendConfig, auto_entries: Vec<LegendEntry>) -> Vec<LegendEntry> {
    let mut entries = if config.custom_entries.is_empty() {
        auto_entries
    } else {
        config.custom_entries.clone()
    };
    entries.extend(config.extra_entries.iter().cloned());
    entries
}

struct Measured {
    entry_index: usize,
    form: LegendForm,
    form_size: f64,
    form_line_width: f64,
    /// Swatch width plus the swatch-to-text gap.
    lead: f64,
    text_width: f64,
    text_height: f64,
}

impl Measured {
    fn width(&self) -> f64 {
        self.lead + self.text_width
    }

    fn height(&self) -> f64 {
        self.text_height.max(self.form_size)
    }
}

fn resolve_form(config: &LegendConfig, form: LegendForm) -> LegendForm {
    match form {
        LegendForm::Default => match config.form {
            LegendForm::Default => LegendForm::Square,
            other => other,
        },
        other => other,
    }
}

/// Places entries inside `bounds` without drawing anything.
///
/// Horizontal legends wrap greedily: an entry moves to a new row when it
/// would cross the right margin and the current row already holds an entry.
/// Vertical legends stack one entry per row.
#[must_use]
pub fn layout_legend(
    config: &LegendConfig,
    entries: &[LegendEntry],
    bounds: Rect,
    surface: &dyn DrawSurface,
) -> LegendLayout {
    if !config.enabled || entries.is_empty() {
        return LegendLayout::default();
    }

    let measured: Vec<Measured> = entries
        .iter()
        .enumerate()
        .map(|(entry_index, entry)| {
            let form = resolve_form(config, entry.form);
            let form_size = entry.form_size.unwrap_or(config.form_size).max(0.0);
            let lead = if form == LegendForm::None {
                0.0
            } else {
                form_size + config.form_to_text_space
            };
            let text = surface.measure_text(&entry.label, config.text_size);
            Measured {
                entry_index,
                form,
                form_size: if form == LegendForm::None { 0.0 } else { form_size },
                form_line_width: entry.form_line_width.unwrap_or(config.form_line_width),
                lead,
                text_width: text.width,
                text_height: text.height,
            }
        })
        .collect();

    let row_start = bounds.left + LEGEND_EDGE_MARGIN_PX;
    let row_limit = bounds.right - LEGEND_EDGE_MARGIN_PX;

    // Rows hold indices into `measured`.
    let mut rows: Vec<Vec<usize>> = Vec::new();
    match config.orientation {
        LegendOrientation::Horizontal => {
            let mut cursor = row_start;
            let mut current: Vec<usize> = Vec::new();
            for (index, item) in measured.iter().enumerate() {
                if !current.is_empty() && cursor + item.width() > row_limit {
                    rows.push(std::mem::take(&mut current));
                    cursor = row_start;
                }
                current.push(index);
                cursor += item.width() + config.x_entry_space;
            }
            if !current.is_empty() {
                rows.push(current);
            }
        }
        LegendOrientation::Vertical => {
            rows.extend((0..measured.len()).map(|index| vec![index]));
        }
    }

    let mut dropped = 0;
    if rows.len() > config.max_rows {
        dropped = rows[config.max_rows..].iter().map(Vec::len).sum();
        trace!(
            rows = rows.len(),
            max_rows = config.max_rows,
            dropped,
            "legend rows truncated"
        );
        rows.truncate(config.max_rows);
    }

    let row_heights: Vec<f64> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|index| measured[*index].height())
                .fold(0.0, f64::max)
        })
        .collect();
    let total_height = row_heights.iter().sum::<f64>()
        + config.y_entry_space * rows.len().saturating_sub(1) as f64;

    let mut top = match config.vertical_alignment {
        LegendVerticalAlignment::Top => bounds.top + LEGEND_EDGE_MARGIN_PX,
        LegendVerticalAlignment::Center => bounds.center().y - total_height / 2.0,
        LegendVerticalAlignment::Bottom => bounds.bottom - LEGEND_EDGE_MARGIN_PX - total_height,
    };

    let mut items = Vec::with_capacity(measured.len());
    for (row_index, (row, row_height)) in rows.iter().zip(&row_heights).enumerate() {
        let row_width = row.iter().map(|index| measured[*index].width()).sum::<f64>()
            + config.x_entry_space * row.len().saturating_sub(1) as f64;
        let mut x = match config.horizontal_alignment {
            LegendHorizontalAlignment::Left => row_start,
            LegendHorizontalAlignment::Center => bounds.center().x - row_width / 2.0,
            LegendHorizontalAlignment::Right => row_limit - row_width,
        };
        let center_y = top + row_height / 2.0;
        for index in row {
            let item = &measured[*index];
            let entry = &entries[item.entry_index];
            items.push(LegendItem {
                label: entry.label.clone(),
                form: item.form,
                color: entry.color.unwrap_or(config.text_color),
                form_size: item.form_size,
                form_line_width: item.form_line_width,
                row: row_index,
                x,
                center_y,
                width: item.width(),
                height: item.height(),
                text_x: x + item.lead,
                text_top: center_y - item.text_height / 2.0,
            });
            x += item.width() + config.x_entry_space;
        }
        top += row_height + config.y_entry_space;
    }

    LegendLayout {
        items,
        row_count: rows.len(),
        dropped,
    }
}

/// Lays out and draws the legend.
pub fn draw_legend(
    surface: &mut dyn DrawSurface,
    config: &LegendConfig,
    entries: &[LegendEntry],
    bounds: Rect,
) -> LegendLayout {
    let layout = layout_legend(config, entries, bounds, surface);
    for item in &layout.items {
        draw_form(surface, item);
        if item.label.is_empty() {
            continue;
        }
        surface.draw_text(TextPrimitive::new(
            item.label.clone(),
            item.text_x,
            item.text_top,
            config.text_size,
            config.text_color,
            TextHAlign::Left,
        ));
    }
    layout
}

fn draw_form(surface: &mut dyn DrawSurface, item: &LegendItem) {
    let size = item.form_size;
    if size <= 0.0 {
        return;
    }
    let half = size / 2.0;
    match item.form {
        LegendForm::Square => surface.draw_rect(RectPrimitive::new(
            item.x,
            item.center_y - half,
            size,
            size,
            Paint::fill(item.color),
        )),
        LegendForm::Circle => surface.draw_circle(CirclePrimitive::new(
            Point::new(item.x + half, item.center_y),
            half,
            Paint::fill(item.color),
        )),
        LegendForm::Line => {
            if item.form_line_width > 0.0 {
                surface.draw_line(
                    LinePrimitive::new(
                        item.x,
                        item.center_y,
                        item.x + size,
                        item.center_y,
                        item.form_line_width,
                        item.color,
                    )
                    .with_cap(LineCap::Butt),
                );
            }
        }
        LegendForm::None | LegendForm::Empty | LegendForm::Default => {}
    }
}
