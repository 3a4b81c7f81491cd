use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{CombinedData, Viewport};
use crate::render::DrawSurface;

use super::bar_renderer::draw_bar_data;
use super::bubble_renderer::draw_bubble_data_set;
use super::candlestick_renderer::draw_candle_data_set;
use super::legend_config::LegendEntry;
use super::legend_renderer::{bar_legend_entries, build_entries};
use super::line_renderer::draw_line_data_set;
use super::scatter_renderer::draw_scatter_data_set;

/// Layer kinds of a combined chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawOrder {
    Bar,
    Bubble,
    Line,
    Candle,
    Scatter,
}

pub const DEFAULT_DRAW_ORDER: [DrawOrder; 5] = [
    DrawOrder::Bar,
    DrawOrder::Bubble,
    DrawOrder::Line,
    DrawOrder::Candle,
    DrawOrder::Scatter,
];

/// Drops repeated layers, keeping the first occurrence of each.
#[must_use]
pub fn normalize_draw_order(order: &[DrawOrder]) -> Vec<DrawOrder> {
    order.iter().copied().collect::<IndexSet<_>>().into_iter().collect()
}

/// Draws the present sub-collections in `order` against one shared viewport.
/// Layers missing from `order` are not drawn.
pub fn draw_combined_data(
    surface: &mut dyn DrawSurface,
    data: &CombinedData,
    viewport: &Viewport,
    order: &[DrawOrder],
    phase: f64,
) {
    for layer in normalize_draw_order(order) {
        match layer {
            DrawOrder::Bar => {
                if let Some(bar_data) = &data.bar_data {
                    draw_bar_data(surface, bar_data, viewport, phase);
                }
            }
            DrawOrder::Bubble => {
                if let Some(bubble_data) = &data.bubble_data {
                    let max_size = bubble_data.max_bubble_size();
                    for data_set in bubble_data.visible_data_sets() {
                        draw_bubble_data_set(surface, data_set, viewport, max_size, phase);
                    }
                }
            }
            DrawOrder::Line => {
                if let Some(line_data) = &data.line_data {
                    for data_set in line_data.visible_data_sets() {
                        draw_line_data_set(surface, data_set, viewport, phase);
                    }
                }
            }
            DrawOrder::Candle => {
                if let Some(candle_data) = &data.candle_data {
                    for data_set in candle_data.visible_data_sets() {
                        draw_candle_data_set(surface, data_set, viewport, phase);
                    }
                }
            }
            DrawOrder::Scatter => {
                if let Some(scatter_data) = &data.scatter_data {
                    for data_set in scatter_data.visible_data_sets() {
                        draw_scatter_data_set(surface, data_set, viewport, phase);
                    }
                }
            }
        }
        trace!(?layer, "combined layer drawn");
    }
}

/// Legend entries of every present collection: line, bar, scatter, candle, bubble.
#[must_use]
pub fn combined_legend_entries(data: &CombinedData) -> Vec<LegendEntry> {
    let mut entries = Vec::new();
    if let Some(line_data) = &data.line_data {
        entries.extend(build_entries(line_data.data_sets()));
    }
    if let Some(bar_data) = &data.bar_data {
        entries.extend(bar_legend_entries(bar_data.data_sets()));
    }
    if let Some(scatter_data) = &data.scatter_data {
        entries.extend(build_entries(scatter_data.data_sets()));
    }
    if let Some(candle_data) = &data.candle_data {
        entries.extend(build_entries(candle_data.data_sets()));
    }
    if let Some(bubble_data) = &data.bubble_data {
        entries.extend(build_entries(bubble_data.data_sets()));
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::{DrawOrder, normalize_draw_order};

    #[test]
    fn repeated_layers_keep_first_position() {
        let order = normalize_draw_order(&[
            DrawOrder::Line,
            DrawOrder::Bar,
            DrawOrder::Line,
            DrawOrder::Scatter,
            DrawOrder::Bar,
        ]);
        assert_eq!(order, vec![DrawOrder::Line, DrawOrder::Bar, DrawOrder::Scatter]);
    }
}
