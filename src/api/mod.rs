mod axis_config;
mod axis_label_format;
mod axis_renderer;
mod axis_ticks;
mod bar_renderer;
mod bubble_renderer;
mod candlestick_renderer;
mod chart_pipeline;
mod combined_renderer;
mod description;
mod engine;
mod engine_config;
mod legend_config;
mod legend_renderer;
mod line_renderer;
mod marker_config;
mod pie_renderer;
mod radar_renderer;
mod scatter_renderer;
mod value_labels;

pub use axis_config::{
    AxisConfig, AxisLabelLocale, AxisLabelPolicy, AxisSide, LabelFormatter, LimitLabelPosition,
    LimitLineConfig, MIN_AXIS_LABEL_COUNT, XAxisConfig, XAxisPosition, YAxisConfig,
    YAxisLabelPosition,
};
pub use axis_label_format::{default_axis_label, format_axis_label};
pub use axis_renderer::{
    axis_tick_values, draw_x_axis, draw_x_limit_lines, draw_y_axis, draw_y_limit_lines,
};
pub use axis_ticks::{
    AXIS_LABEL_MIN_GAP_PX, AxisLabelSlot, compute_axis_values, select_non_overlapping,
};
pub use bar_renderer::{
    BarGroup, StackSegment, bar_rect, draw_bar_data, draw_bar_data_set,
    draw_horizontal_bar_data, draw_horizontal_bar_data_set, horizontal_bar_rect,
    stacked_bar_segments,
};
pub use bubble_renderer::{
    BUBBLE_ALPHA, BUBBLE_HIGHLIGHT_COLOR, MAX_BUBBLE_RADIUS_RATIO, bubble_radius,
    draw_bubble_data_set, draw_bubble_highlight,
};
pub use candlestick_renderer::{
    CandleGeometry, FALLBACK_BODY_STROKE_PX, MIN_CANDLE_BODY_PX, draw_candle_data_set,
    project_candles,
};
pub use chart_pipeline::{
    AxisViewports, ChartFrameConfig, PieChartConfig, RADAR_LABEL_ROOM_PX, RadarChartConfig,
    X_LABEL_ROOM_PX, Y_LABEL_ROOM_PX, cartesian_viewports, draw_bar_chart, draw_bubble_chart,
    draw_candle_chart, draw_combined_chart, draw_horizontal_bar_chart, draw_line_chart,
    draw_pie_chart, draw_radar_chart, draw_scatter_chart, pie_legend_entries,
};
pub use combined_renderer::{
    DEFAULT_DRAW_ORDER, DrawOrder, combined_legend_entries, draw_combined_data,
    normalize_draw_order,
};
pub use description::{DescriptionConfig, draw_description};
pub use engine::ChartEngine;
pub use engine_config::{
    ChartEngineConfig, ChartEngineConfigJsonContractV1, ChartPayload,
    ENGINE_CONFIG_JSON_SCHEMA_V1,
};
pub use legend_config::{
    LegendConfig, LegendEntry, LegendForm, LegendHorizontalAlignment, LegendOrientation,
    LegendVerticalAlignment,
};
pub use legend_renderer::{
    LEGEND_EDGE_MARGIN_PX, LegendItem, LegendLayout, bar_legend_entries, build_entries,
    draw_legend, layout_legend, resolve_entries,
};
pub use line_renderer::{cubic_control_points, draw_line_data_set};
pub use marker_config::MarkerConfig;
pub use pie_renderer::{PieSlice, draw_pie_data_set, draw_pie_highlight, pie_slices};
pub use radar_renderer::{
    MIN_RADAR_AXES, RADAR_LABEL_OFFSET_PX, RadarGeometry, RadarWebStyle, draw_radar_data_set,
    draw_radar_labels, draw_radar_web, radar_vertices,
};
pub use scatter_renderer::{draw_glyph, draw_scatter_data_set};
