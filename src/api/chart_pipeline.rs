//! Full draw passes: bounds, viewport, axes, data, legend and description.
//!
//! Every pipeline recomputes its layout from the inputs on each call and
//! issues commands in a fixed order: background, grid background, axes,
//! clipped data, front limit lines, border, legend, description.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    AxisDependency, BarData, BubbleData, CandleData, ChartDataSet, CombinedData, DataBounds,
    Insets, LineData, PieData, PieDataSet, Point, RadarData, Rect, ScatterData, Size, Viewport,
    clamp_phase,
};
use crate::render::{
    CirclePrimitive, Color, DrawSurface, Paint, RectPrimitive, TextHAlign, TextPrimitive,
};

use super::axis_config::{AxisSide, XAxisConfig, XAxisPosition, YAxisConfig};
use super::axis_renderer::{draw_x_axis, draw_x_limit_lines, draw_y_axis, draw_y_limit_lines};
use super::bar_renderer::{draw_bar_data, draw_horizontal_bar_data};
use super::bubble_renderer::draw_bubble_data_set;
use super::candlestick_renderer::draw_candle_data_set;
use super::combined_renderer::{DrawOrder, combined_legend_entries, draw_combined_data};
use super::description::{DescriptionConfig, draw_description};
use super::legend_config::{
    LegendConfig, LegendEntry, LegendForm, LegendOrientation, LegendVerticalAlignment,
};
use super::legend_renderer::{
    LEGEND_EDGE_MARGIN_PX, bar_legend_entries, build_entries, draw_legend, layout_legend,
    resolve_entries,
};
use super::line_renderer::draw_line_data_set;
use super::marker_config::MarkerConfig;
use super::pie_renderer::{draw_pie_data_set, draw_pie_highlight};
use super::radar_renderer::{
    RadarGeometry, RadarWebStyle, draw_radar_data_set, draw_radar_labels, draw_radar_web,
};
use super::scatter_renderer::draw_scatter_data_set;

/// Horizontal room reserved for outside Y axis labels.
pub const Y_LABEL_ROOM_PX: f64 = 30.0;
/// Vertical room reserved for outside X axis labels.
pub const X_LABEL_ROOM_PX: f64 = 20.0;
/// Room between the radar's outer ring and the content edge, for axis labels.
pub const RADAR_LABEL_ROOM_PX: f64 = 20.0;

/// Chrome shared by every chart kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartFrameConfig {
    /// Minimum inset on every side of the content rectangle.
    pub min_offset: f64,
    pub background: Color,
    pub draw_grid_background: bool,
    pub grid_background: Color,
    pub draw_borders: bool,
    pub border_color: Color,
    pub border_width: f64,
    pub x_axis: XAxisConfig,
    pub left_axis: YAxisConfig,
    /// Right axis; when absent every dataset shares the left axis scale.
    pub right_axis: Option<YAxisConfig>,
    pub legend: LegendConfig,
    pub description: DescriptionConfig,
    /// Carried for hosts that draw selection markers; not drawn here.
    pub marker: MarkerConfig,
}

impl Default for ChartFrameConfig {
    fn default() -> Self {
        Self {
            min_offset: 15.0,
            background: Color::WHITE,
            draw_grid_background: false,
            grid_background: Color::from_argb_hex(0xFFF0_F0F0),
            draw_borders: false,
            border_color: Color::BLACK,
            border_width: 1.0,
            x_axis: XAxisConfig::default(),
            left_axis: YAxisConfig::default(),
            right_axis: None,
            legend: LegendConfig::default(),
            description: DescriptionConfig::default(),
            marker: MarkerConfig::default(),
        }
    }
}

impl ChartFrameConfig {
    #[must_use]
    pub fn with_x_axis(mut self, x_axis: XAxisConfig) -> Self {
        self.x_axis = x_axis;
        self
    }

    #[must_use]
    pub fn with_left_axis(mut self, left_axis: YAxisConfig) -> Self {
        self.left_axis = left_axis;
        self
    }

    #[must_use]
    pub fn with_right_axis(mut self, right_axis: YAxisConfig) -> Self {
        self.right_axis = Some(right_axis);
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendConfig) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: DescriptionConfig) -> Self {
        self.description = description;
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerConfig) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub fn with_grid_background(mut self, color: Color) -> Self {
        self.draw_grid_background = true;
        self.grid_background = color;
        self
    }

    #[must_use]
    pub fn with_borders(mut self, color: Color, width: f64) -> Self {
        self.draw_borders = true;
        self.border_color = color;
        self.border_width = width;
        self
    }

    /// Content insets of a cartesian chart before legend room is added.
    #[must_use]
    pub fn axis_insets(&self) -> Insets {
        let mut insets = Insets::uniform(self.min_offset);
        if self.left_axis.needs_label_room() {
            insets.left += Y_LABEL_ROOM_PX;
        }
        if self.right_axis.as_ref().is_some_and(YAxisConfig::needs_label_room) {
            insets.right += Y_LABEL_ROOM_PX;
        }
        if self.x_axis.axis.is_drawing_labels() {
            match self.x_axis.position {
                XAxisPosition::Top => insets.top += X_LABEL_ROOM_PX,
                XAxisPosition::Bottom => insets.bottom += X_LABEL_ROOM_PX,
                XAxisPosition::BothSided => {
                    insets.top += X_LABEL_ROOM_PX;
                    insets.bottom += X_LABEL_ROOM_PX;
                }
                XAxisPosition::TopInside | XAxisPosition::BottomInside => {}
            }
        }
        insets
    }
}

/// Pie-specific options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieChartConfig {
    /// Donut hole radius as a percent of the pie radius; `0` disables it.
    pub hole_radius_percent: f64,
    pub hole_color: Color,
    /// Translucent ring drawn around the hole, as a percent of the radius.
    pub transparent_circle_radius_percent: f64,
    pub transparent_circle_alpha: f64,
    /// Drawn inside the hole only.
    pub center_text: String,
    pub center_text_size: f64,
    pub center_text_color: Color,
    pub rotation_deg: f64,
    pub highlighted: Option<usize>,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        Self {
            hole_radius_percent: 50.0,
            hole_color: Color::WHITE,
            transparent_circle_radius_percent: 55.0,
            transparent_circle_alpha: 100.0 / 255.0,
            center_text: String::new(),
            center_text_size: 14.0,
            center_text_color: Color::BLACK,
            rotation_deg: 270.0,
            highlighted: None,
        }
    }
}

impl PieChartConfig {
    #[must_use]
    pub fn without_hole(mut self) -> Self {
        self.hole_radius_percent = 0.0;
        self.transparent_circle_radius_percent = 0.0;
        self
    }

    #[must_use]
    pub fn with_center_text(mut self, text: impl Into<String>) -> Self {
        self.center_text = text.into();
        self
    }

    #[must_use]
    pub fn with_highlight(mut self, index: usize) -> Self {
        self.highlighted = Some(index);
        self
    }
}

/// Radar-specific options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarChartConfig {
    pub web: RadarWebStyle,
    pub rotation_deg: f64,
    pub draw_labels: bool,
    pub label_text_size: f64,
    pub label_text_color: Color,
}

impl Default for RadarChartConfig {
    fn default() -> Self {
        Self {
            web: RadarWebStyle::default(),
            rotation_deg: 270.0,
            draw_labels: true,
            label_text_size: 10.0,
            label_text_color: Color::BLACK,
        }
    }
}

/// Left and right viewports of one cartesian pass; both share the X range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisViewports {
    pub left: Viewport,
    pub right: Viewport,
}

impl AxisViewports {
    #[must_use]
    pub fn shared(viewport: Viewport) -> Self {
        Self {
            left: viewport,
            right: viewport,
        }
    }

    #[must_use]
    pub fn for_axis(&self, axis: AxisDependency) -> &Viewport {
        match axis {
            AxisDependency::Left => &self.left,
            AxisDependency::Right => &self.right,
        }
    }
}

/// Builds the viewports of a cartesian chart.
///
/// The X range comes from `all` (with the X axis overrides). Without a
/// right axis both sides use `all`; with one, each side uses the bounds of
/// the datasets depending on it, falling back to `all`.
#[must_use]
pub fn cartesian_viewports(
    config: &ChartFrameConfig,
    canvas: Size,
    insets: Insets,
    all: DataBounds,
    per_axis: Option<(Option<DataBounds>, Option<DataBounds>)>,
) -> AxisViewports {
    let (x_min, x_max) = config.x_axis.axis.resolve_range(all.x_min, all.x_max);
    let project = |axis: &YAxisConfig, bounds: DataBounds| {
        let y = axis.apply_to_bounds(bounds);
        Viewport::create(canvas, insets, DataBounds::new(x_min, x_max, y.y_min, y.y_max))
    };
    match (&config.right_axis, per_axis) {
        (Some(right_axis), Some((left, right))) => AxisViewports {
            left: project(&config.left_axis, left.unwrap_or(all)),
            right: project(right_axis, right.unwrap_or(all)),
        },
        _ => AxisViewports::shared(project(&config.left_axis, all)),
    }
}

/// Extra insets that keep a horizontal top or bottom legend off the content.
fn legend_insets(
    config: &LegendConfig,
    entries: &[LegendEntry],
    canvas: Size,
    surface: &dyn DrawSurface,
) -> Insets {
    let mut insets = Insets::default();
    if !config.enabled || entries.is_empty() || config.orientation != LegendOrientation::Horizontal {
        return insets;
    }
    let layout = layout_legend(config, entries, Rect::from_size(canvas), surface);
    let Some(block) = layout
        .items
        .iter()
        .map(|item| item.bounds())
        .reduce(|acc, rect| {
            Rect::new(
                acc.left.min(rect.left),
                acc.top.min(rect.top),
                acc.right.max(rect.right),
                acc.bottom.max(rect.bottom),
            )
        })
    else {
        return insets;
    };
    let room = block.height() + LEGEND_EDGE_MARGIN_PX;
    match config.vertical_alignment {
        LegendVerticalAlignment::Top => insets.top = room,
        LegendVerticalAlignment::Bottom => insets.bottom = room,
        LegendVerticalAlignment::Center => {}
    }
    insets
}

fn add_insets(a: Insets, b: Insets) -> Insets {
    Insets::new(a.left + b.left, a.top + b.top, a.right + b.right, a.bottom + b.bottom)
}

fn draw_background(surface: &mut dyn DrawSurface, config: &ChartFrameConfig, canvas: Size) {
    surface.draw_rect(RectPrimitive::from_rect(
        Rect::from_size(canvas),
        Paint::fill(config.background),
    ));
}

fn draw_legend_and_description(
    surface: &mut dyn DrawSurface,
    config: &ChartFrameConfig,
    entries: &[LegendEntry],
    canvas: Size,
) {
    if config.legend.enabled && !entries.is_empty() {
        draw_legend(surface, &config.legend, entries, Rect::from_size(canvas));
    }
    draw_description(surface, &config.description, canvas);
}

fn draw_limit_lines(
    surface: &mut dyn DrawSurface,
    config: &ChartFrameConfig,
    viewports: &AxisViewports,
    behind_data: bool,
) {
    let x_axis = &config.x_axis.axis;
    if x_axis.enabled && x_axis.draw_limit_lines_behind_data == behind_data {
        draw_x_limit_lines(surface, &viewports.left, x_axis);
    }
    let left = &config.left_axis.axis;
    if left.enabled && left.draw_limit_lines_behind_data == behind_data {
        draw_y_limit_lines(surface, &viewports.left, left);
    }
    if let Some(right) = config.right_axis.as_ref().map(|axis| &axis.axis) {
        if right.enabled && right.draw_limit_lines_behind_data == behind_data {
            draw_y_limit_lines(surface, &viewports.right, right);
        }
    }
}

/// Shared cartesian pass; `draw_data` runs inside the content clip.
fn draw_cartesian<F>(
    surface: &mut dyn DrawSurface,
    config: &ChartFrameConfig,
    canvas: Size,
    viewports: &AxisViewports,
    legend_entries: &[LegendEntry],
    draw_data: F,
) where
    F: FnOnce(&mut dyn DrawSurface, &AxisViewports),
{
    let content = viewports.left.content_rect();
    draw_background(surface, config, canvas);
    if config.draw_grid_background {
        surface.draw_rect(RectPrimitive::from_rect(content, Paint::fill(config.grid_background)));
    }

    draw_x_axis(surface, &viewports.left, &config.x_axis);
    draw_y_axis(surface, &viewports.left, &config.left_axis, AxisSide::Left);
    if let Some(right_axis) = &config.right_axis {
        draw_y_axis(surface, &viewports.right, right_axis, AxisSide::Right);
    }
    draw_limit_lines(surface, config, viewports, true);

    surface.push_clip(content);
    draw_data(surface, viewports);
    surface.pop_clip();

    draw_limit_lines(surface, config, viewports, false);
    if config.draw_borders && config.border_width > 0.0 {
        surface.draw_rect(RectPrimitive::from_rect(
            content,
            Paint::stroke(config.border_color, config.border_width),
        ));
    }
    draw_legend_and_description(surface, config, legend_entries, canvas);
}

fn cartesian_insets(
    config: &ChartFrameConfig,
    entries: &[LegendEntry],
    canvas: Size,
    surface: &dyn DrawSurface,
) -> Insets {
    add_insets(
        config.axis_insets(),
        legend_insets(&config.legend, entries, canvas, surface),
    )
}

fn log_pass(kind: &'static str, canvas: Size, bounds: DataBounds, phase: f64) {
    debug!(
        kind,
        width = canvas.width,
        height = canvas.height,
        x_min = bounds.x_min,
        x_max = bounds.x_max,
        y_min = bounds.y_min,
        y_max = bounds.y_max,
        phase,
        "chart pass"
    );
}

pub fn draw_line_chart(
    surface: &mut dyn DrawSurface,
    canvas: Size,
    data: &LineData,
    config: &ChartFrameConfig,
    phase: f64,
) {
    if data.is_empty() {
        trace!(kind = "line", "no data, nothing to draw");
        return;
    }
    let phase = clamp_phase(phase);
    let bounds = data.bounds();
    log_pass("line", canvas, bounds, phase);
    let entries = resolve_entries(&config.legend, build_entries(data.data_sets()));
    let insets = cartesian_insets(config, &entries, canvas, surface);
    let per_axis = (data.bounds_for(AxisDependency::Left), data.bounds_for(AxisDependency::Right));
    let viewports = cartesian_viewports(config, canvas, insets, bounds, Some(per_axis));
    draw_cartesian(surface, config, canvas, &viewports, &entries, |surface, viewports| {
        for data_set in data.visible_data_sets() {
            draw_line_data_set(surface, data_set, viewports.for_axis(data_set.axis_dependency()), phase);
        }
    });
}

/// Grouped vertical bars on one shared scale fitted to the bars.
pub fn draw_bar_chart(
    surface: &mut dyn DrawSurface,
    canvas: Size,
    data: &BarData,
    config: &ChartFrameConfig,
    phase: f64,
) {
    if data.is_empty() {
        trace!(kind = "bar", "no data, nothing to draw");
        return;
    }
    let phase = clamp_phase(phase);
    let bounds = data.fit_bars();
    log_pass("bar", canvas, bounds, phase);
    let entries = resolve_entries(&config.legend, bar_legend_entries(data.data_sets()));
    let insets = cartesian_insets(config, &entries, canvas, surface);
    let viewports = cartesian_viewports(config, canvas, insets, bounds, None);
    draw_cartesian(surface, config, canvas, &viewports, &entries, |surface, viewports| {
        draw_bar_data(surface, data, &viewports.left, phase);
    });
}

/// Bars with the value axis horizontal.
///
/// Values take the left axis padding and overrides before the viewport is
/// swapped; afterwards the X axis config styles the horizontal (value) axis
/// and the left axis config styles the vertical (category) axis.
pub fn draw_horizontal_bar_chart(
    surface: &mut dyn DrawSurface,
    canvas: Size,
    data: &BarData,
    config: &ChartFrameConfig,
    phase: f64,
) {
    if data.is_empty() {
        trace!(kind = "horizontal_bar", "no data, nothing to draw");
        return;
    }
    let phase = clamp_phase(phase);
    let bounds = data.fit_bars();
    log_pass("horizontal_bar", canvas, bounds, phase);
    let entries = resolve_entries(&config.legend, bar_legend_entries(data.data_sets()));
    let insets = cartesian_insets(config, &entries, canvas, surface);
    let values = config.left_axis.apply_to_bounds(bounds);
    let (x_min, x_max) = config.x_axis.axis.resolve_range(bounds.x_min, bounds.x_max);
    let viewport = Viewport::create(
        canvas,
        insets,
        DataBounds::new(x_min, x_max, values.y_min, values.y_max),
    )
    .swapped();
    let viewports = AxisViewports::shared(viewport);
    draw_cartesian(surface, config, canvas, &viewports, &entries, |surface, viewports| {
        draw_horizontal_bar_data(surface, data, &viewports.left, phase);
    });
}

pub fn draw_scatter_chart(
    surface: &mut dyn DrawSurface,
    canvas: Size,
    data: &ScatterData,
    config: &ChartFrameConfig,
    phase: f64,
) {
    if data.is_empty() {
        trace!(kind = "scatter", "no data, nothing to draw");
        return;
    }
    let phase = clamp_phase(phase);
    let bounds = data.bounds();
    log_pass("scatter", canvas, bounds, phase);
    let entries = resolve_entries(&config.legend, build_entries(data.data_sets()));
    let insets = cartesian_insets(config, &entries, canvas, surface);
    let per_axis = (data.bounds_for(AxisDependency::Left), data.bounds_for(AxisDependency::Right));
    let viewports = cartesian_viewports(config, canvas, insets, bounds, Some(per_axis));
    draw_cartesian(surface, config, canvas, &viewports, &entries, |surface, viewports| {
        for data_set in data.visible_data_sets() {
            draw_scatter_data_set(surface, data_set, viewports.for_axis(data_set.axis_dependency()), phase);
        }
    });
}

/// Bubbles of every dataset are sized against the largest bubble of the chart.
pub fn draw_bubble_chart(
    surface: &mut dyn DrawSurface,
    canvas: Size,
    data: &BubbleData,
    config: &ChartFrameConfig,
    phase: f64,
) {
    if data.is_empty() {
        trace!(kind = "bubble", "no data, nothing to draw");
        return;
    }
    let phase = clamp_phase(phase);
    let bounds = data.bounds();
    log_pass("bubble", canvas, bounds, phase);
    let entries = resolve_entries(&config.legend, build_entries(data.data_sets()));
    let insets = cartesian_insets(config, &entries, canvas, surface);
    let per_axis = (data.bounds_for(AxisDependency::Left), data.bounds_for(AxisDependency::Right));
    let viewports = cartesian_viewports(config, canvas, insets, bounds, Some(per_axis));
    let max_size = data.max_bubble_size();
    draw_cartesian(surface, config, canvas, &viewports, &entries, |surface, viewports| {
        for data_set in data.visible_data_sets() {
            let viewport = viewports.for_axis(data_set.axis_dependency());
            draw_bubble_data_set(surface, data_set, viewport, max_size, phase);
        }
    });
}

pub fn draw_candle_chart(
    surface: &mut dyn DrawSurface,
    canvas: Size,
    data: &CandleData,
    config: &ChartFrameConfig,
    phase: f64,
) {
    if data.is_empty() {
        trace!(kind = "candle", "no data, nothing to draw");
        return;
    }
    let phase = clamp_phase(phase);
    let bounds = data.bounds();
    log_pass("candle", canvas, bounds, phase);
    let entries = resolve_entries(&config.legend, build_entries(data.data_sets()));
    let insets = cartesian_insets(config, &entries, canvas, surface);
    let per_axis = (data.bounds_for(AxisDependency::Left), data.bounds_for(AxisDependency::Right));
    let viewports = cartesian_viewports(config, canvas, insets, bounds, Some(per_axis));
    draw_cartesian(surface, config, canvas, &viewports, &entries, |surface, viewports| {
        for data_set in data.visible_data_sets() {
            draw_candle_data_set(surface, data_set, viewports.for_axis(data_set.axis_dependency()), phase);
        }
    });
}

/// Every present collection on one viewport spanning the union of their bounds.
pub fn draw_combined_chart(
    surface: &mut dyn DrawSurface,
    canvas: Size,
    data: &CombinedData,
    order: &[DrawOrder],
    config: &ChartFrameConfig,
    phase: f64,
) {
    if data.is_empty() {
        trace!(kind = "combined", "no data, nothing to draw");
        return;
    }
    let phase = clamp_phase(phase);
    let bounds = data.bounds();
    log_pass("combined", canvas, bounds, phase);
    let entries = resolve_entries(&config.legend, combined_legend_entries(data));
    let insets = cartesian_insets(config, &entries, canvas, surface);
    let viewports = cartesian_viewports(config, canvas, insets, bounds, None);
    draw_cartesian(surface, config, canvas, &viewports, &entries, |surface, viewports| {
        draw_combined_data(surface, data, &viewports.left, order, phase);
    });
}

/// One legend entry per slice, labelled with the slice label when present.
#[must_use]
pub fn pie_legend_entries(data_set: &PieDataSet) -> Vec<LegendEntry> {
    let style = data_set.style();
    data_set
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let label = entry.label.clone().unwrap_or_default();
            LegendEntry::new(label, LegendForm::Default, style.color(index))
        })
        .collect()
}

/// Draws the first visible pie dataset, its optional donut hole and centre
/// text, and the highlighted slice.
pub fn draw_pie_chart(
    surface: &mut dyn DrawSurface,
    canvas: Size,
    data: &PieData,
    frame: &ChartFrameConfig,
    config: &PieChartConfig,
    phase: f64,
) {
    if data.is_empty() {
        trace!(kind = "pie", "no data, nothing to draw");
        return;
    }
    let phase = clamp_phase(phase);
    log_pass("pie", canvas, data.bounds(), phase);
    let data_set = data.visible_data_sets().next();
    if data.visible_data_sets().count() > 1 {
        trace!("pie chart draws only its first visible data set");
    }
    let auto_entries = data_set.map(pie_legend_entries).unwrap_or_default();
    let entries = resolve_entries(&frame.legend, auto_entries);
    let insets = add_insets(
        Insets::uniform(frame.min_offset),
        legend_insets(&frame.legend, &entries, canvas, surface),
    );
    let content = Rect::from_size(canvas).inset(insets);
    let center = content.center();
    let radius = (content.width().min(content.height()) / 2.0).max(0.0);

    draw_background(surface, frame, canvas);
    surface.push_clip(Rect::from_size(canvas));
    if let Some(data_set) = data_set {
        draw_pie_data_set(surface, data_set, center, radius, config.rotation_deg, phase);
        if let Some(index) = config.highlighted {
            draw_pie_highlight(surface, data_set, center, radius, config.rotation_deg, phase, index);
        }
    }
    draw_pie_hole(surface, config, center, radius);
    surface.pop_clip();
    draw_legend_and_description(surface, frame, &entries, canvas);
}

fn draw_pie_hole(surface: &mut dyn DrawSurface, config: &PieChartConfig, center: Point, radius: f64) {
    let hole_radius = radius * config.hole_radius_percent.max(0.0) / 100.0;
    if hole_radius <= 0.0 {
        return;
    }
    let ring_radius = radius * config.transparent_circle_radius_percent.max(0.0) / 100.0;
    if ring_radius > hole_radius {
        surface.draw_circle(CirclePrimitive::new(
            center,
            ring_radius,
            Paint::fill(config.hole_color.with_alpha(config.transparent_circle_alpha)),
        ));
    }
    surface.draw_circle(CirclePrimitive::new(center, hole_radius, Paint::fill(config.hole_color)));
    if config.center_text.is_empty() {
        return;
    }
    let size = surface.measure_text(&config.center_text, config.center_text_size);
    surface.draw_text(TextPrimitive::new(
        config.center_text.clone(),
        center.x,
        center.y - size.height / 2.0,
        config.center_text_size,
        config.center_text_color,
        TextHAlign::Center,
    ));
}

/// Web, every visible dataset polygon and the axis labels.
pub fn draw_radar_chart(
    surface: &mut dyn DrawSurface,
    canvas: Size,
    data: &RadarData,
    frame: &ChartFrameConfig,
    config: &RadarChartConfig,
    phase: f64,
) {
    if data.is_empty() {
        trace!(kind = "radar", "no data, nothing to draw");
        return;
    }
    let phase = clamp_phase(phase);
    let max_value = data.max_value();
    log_pass("radar", canvas, DataBounds::new(0.0, 0.0, 0.0, max_value), phase);
    let entries = resolve_entries(&frame.legend, build_entries(data.data_sets()));
    let insets = add_insets(
        Insets::uniform(frame.min_offset),
        legend_insets(&frame.legend, &entries, canvas, surface),
    );
    let content = Rect::from_size(canvas).inset(insets);
    let radius = (content.width().min(content.height()) / 2.0 - RADAR_LABEL_ROOM_PX).max(0.0);
    let geometry = RadarGeometry::new(content.center(), radius, config.rotation_deg, data.axis_count());

    draw_background(surface, frame, canvas);
    draw_radar_web(surface, geometry, &config.web);
    surface.push_clip(Rect::from_size(canvas));
    for data_set in data.visible_data_sets() {
        draw_radar_data_set(surface, data_set, geometry, max_value, phase);
    }
    surface.pop_clip();
    if config.draw_labels {
        draw_radar_labels(
            surface,
            geometry,
            data.labels(),
            config.label_text_size,
            config.label_text_color,
        );
    }
    draw_legend_and_description(surface, frame, &entries, canvas);
}
