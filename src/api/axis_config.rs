use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::DataBounds;
use crate::render::{Color, DashPattern};

use super::axis_label_format::format_axis_label;

pub const MIN_AXIS_LABEL_COUNT: usize = 2;

/// Caller-supplied tick label formatter.
pub type LabelFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Locale preset used by the built-in label policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisLabelLocale {
    #[default]
    EnUs,
    EsEs,
}

/// Built-in tick label formatting, used when no formatter callback is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AxisLabelPolicy {
    /// Integer when whole, one decimal otherwise.
    #[default]
    Default,
    FixedDecimals { precision: u8 },
    /// Value multiplied by 100 with a `%` suffix.
    Percent { precision: u8 },
    /// Value read as unix seconds and rendered in UTC.
    UnixTime { show_time: bool },
}

/// Corner of a limit line its label is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LimitLabelPosition {
    LeftTop,
    LeftBottom,
    #[default]
    RightTop,
    RightBottom,
}

/// Reference rule drawn at a fixed data value, independent of the ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitLineConfig {
    pub value: f64,
    pub label: String,
    pub enabled: bool,
    pub line_color: Color,
    pub line_width: f64,
    pub dash: Option<DashPattern>,
    pub label_position: LimitLabelPosition,
    pub text_color: Color,
    pub text_size: f64,
}

impl LimitLineConfig {
    #[must_use]
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label_position(mut self, position: LimitLabelPosition) -> Self {
        self.label_position = position;
        self
    }

    #[must_use]
    pub fn with_line(mut self, color: Color, width: f64) -> Self {
        self.line_color = color;
        self.line_width = width;
        self
    }

    #[must_use]
    pub fn with_dash(mut self, line_length: f64, space_length: f64) -> Self {
        self.dash = Some(DashPattern::new(line_length, space_length));
        self
    }
}

impl Default for LimitLineConfig {
    fn default() -> Self {
        Self {
            value: 0.0,
            label: String::new(),
            enabled: true,
            line_color: Color::from_argb_hex(0xFFED_5B5B),
            line_width: 2.0,
            dash: None,
            label_position: LimitLabelPosition::RightTop,
            text_color: Color::BLACK,
            text_size: 10.0,
        }
    }
}

/// Settings shared by the X and Y axes.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub enabled: bool,
    pub draw_labels: bool,
    pub draw_axis_line: bool,
    pub draw_grid_lines: bool,
    pub text_color: Color,
    pub text_size: f64,
    pub grid_color: Color,
    pub grid_line_width: f64,
    pub grid_dash: Option<DashPattern>,
    pub axis_line_color: Color,
    pub axis_line_width: f64,
    pub label_count: usize,
    pub axis_minimum: Option<f64>,
    pub axis_maximum: Option<f64>,
    pub limit_lines: Vec<LimitLineConfig>,
    pub draw_limit_lines_behind_data: bool,
    pub label_policy: AxisLabelPolicy,
    pub locale: AxisLabelLocale,
    #[serde(skip)]
    pub formatter: Option<LabelFormatter>,
}

impl AxisConfig {
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label_count(mut self, label_count: usize) -> Self {
        self.label_count = label_count;
        self
    }

    #[must_use]
    pub fn with_range(mut self, minimum: Option<f64>, maximum: Option<f64>) -> Self {
        self.axis_minimum = minimum;
        self.axis_maximum = maximum;
        self
    }

    #[must_use]
    pub fn with_limit_line(mut self, limit_line: LimitLineConfig) -> Self {
        self.limit_lines.push(limit_line);
        self
    }

    #[must_use]
    pub fn with_label_policy(mut self, policy: AxisLabelPolicy) -> Self {
        self.label_policy = policy;
        self
    }

    #[must_use]
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Label count with the `>= 2` floor applied.
    #[must_use]
    pub fn effective_label_count(&self) -> usize {
        if self.label_count < MIN_AXIS_LABEL_COUNT {
            warn!(
                label_count = self.label_count,
                "axis label count below minimum, using 2"
            );
            return MIN_AXIS_LABEL_COUNT;
        }
        self.label_count
    }

    #[must_use]
    pub fn format_label(&self, value: f64) -> String {
        match &self.formatter {
            Some(formatter) => formatter(value),
            None => format_axis_label(value, self.label_policy, self.locale),
        }
    }

    /// Applies the explicit minimum/maximum overrides to a data range.
    #[must_use]
    pub fn resolve_range(&self, min: f64, max: f64) -> (f64, f64) {
        let min = self.axis_minimum.filter(|value| value.is_finite()).unwrap_or(min);
        let max = self.axis_maximum.filter(|value| value.is_finite()).unwrap_or(max);
        (min, max)
    }

    #[must_use]
    pub fn is_drawing_labels(&self) -> bool {
        self.enabled && self.draw_labels
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            draw_labels: true,
            draw_axis_line: true,
            draw_grid_lines: true,
            text_color: Color::BLACK,
            text_size: 10.0,
            grid_color: Color::GRAY,
            grid_line_width: 1.0,
            grid_dash: None,
            axis_line_color: Color::GRAY,
            axis_line_width: 1.0,
            label_count: 6,
            axis_minimum: None,
            axis_maximum: None,
            limit_lines: Vec::new(),
            draw_limit_lines_behind_data: false,
            label_policy: AxisLabelPolicy::Default,
            locale: AxisLabelLocale::EnUs,
            formatter: None,
        }
    }
}

impl fmt::Debug for AxisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisConfig")
            .field("enabled", &self.enabled)
            .field("draw_labels", &self.draw_labels)
            .field("draw_axis_line", &self.draw_axis_line)
            .field("draw_grid_lines", &self.draw_grid_lines)
            .field("label_count", &self.label_count)
            .field("axis_minimum", &self.axis_minimum)
            .field("axis_maximum", &self.axis_maximum)
            .field("limit_lines", &self.limit_lines.len())
            .field("label_policy", &self.label_policy)
            .field("formatter", &self.formatter.as_ref().map(|_| "<fn>"))
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum XAxisPosition {
    #[default]
    Top,
    Bottom,
    BothSided,
    TopInside,
    BottomInside,
}

impl XAxisPosition {
    #[must_use]
    pub fn draws_top(self) -> bool {
        matches!(self, Self::Top | Self::TopInside | Self::BothSided)
    }

    #[must_use]
    pub fn draws_bottom(self) -> bool {
        matches!(self, Self::Bottom | Self::BottomInside | Self::BothSided)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct XAxisConfig {
    pub axis: AxisConfig,
    pub position: XAxisPosition,
    /// Shift the outermost labels inward instead of letting them overhang.
    pub avoid_first_last_clipping: bool,
}

impl XAxisConfig {
    #[must_use]
    pub fn with_position(mut self, position: XAxisPosition) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisConfig) -> Self {
        self.axis = axis;
        self
    }
}

/// Which side of the content rectangle a Y axis belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AxisSide {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum YAxisLabelPosition {
    #[default]
    OutsideChart,
    InsideChart,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YAxisConfig {
    pub axis: AxisConfig,
    pub label_position: YAxisLabelPosition,
    pub draw_zero_line: bool,
    pub zero_line_color: Color,
    pub zero_line_width: f64,
    /// Extra headroom above the data, in percent of the range.
    pub space_top: f64,
    /// Extra room below the data, in percent of the range.
    pub space_bottom: f64,
}

impl YAxisConfig {
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            axis: AxisConfig::disabled(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisConfig) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_zero_line(mut self, enabled: bool) -> Self {
        self.draw_zero_line = enabled;
        self
    }

    #[must_use]
    pub fn with_space(mut self, top_percent: f64, bottom_percent: f64) -> Self {
        self.space_top = top_percent;
        self.space_bottom = bottom_percent;
        self
    }

    /// Y bounds this axis displays: percent padding, then explicit overrides.
    #[must_use]
    pub fn apply_to_bounds(&self, bounds: DataBounds) -> DataBounds {
        let padded = bounds.with_y_space_percent(self.space_top, self.space_bottom);
        let (y_min, y_max) = self.axis.resolve_range(padded.y_min, padded.y_max);
        DataBounds { y_min, y_max, ..padded }
    }

    /// `true` when this axis reserves horizontal room for outside labels.
    #[must_use]
    pub fn needs_label_room(&self) -> bool {
        self.axis.is_drawing_labels() && self.label_position == YAxisLabelPosition::OutsideChart
    }
}

impl Default for YAxisConfig {
    fn default() -> Self {
        Self {
            axis: AxisConfig::default(),
            label_position: YAxisLabelPosition::OutsideChart,
            draw_zero_line: false,
            zero_line_color: Color::GRAY,
            zero_line_width: 1.0,
            space_top: 10.0,
            space_bottom: 10.0,
        }
    }
}
