use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{ChartDataSet, DataBounds, DataSetStyle, Entry};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DashPattern, LineCap};

pub const MIN_CUBIC_INTENSITY: f64 = 0.05;
pub const MAX_CUBIC_INTENSITY: f64 = 1.0;

/// Interpolation between consecutive line points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineMode {
    #[default]
    Linear,
    /// Horizontal then vertical dogleg at every point.
    Stepped,
    /// Catmull-Rom style cubic through neighbouring points.
    CubicBezier,
    /// Cubic with horizontal tangents; control points at the segment midpoint X.
    HorizontalBezier,
}

/// Per-point circle markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleConfig {
    pub enabled: bool,
    pub radius: f64,
    pub colors: Vec<Color>,
    pub hole_enabled: bool,
    pub hole_radius: f64,
    pub hole_color: Color,
}

impl CircleConfig {
    #[must_use]
    pub fn color(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            return Color::GRAY;
        }
        self.colors[index % self.colors.len()]
    }
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: 4.0,
            colors: vec![Color::from_argb_hex(0xFF8C_EAFF)],
            hole_enabled: true,
            hole_radius: 2.0,
            hole_color: Color::WHITE,
        }
    }
}

/// Area fill between the curve and the zero baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillConfig {
    pub enabled: bool,
    pub color: Color,
    pub alpha: f64,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            color: Color::from_argb_hex(0x808C_EAFF),
            alpha: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub mode: LineMode,
    pub line_width: f64,
    pub line_cap: LineCap,
    pub cubic_intensity: f64,
    pub dash: Option<DashPattern>,
    pub circle: CircleConfig,
    pub fill: FillConfig,
}

impl LineStyle {
    /// Cubic intensity clamped into `[0.05, 1]`.
    #[must_use]
    pub fn effective_cubic_intensity(&self) -> f64 {
        let intensity = self.cubic_intensity;
        if !intensity.is_finite() {
            warn!(intensity, "non-finite cubic intensity, using default");
            return 0.2;
        }
        if !(MIN_CUBIC_INTENSITY..=MAX_CUBIC_INTENSITY).contains(&intensity) {
            warn!(intensity, "cubic intensity out of range, clamping");
        }
        intensity.clamp(MIN_CUBIC_INTENSITY, MAX_CUBIC_INTENSITY)
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            mode: LineMode::Linear,
            line_width: 2.0,
            line_cap: LineCap::Round,
            cubic_intensity: 0.2,
            dash: None,
            circle: CircleConfig::default(),
            fill: FillConfig::default(),
        }
    }
}

/// Ordered points drawn as a connected line; entry order is the drawing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LineDataSetParts")]
pub struct LineDataSet {
    entries: Vec<Entry>,
    style: DataSetStyle,
    line: LineStyle,
}

#[derive(Deserialize)]
struct LineDataSetParts {
    entries: Vec<Entry>,
    style: DataSetStyle,
    #[serde(default)]
    line: LineStyle,
}

impl TryFrom<LineDataSetParts> for LineDataSet {
    type Error = ChartError;

    fn try_from(parts: LineDataSetParts) -> ChartResult<Self> {
        Ok(Self::new(parts.entries, parts.style)?.with_line_style(parts.line))
    }
}

impl LineDataSet {
    pub fn new(entries: Vec<Entry>, style: DataSetStyle) -> ChartResult<Self> {
        style.validate()?;
        for entry in &entries {
            entry.validate()?;
        }
        Ok(Self {
            entries,
            style,
            line: LineStyle::default(),
        })
    }

    /// Entries at `x = 0, 1, 2, ...`.
    pub fn from_values(values: &[f64], label: impl Into<String>) -> ChartResult<Self> {
        let entries = values
            .iter()
            .enumerate()
            .map(|(index, y)| Entry::new(index as f64, *y))
            .collect();
        Self::new(entries, DataSetStyle::new(label))
    }

    #[must_use]
    pub fn with_line_style(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: LineMode) -> Self {
        self.line.mode = mode;
        self
    }

    /// Switches to cubic mode; the intensity is clamped into `[0.05, 1]`.
    #[must_use]
    pub fn as_cubic(mut self, intensity: f64) -> Self {
        self.line.mode = LineMode::CubicBezier;
        self.line.cubic_intensity = intensity;
        self.line.cubic_intensity = self.line.effective_cubic_intensity();
        self
    }

    #[must_use]
    pub fn with_fill(mut self, color: Color, alpha: f64) -> Self {
        self.line.fill = FillConfig {
            enabled: true,
            color,
            alpha,
        };
        self
    }

    #[must_use]
    pub fn without_circles(mut self) -> Self {
        self.line.circle.enabled = false;
        self
    }

    #[must_use]
    pub fn with_dash(mut self, line_length: f64, space_length: f64) -> Self {
        self.line.dash = Some(DashPattern::new(line_length, space_length));
        self
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn line_style(&self) -> &LineStyle {
        &self.line
    }
}

impl ChartDataSet for LineDataSet {
    fn style(&self) -> &DataSetStyle {
        &self.style
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn bounds(&self) -> Option<DataBounds> {
        DataBounds::fold(self.entries.iter().map(|entry| (entry.x, entry.y, entry.y)))
    }
}
