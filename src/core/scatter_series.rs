use serde::{Deserialize, Serialize};

use crate::core::{ChartDataSet, DataBounds, DataSetStyle, Entry};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScatterShape {
    #[default]
    Circle,
    Square,
    Triangle,
    Cross,
    X,
    ChevronUp,
    ChevronDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterStyle {
    pub shape: ScatterShape,
    /// Glyph edge length in pixels.
    pub size: f64,
    /// Radius of the hollow center; `0` draws a solid glyph.
    pub hole_radius: f64,
    pub hole_color: Color,
}

impl Default for ScatterStyle {
    fn default() -> Self {
        Self {
            shape: ScatterShape::Circle,
            size: 10.0,
            hole_radius: 0.0,
            hole_color: Color::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScatterDataSetParts")]
pub struct ScatterDataSet {
    entries: Vec<Entry>,
    style: DataSetStyle,
    scatter: ScatterStyle,
}

#[derive(Deserialize)]
struct ScatterDataSetParts {
    entries: Vec<Entry>,
    style: DataSetStyle,
    #[serde(default)]
    scatter: ScatterStyle,
}

impl TryFrom<ScatterDataSetParts> for ScatterDataSet {
    type Error = ChartError;

    fn try_from(parts: ScatterDataSetParts) -> ChartResult<Self> {
        Ok(Self::new(parts.entries, parts.style)?.with_scatter_style(parts.scatter))
    }
}

impl ScatterDataSet {
    pub fn new(entries: Vec<Entry>, style: DataSetStyle) -> ChartResult<Self> {
        style.validate()?;
        for entry in &entries {
            entry.validate()?;
        }
        Ok(Self {
            entries,
            style,
            scatter: ScatterStyle::default(),
        })
    }

    pub fn from_pairs(pairs: &[(f64, f64)], label: impl Into<String>) -> ChartResult<Self> {
        let entries = pairs.iter().map(|(x, y)| Entry::new(*x, *y)).collect();
        Self::new(entries, DataSetStyle::new(label))
    }

    #[must_use]
    pub fn with_scatter_style(mut self, scatter: ScatterStyle) -> Self {
        self.scatter = scatter;
        self
    }

    #[must_use]
    pub fn with_shape(mut self, shape: ScatterShape, size: f64) -> Self {
        self.scatter.shape = shape;
        self.scatter.size = size;
        self
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn scatter_style(&self) -> ScatterStyle {
        self.scatter
    }
}

impl ChartDataSet for ScatterDataSet {
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
