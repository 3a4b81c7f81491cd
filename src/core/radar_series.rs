use serde::{Deserialize, Serialize};

use crate::core::{ChartDataSet, DataBounds, DataSetStyle, RadarEntry};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarStyle {
    pub line_width: f64,
    pub draw_filled: bool,
    pub fill_color: Color,
    pub fill_alpha: f64,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            draw_filled: true,
            fill_color: Color::from_argb_hex(0x808C_EAFF),
            fill_alpha: 0.5,
        }
    }
}

/// One value per radar axis; entry index is the axis index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RadarDataSetParts")]
pub struct RadarDataSet {
    entries: Vec<RadarEntry>,
    style: DataSetStyle,
    radar: RadarStyle,
}

#[derive(Deserialize)]
struct RadarDataSetParts {
    entries: Vec<RadarEntry>,
    style: DataSetStyle,
    #[serde(default)]
    radar: RadarStyle,
}

impl TryFrom<RadarDataSetParts> for RadarDataSet {
    type Error = ChartError;

    fn try_from(parts: RadarDataSetParts) -> ChartResult<Self> {
        Ok(Self::new(parts.entries, parts.style)?.with_radar_style(parts.radar))
    }
}

impl RadarDataSet {
    pub fn new(entries: Vec<RadarEntry>, style: DataSetStyle) -> ChartResult<Self> {
        style.validate()?;
        for entry in &entries {
            entry.validate()?;
        }
        Ok(Self {
            entries,
            style,
            radar: RadarStyle::default(),
        })
    }

    pub fn from_values(values: &[f64], label: impl Into<String>) -> ChartResult<Self> {
        let entries = values.iter().map(|value| RadarEntry::new(*value)).collect();
        Self::new(entries, DataSetStyle::new(label))
    }

    #[must_use]
    pub fn with_radar_style(mut self, radar: RadarStyle) -> Self {
        self.radar = radar;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, color: Color, alpha: f64) -> Self {
        self.radar.draw_filled = true;
        self.radar.fill_color = color;
        self.radar.fill_alpha = alpha;
        self
    }

    #[must_use]
    pub fn without_fill(mut self) -> Self {
        self.radar.draw_filled = false;
        self
    }

    #[must_use]
    pub fn entries(&self) -> &[RadarEntry] {
        &self.entries
    }

    #[must_use]
    pub fn radar_style(&self) -> RadarStyle {
        self.radar
    }
}

impl ChartDataSet for RadarDataSet {
    fn style(&self) -> &DataSetStyle {
        &self.style
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn bounds(&self) -> Option<DataBounds> {
        DataBounds::fold(
            self.entries
                .iter()
                .enumerate()
                .map(|(index, entry)| (index as f64, entry.value, entry.value)),
        )
    }
}
