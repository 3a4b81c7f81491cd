use serde::{Deserialize, Serialize};

use crate::core::{ChartDataSet, DataBounds, DataSetStyle, PieEntry};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub const PIE_DEFAULT_COLORS: [Color; 5] = [
    Color::from_argb_hex(0xFFE9_1E63),
    Color::from_argb_hex(0xFF21_96F3),
    Color::from_argb_hex(0xFFFF_EB3B),
    Color::from_argb_hex(0xFF4C_AF50),
    Color::from_argb_hex(0xFFFF_9800),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieStyle {
    /// Angular gap between neighbouring slices, in degrees.
    pub slice_space: f64,
    /// Radial offset of a highlighted slice, in pixels.
    pub selection_shift: f64,
}

impl Default for PieStyle {
    fn default() -> Self {
        Self {
            slice_space: 0.0,
            selection_shift: 18.0,
        }
    }
}

/// Slice values; position in the list is the slice order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PieDataSetParts")]
pub struct PieDataSet {
    entries: Vec<PieEntry>,
    style: DataSetStyle,
    pie: PieStyle,
}

#[derive(Deserialize)]
struct PieDataSetParts {
    entries: Vec<PieEntry>,
    style: DataSetStyle,
    #[serde(default)]
    pie: PieStyle,
}

impl TryFrom<PieDataSetParts> for PieDataSet {
    type Error = ChartError;

    fn try_from(parts: PieDataSetParts) -> ChartResult<Self> {
        Ok(Self::new(parts.entries, parts.style)?.with_pie_style(parts.pie))
    }
}

impl PieDataSet {
    pub fn new(entries: Vec<PieEntry>, style: DataSetStyle) -> ChartResult<Self> {
        style.validate()?;
        for entry in &entries {
            entry.validate()?;
        }
        Ok(Self {
            entries,
            style,
            pie: PieStyle::default(),
        })
    }

    /// Unlabeled slices colored with the default pie palette.
    pub fn from_values(values: &[f64], label: impl Into<String>) -> ChartResult<Self> {
        let entries = values.iter().map(|value| PieEntry::new(*value)).collect();
        Self::new(
            entries,
            DataSetStyle::new(label).with_colors(PIE_DEFAULT_COLORS.to_vec()),
        )
    }

    #[must_use]
    pub fn with_pie_style(mut self, pie: PieStyle) -> Self {
        self.pie = pie;
        self
    }

    #[must_use]
    pub fn with_slice_space(mut self, degrees: f64) -> Self {
        self.pie.slice_space = degrees;
        self
    }

    #[must_use]
    pub fn entries(&self) -> &[PieEntry] {
        &self.entries
    }

    #[must_use]
    pub fn pie_style(&self) -> PieStyle {
        self.pie
    }

    #[must_use]
    pub fn value_sum(&self) -> f64 {
        self.entries.iter().map(|entry| entry.value).sum()
    }
}

impl ChartDataSet for PieDataSet {
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
