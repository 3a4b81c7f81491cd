use serde::{Deserialize, Serialize};

use crate::core::{BarEntry, ChartDataSet, DataBounds, DataSetStyle};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarStyle {
    /// Segment colors for stacked entries; empty falls back to the dataset palette.
    pub stack_colors: Vec<Color>,
    /// Legend labels for the stack segments, cycled by segment index.
    pub stack_labels: Vec<String>,
    pub border_width: f64,
    pub border_color: Color,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            stack_colors: Vec::new(),
            stack_labels: Vec::new(),
            border_width: 0.0,
            border_color: Color::BLACK,
        }
    }
}

/// Bars keyed by category X; entries may be plain or stacked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BarDataSetParts")]
pub struct BarDataSet {
    entries: Vec<BarEntry>,
    style: DataSetStyle,
    bar: BarStyle,
}

#[derive(Deserialize)]
struct BarDataSetParts {
    entries: Vec<BarEntry>,
    style: DataSetStyle,
    #[serde(default)]
    bar: BarStyle,
}

impl TryFrom<BarDataSetParts> for BarDataSet {
    type Error = ChartError;

    fn try_from(parts: BarDataSetParts) -> ChartResult<Self> {
        Ok(Self::new(parts.entries, parts.style)?.with_bar_style(parts.bar))
    }
}

impl BarDataSet {
    /// Validates finite values and that every stacked entry carries the same
    /// number of segment values.
    pub fn new(entries: Vec<BarEntry>, style: DataSetStyle) -> ChartResult<Self> {
        style.validate()?;
        let mut expected_stack: Option<usize> = None;
        for (index, entry) in entries.iter().enumerate() {
            entry.validate()?;
            let Some(values) = &entry.y_values else {
                continue;
            };
            match expected_stack {
                None => expected_stack = Some(values.len()),
                Some(expected) if expected != values.len() => {
                    return Err(ChartError::StackMismatch {
                        data_set: style.label.clone(),
                        index,
                        expected,
                        actual: values.len(),
                    });
                }
                Some(_) => {}
            }
        }
        Ok(Self {
            entries,
            style,
            bar: BarStyle::default(),
        })
    }

    pub fn from_values(values: &[f64], label: impl Into<String>) -> ChartResult<Self> {
        let entries = values
            .iter()
            .enumerate()
            .map(|(index, y)| BarEntry::new(index as f64, *y))
            .collect();
        Self::new(entries, DataSetStyle::new(label))
    }

    /// One stacked entry per row at `x = 0, 1, 2, ...`.
    pub fn stacked(rows: &[&[f64]], label: impl Into<String>) -> ChartResult<Self> {
        let entries = rows
            .iter()
            .enumerate()
            .map(|(index, values)| BarEntry::stacked(index as f64, values))
            .collect();
        Self::new(entries, DataSetStyle::new(label))
    }

    #[must_use]
    pub fn with_bar_style(mut self, bar: BarStyle) -> Self {
        self.bar = bar;
        self
    }

    #[must_use]
    pub fn with_stack_colors(mut self, colors: Vec<Color>) -> Self {
        self.bar.stack_colors = colors;
        self
    }

    #[must_use]
    pub fn with_stack_labels(mut self, labels: Vec<String>) -> Self {
        self.bar.stack_labels = labels;
        self
    }

    #[must_use]
    pub fn with_border(mut self, width: f64, color: Color) -> Self {
        self.bar.border_width = width;
        self.bar.border_color = color;
        self
    }

    #[must_use]
    pub fn entries(&self) -> &[BarEntry] {
        &self.entries
    }

    #[must_use]
    pub fn bar_style(&self) -> &BarStyle {
        &self.bar
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.entries.iter().any(BarEntry::is_stacked)
    }

    #[must_use]
    pub fn stack_size(&self) -> usize {
        self.entries
            .iter()
            .map(BarEntry::stack_len)
            .max()
            .unwrap_or(1)
    }

    /// Color of segment `stack_index`, cycling through the stack palette.
    #[must_use]
    pub fn stack_color(&self, stack_index: usize) -> Color {
        if self.bar.stack_colors.is_empty() {
            return self.style.color(stack_index);
        }
        self.bar.stack_colors[stack_index % self.bar.stack_colors.len()]
    }
}

impl ChartDataSet for BarDataSet {
    fn style(&self) -> &DataSetStyle {
        &self.style
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn bounds(&self) -> Option<DataBounds> {
        DataBounds::fold(self.entries.iter().map(|entry| {
            let (low, high) = entry.value_extent();
            (entry.x, low, high)
        }))
    }
}
