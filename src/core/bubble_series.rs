use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{BubbleEntry, ChartDataSet, DataBounds, DataSetStyle};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleStyle {
    /// Scale radii relative to the largest size instead of using raw sizes.
    pub normalize_size: bool,
    pub highlight_circle_width: f64,
}

impl Default for BubbleStyle {
    fn default() -> Self {
        Self {
            normalize_size: true,
            highlight_circle_width: 2.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BubbleDataSetParts")]
pub struct BubbleDataSet {
    entries: Vec<BubbleEntry>,
    style: DataSetStyle,
    bubble: BubbleStyle,
}

#[derive(Deserialize)]
struct BubbleDataSetParts {
    entries: Vec<BubbleEntry>,
    style: DataSetStyle,
    #[serde(default)]
    bubble: BubbleStyle,
}

impl TryFrom<BubbleDataSetParts> for BubbleDataSet {
    type Error = ChartError;

    fn try_from(parts: BubbleDataSetParts) -> ChartResult<Self> {
        Ok(Self::new(parts.entries, parts.style)?.with_bubble_style(parts.bubble))
    }
}

impl BubbleDataSet {
    pub fn new(entries: Vec<BubbleEntry>, style: DataSetStyle) -> ChartResult<Self> {
        style.validate()?;
        for entry in &entries {
            entry.validate()?;
        }
        Ok(Self {
            entries,
            style,
            bubble: BubbleStyle::default(),
        })
    }

    pub fn from_triples(triples: &[(f64, f64, f64)], label: impl Into<String>) -> ChartResult<Self> {
        let entries = triples
            .iter()
            .map(|(x, y, size)| BubbleEntry::new(*x, *y, *size))
            .collect();
        Self::new(entries, DataSetStyle::new(label))
    }

    #[must_use]
    pub fn with_bubble_style(mut self, bubble: BubbleStyle) -> Self {
        self.bubble = bubble;
        self
    }

    #[must_use]
    pub fn entries(&self) -> &[BubbleEntry] {
        &self.entries
    }

    #[must_use]
    pub fn bubble_style(&self) -> BubbleStyle {
        self.bubble
    }

    /// Largest bubble size; `0` for an empty dataset.
    #[must_use]
    pub fn max_size(&self) -> f64 {
        self.entries
            .iter()
            .map(|entry| OrderedFloat(entry.size))
            .max()
            .map_or(0.0, OrderedFloat::into_inner)
    }
}

impl ChartDataSet for BubbleDataSet {
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
