use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{
    AxisDependency, BarDataSet, BubbleDataSet, CandleDataSet, ChartDataSet, DataBounds,
    LineDataSet, PieDataSet, RadarDataSet, ScatterDataSet,
};

pub const DEFAULT_BAR_WIDTH: f64 = 0.85;

/// Datasets of one chart kind drawn together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData<D> {
    data_sets: Vec<D>,
}

pub type LineData = ChartData<LineDataSet>;
pub type ScatterData = ChartData<ScatterDataSet>;
pub type CandleData = ChartData<CandleDataSet>;
pub type BubbleData = ChartData<BubbleDataSet>;
pub type PieData = ChartData<PieDataSet>;

impl<D> Default for ChartData<D> {
    fn default() -> Self {
        Self {
            data_sets: Vec::new(),
        }
    }
}

impl<D: ChartDataSet> ChartData<D> {
    #[must_use]
    pub fn new(data_sets: Vec<D>) -> Self {
        Self { data_sets }
    }

    #[must_use]
    pub fn single(data_set: D) -> Self {
        Self {
            data_sets: vec![data_set],
        }
    }

    #[must_use]
    pub fn data_sets(&self) -> &[D] {
        &self.data_sets
    }

    #[must_use]
    pub fn data_set_count(&self) -> usize {
        self.data_sets.len()
    }

    pub fn visible_data_sets(&self) -> impl Iterator<Item = &D> {
        self.data_sets
            .iter()
            .filter(|data_set| data_set.is_visible() && !data_set.is_empty())
    }

    /// Union over visible, non-empty datasets; `None` when nothing contributes.
    #[must_use]
    pub fn try_bounds(&self) -> Option<DataBounds> {
        DataBounds::union_all(self.data_sets.iter().map(ChartDataSet::visible_bounds))
    }

    /// Aggregate bounds, or all zero when nothing contributes.
    #[must_use]
    pub fn bounds(&self) -> DataBounds {
        self.try_bounds().unwrap_or_default()
    }

    /// Bounds of the datasets plotted against one Y axis.
    #[must_use]
    pub fn bounds_for(&self, axis: AxisDependency) -> Option<DataBounds> {
        DataBounds::union_all(
            self.data_sets
                .iter()
                .filter(|data_set| data_set.axis_dependency() == axis)
                .map(ChartDataSet::visible_bounds),
        )
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.data_sets.iter().map(ChartDataSet::entry_count).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible_data_sets().next().is_none()
    }
}

impl BubbleData {
    /// Largest bubble size across visible datasets; shared by every dataset so
    /// radii stay comparable.
    #[must_use]
    pub fn max_bubble_size(&self) -> f64 {
        self.visible_data_sets()
            .map(|data_set| OrderedFloat(data_set.max_size()))
            .max()
            .map_or(0.0, OrderedFloat::into_inner)
    }
}

/// Bar datasets plus the shared category slot width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarData {
    data: ChartData<BarDataSet>,
    bar_width: f64,
}

impl BarData {
    #[must_use]
    pub fn new(data_sets: Vec<BarDataSet>) -> Self {
        Self {
            data: ChartData::new(data_sets),
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    #[must_use]
    pub fn single(data_set: BarDataSet) -> Self {
        Self::new(vec![data_set])
    }

    /// Slot fraction shared by a group of bars, clamped into `(0, 1]`.
    #[must_use]
    pub fn with_bar_width(mut self, bar_width: f64) -> Self {
        if !bar_width.is_finite() || bar_width <= 0.0 || bar_width > 1.0 {
            warn!(bar_width, "bar width outside (0, 1], clamping");
        }
        self.bar_width = if bar_width.is_finite() {
            bar_width.clamp(0.01, 1.0)
        } else {
            DEFAULT_BAR_WIDTH
        };
        self
    }

    #[must_use]
    pub fn bar_width(&self) -> f64 {
        self.bar_width
    }

    #[must_use]
    pub fn data(&self) -> &ChartData<BarDataSet> {
        &self.data
    }

    #[must_use]
    pub fn data_sets(&self) -> &[BarDataSet] {
        self.data.data_sets()
    }

    pub fn visible_data_sets(&self) -> impl Iterator<Item = &BarDataSet> {
        self.data.visible_data_sets()
    }

    #[must_use]
    pub fn group_count(&self) -> usize {
        self.visible_data_sets().count()
    }

    #[must_use]
    pub fn bounds(&self) -> DataBounds {
        self.data.bounds()
    }

    #[must_use]
    pub fn bounds_for(&self, axis: AxisDependency) -> Option<DataBounds> {
        self.data.bounds_for(axis)
    }

    /// Bounds padded by half a bar on each X side with the zero baseline included.
    #[must_use]
    pub fn fit_bars(&self) -> DataBounds {
        self.bounds()
            .with_x_padding(self.bar_width / 2.0)
            .with_y_min_at_most(0.0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Radar datasets sharing one set of axis labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarData {
    data: ChartData<RadarDataSet>,
    labels: Vec<String>,
}

impl RadarData {
    #[must_use]
    pub fn new(data_sets: Vec<RadarDataSet>) -> Self {
        Self {
            data: ChartData::new(data_sets),
            labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn data_sets(&self) -> &[RadarDataSet] {
        self.data.data_sets()
    }

    pub fn visible_data_sets(&self) -> impl Iterator<Item = &RadarDataSet> {
        self.data.visible_data_sets()
    }

    /// Number of spokes: the longest visible dataset.
    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.visible_data_sets()
            .map(ChartDataSet::entry_count)
            .max()
            .unwrap_or(0)
    }

    /// Largest value over visible datasets; the outer ring of the web.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.data.bounds().y_max
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BarEntry, DataSetStyle};

    #[test]
    fn hidden_data_sets_do_not_contribute_bounds() {
        let shown = BarDataSet::from_values(&[1.0, 4.0], "shown").expect("data set");
        let hidden = BarDataSet::new(
            vec![BarEntry::new(10.0, 100.0)],
            DataSetStyle::new("hidden").with_visible(false),
        )
        .expect("data set");
        let data = BarData::new(vec![shown, hidden]);
        let bounds = data.bounds();
        assert_eq!(bounds.x_max, 1.0);
        assert_eq!(bounds.y_max, 4.0);
    }

    #[test]
    fn empty_container_has_zero_bounds() {
        let data = LineData::default();
        assert_eq!(data.bounds(), DataBounds::ZERO);
        assert!(data.is_empty());
    }

    #[test]
    fn fit_bars_pads_and_includes_zero() {
        let data = BarData::single(BarDataSet::from_values(&[2.0, 3.0], "b").expect("data set"))
            .with_bar_width(0.5);
        let fitted = data.fit_bars();
        assert!((fitted.x_min + 0.25).abs() <= 1e-9);
        assert!((fitted.x_max - 1.25).abs() <= 1e-9);
        assert_eq!(fitted.y_min, 0.0);
    }
}
