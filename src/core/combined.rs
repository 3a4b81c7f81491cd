use serde::{Deserialize, Serialize};

use crate::core::{BarData, BubbleData, CandleData, DataBounds, LineData, ScatterData};

/// At most one data collection per cartesian chart kind, drawn on one viewport.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinedData {
    pub line_data: Option<LineData>,
    pub bar_data: Option<BarData>,
    pub scatter_data: Option<ScatterData>,
    pub candle_data: Option<CandleData>,
    pub bubble_data: Option<BubbleData>,
}

impl CombinedData {
    #[must_use]
    pub fn with_line_data(mut self, data: LineData) -> Self {
        self.line_data = Some(data);
        self
    }

    #[must_use]
    pub fn with_bar_data(mut self, data: BarData) -> Self {
        self.bar_data = Some(data);
        self
    }

    #[must_use]
    pub fn with_scatter_data(mut self, data: ScatterData) -> Self {
        self.scatter_data = Some(data);
        self
    }

    #[must_use]
    pub fn with_candle_data(mut self, data: CandleData) -> Self {
        self.candle_data = Some(data);
        self
    }

    #[must_use]
    pub fn with_bubble_data(mut self, data: BubbleData) -> Self {
        self.bubble_data = Some(data);
        self
    }

    /// Union of all present sub-bounds; bar bounds include the half-bar padding
    /// and zero baseline so bars are not cut at the edges.
    #[must_use]
    pub fn try_bounds(&self) -> Option<DataBounds> {
        DataBounds::union_all([
            self.line_data.as_ref().and_then(LineData::try_bounds),
            self.bar_data
                .as_ref()
                .filter(|data| !data.is_empty())
                .map(BarData::fit_bars),
            self.scatter_data.as_ref().and_then(ScatterData::try_bounds),
            self.candle_data.as_ref().and_then(CandleData::try_bounds),
            self.bubble_data.as_ref().and_then(BubbleData::try_bounds),
        ])
    }

    #[must_use]
    pub fn bounds(&self) -> DataBounds {
        self.try_bounds().unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.try_bounds().is_none()
    }
}
