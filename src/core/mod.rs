pub mod bar_series;
pub mod bubble_series;
pub mod candlestick;
pub mod chart_data;
pub mod combined;
pub mod data_set;
pub mod easing;
pub mod entry;
pub mod line_series;
pub mod pie_series;
pub mod primitives;
pub mod radar_series;
pub mod scatter_series;
pub mod types;
pub mod viewport;

pub use bar_series::{BarDataSet, BarStyle};
pub use bubble_series::{BubbleDataSet, BubbleStyle};
pub use candlestick::{CandleDataSet, CandleDirection, CandleStyle};
pub use chart_data::{
    BarData, BubbleData, CandleData, ChartData, DEFAULT_BAR_WIDTH, LineData, PieData, RadarData,
    ScatterData,
};
pub use combined::CombinedData;
pub use data_set::{AxisDependency, ChartDataSet, DataBounds, DataSetStyle};
pub use easing::{Easing, PhaseXY, Tween, clamp_phase};
pub use entry::{BarEntry, BubbleEntry, CandleEntry, Entry, PieEntry, RadarEntry, StackRange};
pub use line_series::{CircleConfig, FillConfig, LineDataSet, LineMode, LineStyle};
pub use pie_series::{PIE_DEFAULT_COLORS, PieDataSet, PieStyle};
pub use primitives::{datetime_to_unix_seconds, decimal_to_f64};
pub use radar_series::{RadarDataSet, RadarStyle};
pub use scatter_series::{ScatterDataSet, ScatterShape, ScatterStyle};
pub use types::{Insets, Point, Rect, Size};
pub use viewport::Viewport;
