use serde::{Deserialize, Serialize};

use crate::core::{CandleEntry, ChartDataSet, DataBounds, DataSetStyle};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, PaintStyle};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandleStyle {
    pub shadow_width: f64,
    /// Wick color; `None` (or `shadow_color_same_as_candle`) reuses the body color.
    pub shadow_color: Option<Color>,
    pub shadow_color_same_as_candle: bool,
    pub increasing_color: Color,
    pub decreasing_color: Color,
    pub neutral_color: Color,
    pub increasing_paint_style: PaintStyle,
    pub decreasing_paint_style: PaintStyle,
    pub show_candle_bar: bool,
    /// Fraction of one X unit left empty between bodies.
    pub bar_space: f64,
}

impl Default for CandleStyle {
    fn default() -> Self {
        Self {
            shadow_width: 1.0,
            shadow_color: None,
            shadow_color_same_as_candle: true,
            increasing_color: Color::from_argb_hex(0xFF4C_AF50),
            decreasing_color: Color::from_argb_hex(0xFFF4_4336),
            neutral_color: Color::GRAY,
            increasing_paint_style: PaintStyle::Fill,
            decreasing_paint_style: PaintStyle::Fill,
            show_candle_bar: true,
            bar_space: 0.1,
        }
    }
}

/// Body direction used for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandleDirection {
    Increasing,
    Decreasing,
    Neutral,
}

impl CandleDirection {
    #[must_use]
    pub fn of(entry: CandleEntry) -> Self {
        if entry.open > entry.close {
            Self::Decreasing
        } else if entry.open < entry.close {
            Self::Increasing
        } else {
            Self::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CandleDataSetParts")]
pub struct CandleDataSet {
    entries: Vec<CandleEntry>,
    style: DataSetStyle,
    candle: CandleStyle,
}

#[derive(Deserialize)]
struct CandleDataSetParts {
    entries: Vec<CandleEntry>,
    style: DataSetStyle,
    #[serde(default)]
    candle: CandleStyle,
}

impl TryFrom<CandleDataSetParts> for CandleDataSet {
    type Error = ChartError;

    fn try_from(parts: CandleDataSetParts) -> ChartResult<Self> {
        Ok(Self::new(parts.entries, parts.style)?.with_candle_style(parts.candle))
    }
}

impl CandleDataSet {
    pub fn new(entries: Vec<CandleEntry>, style: DataSetStyle) -> ChartResult<Self> {
        style.validate()?;
        for entry in &entries {
            entry.validate()?;
        }
        Ok(Self {
            entries,
            style,
            candle: CandleStyle::default(),
        })
    }

    /// Candles from `[open, high, low, close]` rows at `x = 0, 1, 2, ...`.
    pub fn from_ohlc(rows: &[[f64; 4]], label: impl Into<String>) -> ChartResult<Self> {
        let entries = rows
            .iter()
            .enumerate()
            .map(|(index, [open, high, low, close])| {
                CandleEntry::new(index as f64, *high, *low, *open, *close)
            })
            .collect::<ChartResult<Vec<_>>>()?;
        Self::new(entries, DataSetStyle::new(label))
    }

    #[must_use]
    pub fn with_candle_style(mut self, candle: CandleStyle) -> Self {
        self.candle = candle;
        self
    }

    #[must_use]
    pub fn with_direction_colors(mut self, increasing: Color, decreasing: Color) -> Self {
        self.candle.increasing_color = increasing;
        self.candle.decreasing_color = decreasing;
        self
    }

    #[must_use]
    pub fn entries(&self) -> &[CandleEntry] {
        &self.entries
    }

    #[must_use]
    pub fn candle_style(&self) -> CandleStyle {
        self.candle
    }

    /// Body color and paint style for a candle; neutral bodies are always filled.
    #[must_use]
    pub fn body_paint(&self, entry: CandleEntry) -> (Color, PaintStyle) {
        match CandleDirection::of(entry) {
            CandleDirection::Decreasing => (
                self.candle.decreasing_color,
                self.candle.decreasing_paint_style,
            ),
            CandleDirection::Increasing => (
                self.candle.increasing_color,
                self.candle.increasing_paint_style,
            ),
            CandleDirection::Neutral => (self.candle.neutral_color, PaintStyle::Fill),
        }
    }

    #[must_use]
    pub fn shadow_color(&self, body_color: Color) -> Color {
        if self.candle.shadow_color_same_as_candle {
            body_color
        } else {
            self.candle.shadow_color.unwrap_or(body_color)
        }
    }
}

impl ChartDataSet for CandleDataSet {
    fn style(&self) -> &DataSetStyle {
        &self.style
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Y extent spans the wicks (`low..high`).
    fn bounds(&self) -> Option<DataBounds> {
        DataBounds::fold(
            self.entries
                .iter()
                .map(|entry| (entry.x, entry.low, entry.high)),
        )
    }
}
