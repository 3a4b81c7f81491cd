use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64, ensure_finite};
use crate::error::{ChartError, ChartResult};

/// Plain x/y point used by line and scatter charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub x: f64,
    pub y: f64,
}

impl Entry {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            x: datetime_to_unix_seconds(time),
            y: decimal_to_f64(value, "value")?,
        })
    }

    pub(crate) fn validate(self) -> ChartResult<()> {
        ensure_finite(self.x, "entry x")?;
        ensure_finite(self.y, "entry y")?;
        Ok(())
    }
}

/// Inclusive data-space span covered by one stack segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackRange {
    pub from: f64,
    pub to: f64,
}

/// Bar value; a stacked bar carries its segment values in `y_values` and
/// `y` holds their sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarEntry {
    pub x: f64,
    pub y: f64,
    pub y_values: Option<SmallVec<[f64; 4]>>,
}

impl BarEntry {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            y_values: None,
        }
    }

    #[must_use]
    pub fn stacked(x: f64, values: &[f64]) -> Self {
        Self {
            x,
            y: values.iter().sum(),
            y_values: Some(SmallVec::from_slice(values)),
        }
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.y_values.is_some()
    }

    #[must_use]
    pub fn stack_len(&self) -> usize {
        self.y_values.as_ref().map_or(1, SmallVec::len)
    }

    #[must_use]
    pub fn positive_sum(&self) -> f64 {
        self.y_values
            .iter()
            .flatten()
            .filter(|value| **value > 0.0)
            .sum()
    }

    /// Magnitude of the negative segments.
    #[must_use]
    pub fn negative_sum(&self) -> f64 {
        self.y_values
            .iter()
            .flatten()
            .filter(|value| **value <= 0.0)
            .map(|value| value.abs())
            .sum()
    }

    /// Data-space span of every segment: positive values stack upward from
    /// `0` on the running positive total, negative values stack downward from
    /// `0` on the running negative total.
    #[must_use]
    pub fn stack_ranges(&self) -> SmallVec<[StackRange; 4]> {
        let Some(values) = &self.y_values else {
            return SmallVec::new();
        };
        let mut positive = 0.0_f64;
        let mut negative = 0.0_f64;
        values
            .iter()
            .map(|value| {
                if *value >= 0.0 {
                    let range = StackRange {
                        from: positive,
                        to: positive + value,
                    };
                    positive += value;
                    range
                } else {
                    let range = StackRange {
                        from: negative + value,
                        to: negative,
                    };
                    negative += value;
                    range
                }
            })
            .collect()
    }

    /// Lowest and highest data value the bar reaches.
    #[must_use]
    pub fn value_extent(&self) -> (f64, f64) {
        if self.is_stacked() {
            (-self.negative_sum(), self.positive_sum())
        } else {
            (self.y, self.y)
        }
    }

    pub(crate) fn validate(&self) -> ChartResult<()> {
        ensure_finite(self.x, "bar entry x")?;
        ensure_finite(self.y, "bar entry y")?;
        if let Some(values) = &self.y_values {
            if values.is_empty() {
                return Err(ChartError::InvalidData(
                    "stacked bar entry must carry at least one value".to_owned(),
                ));
            }
            for value in values {
                ensure_finite(*value, "stacked bar value")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BubbleEntry {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl BubbleEntry {
    #[must_use]
    pub const fn new(x: f64, y: f64, size: f64) -> Self {
        Self { x, y, size }
    }

    pub(crate) fn validate(self) -> ChartResult<()> {
        ensure_finite(self.x, "bubble entry x")?;
        ensure_finite(self.y, "bubble entry y")?;
        ensure_finite(self.size, "bubble entry size")?;
        if self.size < 0.0 {
            return Err(ChartError::InvalidData(
                "bubble size must be >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Open/high/low/close sample for candlestick charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleEntry {
    pub x: f64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub close: f64,
}

impl CandleEntry {
    /// Builds a validated candle.
    ///
    /// Invariants:
    /// - all values are finite
    /// - `low <= high`
    pub fn new(x: f64, high: f64, low: f64, open: f64, close: f64) -> ChartResult<Self> {
        let entry = Self {
            x,
            high,
            low,
            open,
            close,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Converts strongly-typed temporal/decimal input into a validated candle.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Self::new(
            datetime_to_unix_seconds(time),
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(open, "open")?,
            decimal_to_f64(close, "close")?,
        )
    }

    /// Midpoint of the wick.
    #[must_use]
    pub fn y(self) -> f64 {
        (self.high + self.low) / 2.0
    }

    #[must_use]
    pub fn is_increasing(self) -> bool {
        self.close > self.open
    }

    #[must_use]
    pub fn is_decreasing(self) -> bool {
        self.close < self.open
    }

    #[must_use]
    pub fn shadow_range(self) -> f64 {
        (self.high - self.low).abs()
    }

    #[must_use]
    pub fn body_range(self) -> f64 {
        (self.open - self.close).abs()
    }

    pub(crate) fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite()
            || !self.high.is_finite()
            || !self.low.is_finite()
            || !self.open.is_finite()
            || !self.close.is_finite()
        {
            return Err(ChartError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }
        if self.low > self.high {
            return Err(ChartError::InvalidData(
                "ohlc low must be <= high".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieEntry {
    pub value: f64,
    pub label: Option<String>,
}

impl PieEntry {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { value, label: None }
    }

    #[must_use]
    pub fn labeled(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: Some(label.into()),
        }
    }

    pub(crate) fn validate(&self) -> ChartResult<()> {
        ensure_finite(self.value, "pie entry value")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarEntry {
    pub value: f64,
}

impl RadarEntry {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { value }
    }

    pub(crate) fn validate(self) -> ChartResult<()> {
        ensure_finite(self.value, "radar entry value")?;
        Ok(())
    }
}
