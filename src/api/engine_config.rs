use serde::{Deserialize, Serialize};

use crate::core::{BarData, BubbleData, CandleData, CombinedData, LineData, PieData, RadarData, ScatterData, Size};
use crate::error::{ChartError, ChartResult};
use crate::render::FontMetrics;

use super::chart_pipeline::{ChartFrameConfig, PieChartConfig, RadarChartConfig};
use super::combined_renderer::{DEFAULT_DRAW_ORDER, DrawOrder};

pub const ENGINE_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Canvas and chrome of a [`super::ChartEngine`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartEngineConfig {
    pub canvas: Size,
    pub frame: ChartFrameConfig,
    /// Text metrics of the recorded frames.
    pub metrics: FontMetrics,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self {
            canvas: Size::new(800.0, 600.0),
            frame: ChartFrameConfig::default(),
            metrics: FontMetrics::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartEngineConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ChartEngineConfig,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(canvas: Size) -> Self {
        Self {
            canvas,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_frame(mut self, frame: ChartFrameConfig) -> Self {
        self.frame = frame;
        self
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: FontMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.canvas.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }
        if !self.frame.min_offset.is_finite() || self.frame.min_offset < 0.0 {
            return Err(ChartError::InvalidData(
                "frame min offset must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        let payload = ChartEngineConfigJsonContractV1 {
            schema_version: ENGINE_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize engine config: {e}"))
        })
    }

    /// Accepts both the versioned contract and a bare config object.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(config) = serde_json::from_str::<ChartEngineConfigJsonContractV1>(input) {
            if config.schema_version != ENGINE_CONFIG_JSON_SCHEMA_V1 {
                return Err(ChartError::Serialization(format!(
                    "unsupported engine config schema version: {}",
                    config.schema_version
                )));
            }
            return Ok(config.config);
        }
        serde_json::from_str::<Self>(input).map_err(|e| {
            ChartError::Serialization(format!("failed to parse engine config json: {e}"))
        })
    }
}

/// Data the engine draws, one variant per chart kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartPayload {
    #[default]
    Empty,
    Line {
        data: LineData,
    },
    Bar {
        data: BarData,
    },
    HorizontalBar {
        data: BarData,
    },
    Scatter {
        data: ScatterData,
    },
    Bubble {
        data: BubbleData,
    },
    Candle {
        data: CandleData,
    },
    Pie {
        data: PieData,
        #[serde(default)]
        config: PieChartConfig,
    },
    Radar {
        data: RadarData,
        #[serde(default)]
        config: RadarChartConfig,
    },
    Combined {
        data: CombinedData,
        #[serde(default = "default_draw_order")]
        order: Vec<DrawOrder>,
    },
}

fn default_draw_order() -> Vec<DrawOrder> {
    DEFAULT_DRAW_ORDER.to_vec()
}

impl ChartPayload {
    #[must_use]
    pub fn combined(data: CombinedData) -> Self {
        Self::Combined {
            data,
            order: default_draw_order(),
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize chart payload: {e}"))
        })
    }

    /// Datasets decode through their validating constructors, so malformed
    /// entries fail here instead of at draw time.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!("failed to parse chart payload json: {e}"))
        })
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Line { .. } => "line",
            Self::Bar { .. } => "bar",
            Self::HorizontalBar { .. } => "horizontal_bar",
            Self::Scatter { .. } => "scatter",
            Self::Bubble { .. } => "bubble",
            Self::Candle { .. } => "candle",
            Self::Pie { .. } => "pie",
            Self::Radar { .. } => "radar",
            Self::Combined { .. } => "combined",
        }
    }
}
