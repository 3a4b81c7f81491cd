use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::render::Color;

/// Tooltip styling for hosts that implement selection; the chart pipelines
/// never draw it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub enabled: bool,
    pub background_color: Color,
    pub text_color: Color,
    pub text_size: f64,
    pub padding: f64,
    pub corner_radius: f64,
    /// Offset of the marker box from the highlighted point.
    pub offset: Point,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            background_color: Color::from_argb_hex(0xCC00_0000),
            text_color: Color::WHITE,
            text_size: 12.0,
            padding: 8.0,
            corner_radius: 4.0,
            offset: Point::new(0.0, -10.0),
        }
    }
}
