use serde::{Deserialize, Serialize};

use crate::core::{Point, Size};
use crate::render::{Color, DrawSurface, TextHAlign, TextPrimitive};

const DESCRIPTION_RIGHT_MARGIN_PX: f64 = 8.0;
const DESCRIPTION_BOTTOM_MARGIN_PX: f64 = 4.0;

/// Free text drawn on top of the chart, bottom-right by default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptionConfig {
    pub enabled: bool,
    pub text: String,
    pub text_size: f64,
    pub text_color: Color,
    pub h_align: TextHAlign,
    /// Top-left of the text box; `None` pins it to the bottom-right corner.
    pub position: Option<Point>,
}

impl DescriptionConfig {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }
}

impl Default for DescriptionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            text: String::new(),
            text_size: 8.0,
            text_color: Color::BLACK,
            h_align: TextHAlign::Left,
            position: None,
        }
    }
}

pub fn draw_description(surface: &mut dyn DrawSurface, config: &DescriptionConfig, canvas: Size) {
    if !config.enabled || config.text.is_empty() {
        return;
    }
    let measured = surface.measure_text(&config.text, config.text_size);
    let origin = config.position.unwrap_or_else(|| {
        Point::new(
            canvas.width - measured.width - DESCRIPTION_RIGHT_MARGIN_PX,
            canvas.height - measured.height - DESCRIPTION_BOTTOM_MARGIN_PX,
        )
    });
    surface.draw_text(TextPrimitive::new(
        config.text.clone(),
        origin.x,
        origin.y,
        config.text_size,
        config.text_color,
        config.h_align,
    ));
}
