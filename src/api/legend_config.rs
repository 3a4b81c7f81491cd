use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Swatch drawn in front of a legend label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LegendForm {
    /// No swatch and no space reserved for one.
    None,
    /// Space reserved, nothing drawn.
    Empty,
    /// Use the legend-wide form.
    #[default]
    Default,
    Square,
    Circle,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LegendHorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LegendVerticalAlignment {
    Top,
    Center,
    #[default]
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LegendOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// One label with its swatch; unset fields fall back to the legend defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendEntry {
    pub label: String,
    pub form: LegendForm,
    pub color: Option<Color>,
    pub form_size: Option<f64>,
    pub form_line_width: Option<f64>,
}

impl LegendEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, form: LegendForm, color: Color) -> Self {
        Self {
            label: label.into(),
            form,
            color: Some(color),
            form_size: None,
            form_line_width: None,
        }
    }

    #[must_use]
    pub fn with_form_size(mut self, size: f64) -> Self {
        self.form_size = Some(size);
        self
    }
}

impl Default for LegendEntry {
    fn default() -> Self {
        Self {
            label: String::new(),
            form: LegendForm::Default,
            color: None,
            form_size: None,
            form_line_width: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub enabled: bool,
    /// Replaces the auto-built entries when non-empty.
    pub custom_entries: Vec<LegendEntry>,
    /// Appended after the auto-built or custom entries.
    pub extra_entries: Vec<LegendEntry>,
    pub horizontal_alignment: LegendHorizontalAlignment,
    pub vertical_alignment: LegendVerticalAlignment,
    pub orientation: LegendOrientation,
    pub form: LegendForm,
    pub form_size: f64,
    pub form_line_width: f64,
    pub x_entry_space: f64,
    pub y_entry_space: f64,
    pub form_to_text_space: f64,
    pub text_color: Color,
    pub text_size: f64,
    /// Rows past this count are not drawn.
    pub max_rows: usize,
}

impl LegendConfig {
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_alignment(
        mut self,
        horizontal: LegendHorizontalAlignment,
        vertical: LegendVerticalAlignment,
    ) -> Self {
        self.horizontal_alignment = horizontal;
        self.vertical_alignment = vertical;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: LegendOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_custom_entries(mut self, entries: Vec<LegendEntry>) -> Self {
        self.custom_entries = entries;
        self
    }

    #[must_use]
    pub fn with_extra_entries(mut self, entries: Vec<LegendEntry>) -> Self {
        self.extra_entries = entries;
        self
    }

    #[must_use]
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            custom_entries: Vec::new(),
            extra_entries: Vec::new(),
            horizontal_alignment: LegendHorizontalAlignment::Left,
            vertical_alignment: LegendVerticalAlignment::Bottom,
            orientation: LegendOrientation::Horizontal,
            form: LegendForm::Square,
            form_size: 8.0,
            form_line_width: 3.0,
            x_entry_space: 6.0,
            y_entry_space: 0.0,
            form_to_text_space: 5.0,
            text_color: Color::BLACK,
            text_size: 10.0,
            max_rows: 16,
        }
    }
}
