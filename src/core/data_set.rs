use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Data-space extent folded over a set of entries or datasets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataBounds {
    /// Fallback reported when nothing visible contributes bounds.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Folds `(x, y_low, y_high)` samples; `None` for an empty iterator.
    pub fn fold<I>(samples: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64, f64)>,
    {
        samples.into_iter().fold(None, |acc, (x, y_low, y_high)| {
            let sample = Self::new(x, x, y_low.min(y_high), y_low.max(y_high));
            Some(match acc {
                Some(bounds) => bounds.union(sample),
                None => sample,
            })
        })
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::new(
            min_f64(self.x_min, other.x_min),
            max_f64(self.x_max, other.x_max),
            min_f64(self.y_min, other.y_min),
            max_f64(self.y_max, other.y_max),
        )
    }

    /// Unions every present bounds; `None` when all are absent.
    pub fn union_all<I>(bounds: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<Self>>,
    {
        bounds
            .into_iter()
            .flatten()
            .reduce(Self::union)
    }

    /// `true` when both ranges collapse to a single value.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.x_min == self.x_max && self.y_min == self.y_max
    }

    #[must_use]
    pub fn with_y_min_at_most(self, ceiling: f64) -> Self {
        Self {
            y_min: self.y_min.min(ceiling),
            ..self
        }
    }

    #[must_use]
    pub fn with_y_max_at_least(self, floor: f64) -> Self {
        Self {
            y_max: self.y_max.max(floor),
            ..self
        }
    }

    /// Widens the X range by `padding` on both sides.
    #[must_use]
    pub fn with_x_padding(self, padding: f64) -> Self {
        Self {
            x_min: self.x_min - padding,
            x_max: self.x_max + padding,
            ..self
        }
    }

    /// Widens the Y range by a percentage of its span (top / bottom).
    #[must_use]
    pub fn with_y_space_percent(self, top_percent: f64, bottom_percent: f64) -> Self {
        let span = self.y_max - self.y_min;
        if span <= 0.0 {
            return self;
        }
        Self {
            y_min: self.y_min - span * bottom_percent.max(0.0) / 100.0,
            y_max: self.y_max + span * top_percent.max(0.0) / 100.0,
            ..self
        }
    }
}

impl Default for DataBounds {
    fn default() -> Self {
        Self::ZERO
    }
}

fn min_f64(left: f64, right: f64) -> f64 {
    OrderedFloat(left).min(OrderedFloat(right)).into_inner()
}

fn max_f64(left: f64, right: f64) -> f64 {
    OrderedFloat(left).max(OrderedFloat(right)).into_inner()
}

/// Y axis a dataset is scaled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisDependency {
    #[default]
    Left,
    Right,
}

/// Styling shared by every dataset kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSetStyle {
    pub label: String,
    /// Cycled by entry index; never empty once validated.
    pub colors: Vec<Color>,
    pub axis_dependency: AxisDependency,
    pub highlight_enabled: bool,
    pub visible: bool,
    pub draw_values: bool,
    pub value_text_color: Color,
    pub value_text_size: f64,
}

impl DataSetStyle {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.colors = vec![color];
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_axis_dependency(mut self, axis_dependency: AxisDependency) -> Self {
        self.axis_dependency = axis_dependency;
        self
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn with_draw_values(mut self, draw_values: bool) -> Self {
        self.draw_values = draw_values;
        self
    }

    /// Color for entry `index`, cycling through the palette.
    #[must_use]
    pub fn color(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            return Color::GRAY;
        }
        self.colors[index % self.colors.len()]
    }

    #[must_use]
    pub fn first_color(&self) -> Color {
        self.color(0)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.colors.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "data set `{}` needs at least one color",
                self.label
            )));
        }
        for color in &self.colors {
            color.validate()?;
        }
        self.value_text_color.validate()?;
        if !self.value_text_size.is_finite() || self.value_text_size <= 0.0 {
            return Err(ChartError::InvalidData(
                "value text size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for DataSetStyle {
    fn default() -> Self {
        Self {
            label: "DataSet".to_owned(),
            colors: vec![Color::from_argb_hex(0xFF8C_EAFF)],
            axis_dependency: AxisDependency::Left,
            highlight_enabled: true,
            visible: true,
            draw_values: false,
            value_text_color: Color::BLACK,
            value_text_size: 12.0,
        }
    }
}

/// Common read access used by bounds folding and legend building.
pub trait ChartDataSet {
    fn style(&self) -> &DataSetStyle;

    fn entry_count(&self) -> usize;

    /// Data-space extent of the entries; `None` when the dataset is empty.
    fn bounds(&self) -> Option<DataBounds>;

    fn label(&self) -> &str {
        &self.style().label
    }

    fn is_visible(&self) -> bool {
        self.style().visible
    }

    fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    fn axis_dependency(&self) -> AxisDependency {
        self.style().axis_dependency
    }

    /// Bounds only when the dataset contributes to scaling.
    fn visible_bounds(&self) -> Option<DataBounds> {
        if self.is_visible() && !self.is_empty() {
            self.bounds()
        } else {
            None
        }
    }

    fn x_bounds(&self) -> Option<(f64, f64)> {
        self.bounds().map(|bounds| (bounds.x_min, bounds.x_max))
    }

    fn y_bounds(&self) -> Option<(f64, f64)> {
        self.bounds().map(|bounds| (bounds.y_min, bounds.y_max))
    }
}
