use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Point, Rect};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Self = Self::rgb(0.533, 0.533, 0.533);
    pub const LIGHT_GRAY: Self = Self::rgb(0.8, 0.8, 0.8);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from a packed `0xAARRGGBB` value.
    #[must_use]
    pub const fn from_argb_hex(argb: u32) -> Self {
        Self::rgba(
            ((argb >> 16) & 0xFF) as f64 / 255.0,
            ((argb >> 8) & 0xFF) as f64 / 255.0,
            (argb & 0xFF) as f64 / 255.0,
            ((argb >> 24) & 0xFF) as f64 / 255.0,
        )
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: if alpha.is_finite() {
                alpha.clamp(0.0, 1.0)
            } else {
                self.alpha
            },
            ..self
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// On/off interval lengths in pixels, repeated along the stroke.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashPattern {
    pub intervals: SmallVec<[f64; 4]>,
    pub phase: f64,
}

impl DashPattern {
    #[must_use]
    pub fn new(line_length: f64, space_length: f64) -> Self {
        Self {
            intervals: SmallVec::from_slice(&[line_length, space_length]),
            phase: 0.0,
        }
    }

    #[must_use]
    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.intervals.is_empty()
            || self
                .intervals
                .iter()
                .any(|value| !value.is_finite() || *value < 0.0)
            || self.intervals.iter().all(|value| *value == 0.0)
        {
            return Err(ChartError::InvalidData(
                "dash intervals must be finite, >= 0 and not all zero".to_owned(),
            ));
        }
        if !self.phase.is_finite() {
            return Err(ChartError::InvalidData(
                "dash phase must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
    FillAndStroke,
}

impl PaintStyle {
    #[must_use]
    pub fn fills(self) -> bool {
        matches!(self, Self::Fill | Self::FillAndStroke)
    }

    #[must_use]
    pub fn strokes(self) -> bool {
        matches!(self, Self::Stroke | Self::FillAndStroke)
    }
}

/// How a closed shape is painted.
///
/// `FillAndStroke` fills with `color` and outlines with `stroke_color`
/// (falls back to `color` when unset).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
    pub stroke_width: f64,
    #[serde(default)]
    pub stroke_color: Option<Color>,
    #[serde(default)]
    pub cap: LineCap,
    #[serde(default)]
    pub dash: Option<DashPattern>,
}

impl Paint {
    #[must_use]
    pub fn fill(color: Color) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
            stroke_width: 1.0,
            stroke_color: None,
            cap: LineCap::Butt,
            dash: None,
        }
    }

    #[must_use]
    pub fn stroke(color: Color, stroke_width: f64) -> Self {
        Self {
            style: PaintStyle::Stroke,
            stroke_width,
            ..Self::fill(color)
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: PaintStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    #[must_use]
    pub fn with_dash(mut self, dash: Option<DashPattern>) -> Self {
        self.dash = dash;
        self
    }

    #[must_use]
    pub fn resolved_stroke_color(&self) -> Color {
        self.stroke_color.unwrap_or(self.color)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.color.validate()?;
        if let Some(stroke_color) = self.stroke_color {
            stroke_color.validate()?;
        }
        if self.style.strokes() && (!self.stroke_width.is_finite() || self.stroke_width <= 0.0) {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let Some(dash) = &self.dash {
            dash.validate()?;
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    #[serde(default)]
    pub cap: LineCap,
    #[serde(default)]
    pub dash: Option<DashPattern>,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            cap: LineCap::Butt,
            dash: None,
        }
    }

    #[must_use]
    pub fn between(from: Point, to: Point, stroke_width: f64, color: Color) -> Self {
        Self::new(from.x, from.y, to.x, to.y, stroke_width, color)
    }

    #[must_use]
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    #[must_use]
    pub fn with_dash(mut self, dash: Option<DashPattern>) -> Self {
        self.dash = dash;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let Some(dash) = &self.dash {
            dash.validate()?;
        }
        self.color.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub paint: Paint,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, paint: Paint) -> Self {
        Self {
            x,
            y,
            width,
            height,
            paint,
        }
    }

    /// Normalizes edge order so the primitive always has non-negative extent.
    #[must_use]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64, paint: Paint) -> Self {
        let (left, right) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        let (top, bottom) = if top <= bottom {
            (top, bottom)
        } else {
            (bottom, top)
        };
        Self::new(left, top, right - left, bottom - top, paint)
    }

    #[must_use]
    pub fn from_rect(rect: Rect, paint: Paint) -> Self {
        Self::from_edges(rect.left, rect.top, rect.right, rect.bottom, paint)
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(ChartError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        self.paint.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub paint: Paint,
}

impl CirclePrimitive {
    #[must_use]
    pub fn new(center: Point, radius: f64, paint: Paint) -> Self {
        Self {
            center_x: center.x,
            center_y: center.y,
            radius,
            paint,
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.center_x.is_finite() || !self.center_y.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and >= 0".to_owned(),
            ));
        }
        self.paint.validate()
    }
}

/// Circular arc; angles in degrees, 0° along +x, clockwise on screen.
///
/// With `use_center` the arc is closed through the center (a pie wedge).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcPrimitive {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub start_angle_deg: f64,
    pub sweep_angle_deg: f64,
    pub use_center: bool,
    pub paint: Paint,
}

impl ArcPrimitive {
    #[must_use]
    pub fn new(
        center: Point,
        radius: f64,
        start_angle_deg: f64,
        sweep_angle_deg: f64,
        use_center: bool,
        paint: Paint,
    ) -> Self {
        Self {
            center_x: center.x,
            center_y: center.y,
            radius,
            start_angle_deg,
            sweep_angle_deg,
            use_center,
            paint,
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.center_x.is_finite()
            || !self.center_y.is_finite()
            || !self.start_angle_deg.is_finite()
            || !self.sweep_angle_deg.is_finite()
        {
            return Err(ChartError::InvalidData(
                "arc geometry must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ChartError::InvalidData(
                "arc radius must be finite and >= 0".to_owned(),
            ));
        }
        self.paint.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        control1: Point,
        control2: Point,
        to: Point,
    },
    Close,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub commands: Vec<PathCommand>,
    pub paint: Paint,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(paint: Paint) -> Self {
        Self {
            commands: Vec::new(),
            paint,
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize, paint: Paint) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
            paint,
        }
    }

    pub fn move_to(&mut self, point: Point) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    pub fn line_to(&mut self, point: Point) {
        self.commands.push(PathCommand::LineTo(point));
    }

    pub fn cubic_to(&mut self, control1: Point, control2: Point, to: Point) {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Closed polygon through `points` in order.
    #[must_use]
    pub fn polygon(points: &[Point], paint: Paint) -> Self {
        let mut path = Self::with_capacity(points.len() + 1, paint);
        for (index, point) in points.iter().enumerate() {
            if index == 0 {
                path.move_to(*point);
            } else {
                path.line_to(*point);
            }
        }
        if !points.is_empty() {
            path.close();
        }
        path
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self.commands.first() {
            None => {
                return Err(ChartError::InvalidData(
                    "path must contain at least one command".to_owned(),
                ));
            }
            Some(PathCommand::MoveTo(_)) => {}
            Some(_) => {
                return Err(ChartError::InvalidData(
                    "path must start with a move-to command".to_owned(),
                ));
            }
        }
        for command in &self.commands {
            let finite = match command {
                PathCommand::MoveTo(point) | PathCommand::LineTo(point) => point.is_finite(),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => control1.is_finite() && control2.is_finite() && to.is_finite(),
                PathCommand::Close => true,
            };
            if !finite {
                return Err(ChartError::InvalidData(
                    "path coordinates must be finite".to_owned(),
                ));
            }
        }
        self.paint.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextHAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space; `y` is the top of the text box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
