use serde::{Deserialize, Serialize};

use crate::core::{Rect, Size};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, CirclePrimitive, DrawSurface, FontMetrics, LinePrimitive, PathPrimitive,
    RectPrimitive, TextPrimitive,
};

pub const FRAME_JSON_SCHEMA_V1: u32 = 1;

/// One recorded drawing call, kept in issue order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Line(LinePrimitive),
    Rect(RectPrimitive),
    Circle(CirclePrimitive),
    Arc(ArcPrimitive),
    Path(PathPrimitive),
    Text(TextPrimitive),
    PushClip(Rect),
    PopClip,
}

/// Backend-agnostic scene for one chart draw pass.
///
/// `RenderFrame` is the recording `DrawSurface`: chart code draws into it,
/// and a `Renderer` replays it afterwards. Draw order matters (background
/// before data, data before legend), so commands live in one ordered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub size: Size,
    pub commands: Vec<DrawCommand>,
    #[serde(default)]
    pub metrics: FontMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: RenderFrame,
}

impl RenderFrame {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
            metrics: FontMetrics::default(),
        }
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: FontMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size)
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    pub fn arcs(&self) -> impl Iterator<Item = &ArcPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Arc(arc) => Some(arc),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Path(path) => Some(path),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    /// Number of commands that put pixels on the surface (clip markers excluded).
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| !matches!(command, DrawCommand::PushClip(_) | DrawCommand::PopClip))
            .count()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.size.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.size.width,
                height: self.size.height,
            });
        }

        let mut clip_depth = 0_usize;
        for command in &self.commands {
            match command {
                DrawCommand::Line(line) => line.validate()?,
                DrawCommand::Rect(rect) => rect.validate()?,
                DrawCommand::Circle(circle) => circle.validate()?,
                DrawCommand::Arc(arc) => arc.validate()?,
                DrawCommand::Path(path) => path.validate()?,
                DrawCommand::Text(text) => text.validate()?,
                DrawCommand::PushClip(rect) => {
                    if !rect.is_finite() {
                        return Err(ChartError::InvalidData(
                            "clip rect must be finite".to_owned(),
                        ));
                    }
                    clip_depth += 1;
                }
                DrawCommand::PopClip => {
                    clip_depth = clip_depth.checked_sub(1).ok_or_else(|| {
                        ChartError::InvalidData("clip pop without matching push".to_owned())
                    })?;
                }
            }
        }
        if clip_depth != 0 {
            return Err(ChartError::InvalidData(format!(
                "{clip_depth} clip region(s) left open"
            )));
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shape_count() == 0
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        let payload = RenderFrameJsonContractV1 {
            schema_version: FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize render frame: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: RenderFrameJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!("failed to parse render frame json: {e}"))
        })?;
        if payload.schema_version != FRAME_JSON_SCHEMA_V1 {
            return Err(ChartError::Serialization(format!(
                "unsupported render frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}

impl DrawSurface for RenderFrame {
    fn draw_line(&mut self, line: LinePrimitive) {
        self.commands.push(DrawCommand::Line(line));
    }

    fn draw_rect(&mut self, rect: RectPrimitive) {
        self.commands.push(DrawCommand::Rect(rect));
    }

    fn draw_circle(&mut self, circle: CirclePrimitive) {
        self.commands.push(DrawCommand::Circle(circle));
    }

    fn draw_arc(&mut self, arc: ArcPrimitive) {
        self.commands.push(DrawCommand::Arc(arc));
    }

    fn draw_path(&mut self, path: PathPrimitive) {
        self.commands.push(DrawCommand::Path(path));
    }

    fn draw_text(&mut self, text: TextPrimitive) {
        self.commands.push(DrawCommand::Text(text));
    }

    fn measure_text(&self, text: &str, font_size_px: f64) -> Size {
        self.metrics.measure(text, font_size_px)
    }

    fn push_clip(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.commands.push(DrawCommand::PopClip);
    }
}
