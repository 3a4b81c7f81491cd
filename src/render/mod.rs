mod frame;
mod null_renderer;
mod primitives;
mod surface;

pub use frame::{DrawCommand, FRAME_JSON_SCHEMA_V1, RenderFrame, RenderFrameJsonContractV1};
pub use null_renderer::NullRenderer;
pub use primitives::{
    ArcPrimitive, CirclePrimitive, Color, DashPattern, LineCap, LinePrimitive, Paint,
    PaintStyle, PathCommand, PathPrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};
pub use surface::{DrawSurface, FontMetrics};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
