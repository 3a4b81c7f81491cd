use tracing::debug;

use crate::core::Size;
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::chart_pipeline::{
    draw_bar_chart, draw_bubble_chart, draw_candle_chart, draw_combined_chart,
    draw_horizontal_bar_chart, draw_line_chart, draw_pie_chart, draw_radar_chart,
    draw_scatter_chart,
};
use super::engine_config::{ChartEngineConfig, ChartPayload};

/// Owns a renderer, the chart configuration and the current payload.
///
/// Nothing is cached between passes: every call to [`ChartEngine::build_render_frame`]
/// lays the chart out again from the current inputs.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    payload: ChartPayload,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            payload: ChartPayload::Empty,
        })
    }

    pub fn set_payload(&mut self, payload: ChartPayload) {
        debug!(kind = payload.kind(), "chart payload replaced");
        self.payload = payload;
    }

    pub fn clear(&mut self) {
        self.payload = ChartPayload::Empty;
    }

    #[must_use]
    pub fn payload(&self) -> &ChartPayload {
        &self.payload
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    /// Replaces the configuration; the old one is kept when the new one is invalid.
    pub fn set_config(&mut self, config: ChartEngineConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn resize(&mut self, canvas: Size) -> ChartResult<()> {
        let config = ChartEngineConfig {
            canvas,
            ..self.config.clone()
        };
        self.set_config(config)
    }

    #[must_use]
    pub fn canvas(&self) -> Size {
        self.config.canvas
    }

    /// Records one full draw pass at animation `phase`.
    #[must_use]
    pub fn build_render_frame(&self, phase: f64) -> RenderFrame {
        let canvas = self.config.canvas;
        let frame_config = &self.config.frame;
        let mut frame = RenderFrame::new(canvas).with_metrics(self.config.metrics);
        let surface = &mut frame;
        match &self.payload {
            ChartPayload::Empty => {}
            ChartPayload::Line { data } => draw_line_chart(surface, canvas, data, frame_config, phase),
            ChartPayload::Bar { data } => draw_bar_chart(surface, canvas, data, frame_config, phase),
            ChartPayload::HorizontalBar { data } => {
                draw_horizontal_bar_chart(surface, canvas, data, frame_config, phase);
            }
            ChartPayload::Scatter { data } => {
                draw_scatter_chart(surface, canvas, data, frame_config, phase);
            }
            ChartPayload::Bubble { data } => {
                draw_bubble_chart(surface, canvas, data, frame_config, phase);
            }
            ChartPayload::Candle { data } => {
                draw_candle_chart(surface, canvas, data, frame_config, phase);
            }
            ChartPayload::Pie { data, config } => {
                draw_pie_chart(surface, canvas, data, frame_config, config, phase);
            }
            ChartPayload::Radar { data, config } => {
                draw_radar_chart(surface, canvas, data, frame_config, config, phase);
            }
            ChartPayload::Combined { data, order } => {
                draw_combined_chart(surface, canvas, data, order, frame_config, phase);
            }
        }
        frame
    }

    pub fn render(&mut self, phase: f64) -> ChartResult<()> {
        let frame = self.build_render_frame(phase);
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(feature = "cairo-backend")]
impl<R> ChartEngine<R>
where
    R: Renderer + crate::render::CairoContextRenderer,
{
    /// Draws the current pass straight onto a host-owned Cairo context.
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context, phase: f64) -> ChartResult<()> {
        let frame = self.build_render_frame(phase);
        self.renderer.render_on_cairo_context(context, &frame)
    }
}
