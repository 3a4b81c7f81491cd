//! chart-canvas: chart rendering over an abstract 2D drawing surface.
//!
//! Datasets go in, drawing commands come out. `core` maps data to pixels,
//! `api` lays out axes and legends and draws every chart kind, and `render`
//! records the commands and replays them on a backend.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartFrameConfig, ChartPayload};
pub use error::{ChartError, ChartResult};
