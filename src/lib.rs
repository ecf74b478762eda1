//! heatmap-rs: data-to-visual mapping core for a temperature-anomaly heatmap.
//!
//! This crate turns a dataset of monthly temperature anomalies into discrete
//! pixel geometry and color classification: cell rectangles, legend swatch
//! extents and tooltip placement. Drawing surfaces stay behind the `Renderer`
//! trait and dataset acquisition behind `DataSource`, so the mapping layer is
//! testable without any rendering backend.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{DataSource, HeatmapEngine, HeatmapEngineConfig};
pub use error::{HeatmapError, HeatmapResult};
