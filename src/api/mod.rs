mod dataset_json;
mod engine;
mod engine_config;

pub use engine::{DataSource, HeatmapEngine};
pub use engine_config::{HeatmapEngineConfig, Margins};
