mod cells;
mod frame;
mod legend;
mod null_renderer;

pub use cells::{project_cells, CellDescriptor};
pub use frame::HeatmapFrame;
pub use legend::{build_legend, LegendLayout, LegendSwatch, LegendTick};
pub use null_renderer::NullRenderer;

use crate::error::HeatmapResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `HeatmapFrame` so
/// drawing code remains isolated from the mapping layer.
pub trait Renderer {
    fn render(&mut self, frame: &HeatmapFrame) -> HeatmapResult<()>;
}
