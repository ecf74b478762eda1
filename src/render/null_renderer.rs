use crate::error::HeatmapResult;
use crate::render::{HeatmapFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_cell_count: usize,
    pub last_swatch_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &HeatmapFrame) -> HeatmapResult<()> {
        frame.validate()?;
        self.last_cell_count = frame.cells.len();
        self.last_swatch_count = frame.legend.swatches.len();
        Ok(())
    }
}
