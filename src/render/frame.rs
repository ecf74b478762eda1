use crate::core::Viewport;
use crate::error::{HeatmapError, HeatmapResult};
use crate::render::{CellDescriptor, LegendLayout};

/// Backend-agnostic scene for one heatmap draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapFrame {
    pub viewport: Viewport,
    pub cells: Vec<CellDescriptor>,
    pub legend: LegendLayout,
}

impl HeatmapFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            cells: Vec::new(),
            legend: LegendLayout::default(),
        }
    }

    #[must_use]
    pub fn with_cells(mut self, cells: Vec<CellDescriptor>) -> Self {
        self.cells = cells;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendLayout) -> Self {
        self.legend = legend;
        self
    }

    pub fn validate(&self) -> HeatmapResult<()> {
        if !self.viewport.is_valid() {
            return Err(HeatmapError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for cell in &self.cells {
            cell.geometry.validate()?;
            cell.color.validate()?;
        }
        for swatch in &self.legend.swatches {
            swatch.geometry.validate()?;
            swatch.color.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() && self.legend.swatches.is_empty()
    }
}
