use tracing::{debug, warn};

use crate::core::{BandScale, Dataset, ThresholdClassifier, RD_YL_BU_11};
use crate::error::HeatmapResult;
use crate::render::{build_legend, project_cells, HeatmapFrame, Renderer};

use super::HeatmapEngineConfig;

/// Supplies the raw dataset payload.
///
/// This is the single suspension point of the pipeline; everything downstream
/// of a resolved payload runs synchronously.
pub trait DataSource {
    fn fetch(&mut self) -> HeatmapResult<String>;
}

/// Orchestrates the mapping pipeline: dataset -> scales -> classifier ->
/// cell/legend descriptors -> renderer.
pub struct HeatmapEngine<R: Renderer> {
    renderer: R,
    config: HeatmapEngineConfig,
}

impl<R: Renderer> HeatmapEngine<R> {
    pub fn new(renderer: R, config: HeatmapEngineConfig) -> HeatmapResult<Self> {
        config.validate()?;
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn config(&self) -> HeatmapEngineConfig {
        self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Fetches, validates and renders one dataset.
    ///
    /// A fetch failure is reported once and ends the pass without rendering;
    /// the engine stays usable. Validation failures propagate to the caller
    /// before any partial render state exists.
    pub fn refresh(&mut self, source: &mut dyn DataSource) -> HeatmapResult<Option<HeatmapFrame>> {
        let payload = match source.fetch() {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "dataset fetch failed; skipping render");
                return Ok(None);
            }
        };

        let dataset = Dataset::from_json_str(&payload)?;
        let frame = self.render_dataset(&dataset)?;
        Ok(Some(frame))
    }

    /// Synchronous pipeline over an already-validated dataset.
    pub fn render_dataset(&mut self, dataset: &Dataset) -> HeatmapResult<HeatmapFrame> {
        let x_scale = BandScale::build(
            dataset.year_domain(),
            self.config.inner_width(),
            self.config.x_outer_padding,
        )?;
        let y_scale = BandScale::months(self.config.inner_height())?;

        let (min_temp, max_temp) = dataset.temperature_range();
        let classifier = ThresholdClassifier::build(min_temp, max_temp, &RD_YL_BU_11)?;

        let cells = project_cells(dataset, &x_scale, &y_scale, &classifier)?;
        let legend = build_legend(
            &classifier,
            self.config.legend_width,
            self.config.legend_swatch_height,
        )?;
        debug!(
            records = dataset.records().len(),
            years = x_scale.len(),
            "projected heatmap dataset"
        );

        let frame = HeatmapFrame::new(self.config.viewport)
            .with_cells(cells)
            .with_legend(legend);
        self.renderer.render(&frame)?;
        Ok(frame)
    }
}
