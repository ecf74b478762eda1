use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{HeatmapError, HeatmapResult};
use crate::interaction::TooltipConfig;

/// Chart margins in pixels around the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 30.0,
            right: 10.0,
            bottom: 150.0,
            left: 120.0,
        }
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load heatmap
/// setup without inventing their own ad-hoc format. Defaults carry the layout
/// constants of the reference chart (1200x550 outer, 400px-wide legend).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_x_outer_padding")]
    pub x_outer_padding: f64,
    #[serde(default = "default_legend_width")]
    pub legend_width: f64,
    #[serde(default = "default_legend_swatch_height")]
    pub legend_swatch_height: f64,
    #[serde(default)]
    pub tooltip: TooltipConfig,
}

fn default_x_outer_padding() -> f64 {
    0.05
}

fn default_legend_width() -> f64 {
    400.0
}

fn default_legend_swatch_height() -> f64 {
    300.0 / 11.0
}

impl Default for HeatmapEngineConfig {
    fn default() -> Self {
        Self::new(Viewport::new(1200, 550))
    }
}

impl HeatmapEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            x_outer_padding: default_x_outer_padding(),
            legend_width: default_legend_width(),
            legend_swatch_height: default_legend_swatch_height(),
            tooltip: TooltipConfig::default(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipConfig) -> Self {
        self.tooltip = tooltip;
        self
    }

    /// Plot width inside the margins.
    #[must_use]
    pub fn inner_width(self) -> f64 {
        f64::from(self.viewport.width) - self.margins.left - self.margins.right
    }

    /// Plot height inside the margins.
    #[must_use]
    pub fn inner_height(self) -> f64 {
        f64::from(self.viewport.height) - self.margins.top - self.margins.bottom
    }

    pub fn validate(self) -> HeatmapResult<()> {
        if !self.viewport.is_valid() {
            return Err(HeatmapError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for (name, value) in [
            ("top", self.margins.top),
            ("right", self.margins.right),
            ("bottom", self.margins.bottom),
            ("left", self.margins.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(HeatmapError::InvalidData(format!(
                    "margin `{name}` must be finite and >= 0"
                )));
            }
        }
        if self.inner_width() <= 0.0 || self.inner_height() <= 0.0 {
            return Err(HeatmapError::InvalidData(
                "margins leave no plot area inside the viewport".to_owned(),
            ));
        }
        if !self.x_outer_padding.is_finite() || !(0.0..0.5).contains(&self.x_outer_padding) {
            return Err(HeatmapError::InvalidData(
                "x outer padding must be in [0, 0.5)".to_owned(),
            ));
        }
        if !self.legend_width.is_finite() || self.legend_width <= 0.0 {
            return Err(HeatmapError::InvalidData(
                "legend width must be finite and > 0".to_owned(),
            ));
        }
        if !self.legend_swatch_height.is_finite() || self.legend_swatch_height <= 0.0 {
            return Err(HeatmapError::InvalidData(
                "legend swatch height must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}
