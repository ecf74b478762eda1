use crate::core::{Color, Geometry, LinearScale, ThresholdClassifier};
use crate::error::{HeatmapError, HeatmapResult};

/// One legend rectangle plus the bucket bounds it was computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendSwatch {
    pub geometry: Geometry,
    pub color: Color,
    pub domain_low: f64,
    pub domain_high: f64,
}

/// Axis tick on the legend's own scale: a breakpoint value and its pixel offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendTick {
    pub value: f64,
    pub position: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LegendLayout {
    pub swatches: Vec<LegendSwatch>,
    pub ticks: Vec<LegendTick>,
}

/// Maps every classifier bucket onto a swatch along a `[0, legend_width]`
/// linear axis. Swatch widths sum to `legend_width` and the interior
/// breakpoints become the legend's axis ticks.
///
/// A degenerate classifier yields a single full-width swatch and no ticks.
pub fn build_legend(
    classifier: &ThresholdClassifier,
    legend_width: f64,
    swatch_height: f64,
) -> HeatmapResult<LegendLayout> {
    if !legend_width.is_finite() || legend_width <= 0.0 {
        return Err(HeatmapError::InvalidData(
            "legend width must be finite and > 0".to_owned(),
        ));
    }
    if !swatch_height.is_finite() || swatch_height <= 0.0 {
        return Err(HeatmapError::InvalidData(
            "legend swatch height must be finite and > 0".to_owned(),
        ));
    }

    if classifier.is_degenerate() {
        let color = classifier.palette()[0];
        return Ok(LegendLayout {
            swatches: vec![LegendSwatch {
                geometry: Geometry::new(0.0, 0.0, legend_width, swatch_height),
                color,
                domain_low: classifier.min(),
                domain_high: classifier.max(),
            }],
            ticks: Vec::new(),
        });
    }

    let scale = LinearScale::new(classifier.min(), classifier.max(), legend_width)?;

    let mut swatches = Vec::with_capacity(classifier.palette().len());
    for color in classifier.palette() {
        let (domain_low, domain_high) = classifier.bucket_extent(*color)?;
        let x = scale.to_pixel(domain_low)?;
        let width = scale.to_pixel(domain_high)? - x;
        swatches.push(LegendSwatch {
            geometry: Geometry::new(x, 0.0, width, swatch_height),
            color: *color,
            domain_low,
            domain_high,
        });
    }

    let mut ticks = Vec::with_capacity(classifier.breakpoints().len());
    for value in classifier.breakpoints() {
        ticks.push(LegendTick {
            value: *value,
            position: scale.to_pixel(*value)?,
        });
    }

    Ok(LegendLayout { swatches, ticks })
}
