use crate::core::{BandScale, Color, Dataset, Geometry, ThresholdClassifier};
use crate::error::HeatmapResult;

/// One colored rectangle per dataset record.
///
/// `year`, `month` (0-indexed) and `absolute_temp` are carried alongside the
/// geometry so every rendered cell stays independently verifiable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellDescriptor {
    pub geometry: Geometry,
    pub color: Color,
    pub year: i32,
    pub month: u32,
    pub absolute_temp: f64,
}

/// Projects every record to a cell descriptor, preserving input order.
///
/// A record whose year is missing from `x_scale` surfaces the scale's domain
/// error; that render pass fails as a whole.
pub fn project_cells(
    dataset: &Dataset,
    x_scale: &BandScale<i32>,
    y_scale: &BandScale<u32>,
    classifier: &ThresholdClassifier,
) -> HeatmapResult<Vec<CellDescriptor>> {
    let mut cells = Vec::with_capacity(dataset.records().len());
    for record in dataset.records() {
        let absolute_temp = dataset.absolute_temp(*record);
        cells.push(CellDescriptor {
            geometry: Geometry::new(
                x_scale.position(record.year)?,
                y_scale.position(record.month)?,
                x_scale.bandwidth(),
                y_scale.bandwidth(),
            ),
            color: classifier.classify(absolute_temp),
            year: record.year,
            month: record.month,
            absolute_temp,
        });
    }
    Ok(cells)
}
