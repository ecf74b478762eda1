use serde::Deserialize;

use crate::core::{Dataset, TemperatureRecord};
use crate::error::{HeatmapError, HeatmapResult};

/// Wire shape of the source dataset. Months are 1-indexed on the wire and
/// converted to 0-indexed before any scale sees them.
#[derive(Debug, Deserialize)]
struct WireDataset {
    #[serde(rename = "baseTemperature")]
    base_temperature: f64,
    #[serde(rename = "monthlyVariance")]
    monthly_variance: Vec<WireRecord>,
}

#[derive(Debug, Deserialize)]
struct WireRecord {
    year: i32,
    month: u32,
    variance: f64,
}

impl Dataset {
    pub fn from_json_str(input: &str) -> HeatmapResult<Self> {
        let wire: WireDataset = serde_json::from_str(input).map_err(|e| {
            HeatmapError::Validation(format!("failed to parse dataset json payload: {e}"))
        })?;

        let records = wire
            .monthly_variance
            .into_iter()
            .map(|record| {
                if !(1..=12).contains(&record.month) {
                    return Err(HeatmapError::Validation(format!(
                        "wire month {} outside 1..=12 for year {}",
                        record.month, record.year
                    )));
                }
                Ok(TemperatureRecord::new(
                    record.year,
                    record.month - 1,
                    record.variance,
                ))
            })
            .collect::<HeatmapResult<Vec<_>>>()?;

        Self::new(wire.base_temperature, records)
    }
}
