use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, HeatmapResult};

pub const MONTHS_PER_YEAR: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pixel-space rectangle produced by the mapping layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Geometry {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn validate(self) -> HeatmapResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(HeatmapError::InvalidData(
                "geometry origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0
        {
            return Err(HeatmapError::InvalidData(
                "geometry size must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One observed month. `month` is 0-indexed (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRecord {
    pub year: i32,
    pub month: u32,
    pub variance: f64,
}

impl TemperatureRecord {
    #[must_use]
    pub const fn new(year: i32, month: u32, variance: f64) -> Self {
        Self {
            year,
            month,
            variance,
        }
    }
}

/// Validated anomaly dataset: one base temperature plus per-month variances.
///
/// Built once per successful fetch and immutable afterwards. Every derived
/// entity (scales, classifier, descriptors) is recomputed wholesale from a new
/// `Dataset`; there are no incremental updates.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    base_temperature: f64,
    records: Vec<TemperatureRecord>,
}

impl Dataset {
    /// Validates and wraps a record sequence. Fails fast before any scale or
    /// classifier construction sees the data.
    pub fn new(base_temperature: f64, records: Vec<TemperatureRecord>) -> HeatmapResult<Self> {
        if !base_temperature.is_finite() {
            return Err(HeatmapError::Validation(
                "base temperature must be finite".to_owned(),
            ));
        }
        if records.is_empty() {
            return Err(HeatmapError::Validation(
                "dataset must contain at least one record".to_owned(),
            ));
        }
        for record in &records {
            if record.month >= MONTHS_PER_YEAR {
                return Err(HeatmapError::Validation(format!(
                    "month index {} outside 0..=11 for year {}",
                    record.month, record.year
                )));
            }
            if !record.variance.is_finite() {
                return Err(HeatmapError::Validation(format!(
                    "variance must be finite for year {} month {}",
                    record.year, record.month
                )));
            }
        }

        Ok(Self {
            base_temperature,
            records,
        })
    }

    #[must_use]
    pub fn base_temperature(&self) -> f64 {
        self.base_temperature
    }

    #[must_use]
    pub fn records(&self) -> &[TemperatureRecord] {
        &self.records
    }

    /// Absolute temperature of one record: `base + variance`, exact IEEE sum.
    #[must_use]
    pub fn absolute_temp(&self, record: TemperatureRecord) -> f64 {
        self.base_temperature + record.variance
    }

    /// Distinct years present in the records, ascending.
    #[must_use]
    pub fn year_domain(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|record| record.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Observed absolute temperature range over all records.
    #[must_use]
    pub fn temperature_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for record in &self.records {
            let temp = self.absolute_temp(*record);
            min = min.min(temp);
            max = max.max(temp);
        }
        (min, max)
    }

    /// Years carrying an x-axis tick: every even decade.
    #[must_use]
    pub fn decade_years(&self) -> Vec<i32> {
        self.year_domain()
            .into_iter()
            .filter(|year| year % 10 == 0)
            .collect()
    }

    /// Header line for hosts: observed year span plus base temperature.
    #[must_use]
    pub fn summary(&self) -> String {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => format!(
                "{} - {}: base temperature {}\u{2103}",
                first.year, last.year, self.base_temperature
            ),
            _ => String::new(),
        }
    }
}
