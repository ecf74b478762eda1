use crate::error::{HeatmapError, HeatmapResult};

/// Continuous scale mapping `[domain_start, domain_end]` onto `[0, range_length]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_length: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64, range_length: f64) -> HeatmapResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(HeatmapError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_length.is_finite() || range_length <= 0.0 {
            return Err(HeatmapError::InvalidData(
                "scale range length must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_length,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn to_pixel(self, value: f64) -> HeatmapResult<f64> {
        if !value.is_finite() {
            return Err(HeatmapError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(normalized * self.range_length)
    }
}
