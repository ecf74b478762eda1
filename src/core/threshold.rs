use smallvec::SmallVec;

use crate::core::palette::Color;
use crate::error::{HeatmapError, HeatmapResult};

/// Partitions the observed temperature range into one contiguous bucket per
/// palette color.
///
/// With `n` colors the classifier carries `n - 1` strictly increasing interior
/// breakpoints at `min + i * (max - min) / n`. Classification is a pure
/// function of the value and the build inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdClassifier {
    min: f64,
    max: f64,
    breakpoints: SmallVec<[f64; 16]>,
    palette: Vec<Color>,
}

impl ThresholdClassifier {
    pub fn build(min: f64, max: f64, palette: &[Color]) -> HeatmapResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(HeatmapError::InvalidData(
                "classifier bounds must be finite".to_owned(),
            ));
        }
        if min > max {
            return Err(HeatmapError::InvalidData(
                "classifier min must be <= max".to_owned(),
            ));
        }
        if palette.is_empty() {
            return Err(HeatmapError::InvalidData(
                "classifier palette must not be empty".to_owned(),
            ));
        }

        // A degenerate range (max == min) carries no breakpoints at all, so
        // every value lands in the first bucket and no zero step is ever
        // divided through.
        let mut breakpoints = SmallVec::new();
        if min < max {
            let step = (max - min) / palette.len() as f64;
            for i in 1..palette.len() {
                breakpoints.push(min + i as f64 * step);
            }
        }

        Ok(Self {
            min,
            max,
            breakpoints,
            palette: palette.to_vec(),
        })
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Interior bucket boundaries, strictly increasing. Empty when degenerate.
    #[must_use]
    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    #[must_use]
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// True when the build range collapsed to a single point.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Color of the bucket containing `value`: the bucket index is the number
    /// of breakpoints `<= value`. Values below the first breakpoint take the
    /// first color, values at or above the last take the last color.
    #[must_use]
    pub fn classify(&self, value: f64) -> Color {
        let bucket = self.breakpoints.partition_point(|edge| *edge <= value);
        self.palette[bucket]
    }

    /// Inverse lookup: domain bounds of the bucket rendered with `color`.
    ///
    /// The outermost buckets report the finite build `min`/`max` rather than
    /// open-ended sentinels, so legend axes stay finite.
    pub fn bucket_extent(&self, color: Color) -> HeatmapResult<(f64, f64)> {
        let bucket = self
            .palette
            .iter()
            .position(|candidate| *candidate == color)
            .ok_or_else(|| {
                HeatmapError::Domain("color is not part of the classifier palette".to_owned())
            })?;

        if self.is_degenerate() {
            if bucket == 0 {
                return Ok((self.min, self.max));
            }
            return Err(HeatmapError::Domain(
                "degenerate classifier carries a single bucket".to_owned(),
            ));
        }

        let low = if bucket == 0 {
            self.min
        } else {
            self.breakpoints[bucket - 1]
        };
        let high = if bucket == self.palette.len() - 1 {
            self.max
        } else {
            self.breakpoints[bucket]
        };
        Ok((low, high))
    }
}
