use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::core::types::MONTHS_PER_YEAR;
use crate::error::{HeatmapError, HeatmapResult};

/// Discrete-domain band scale: one fixed-width slot per domain value along a
/// continuous pixel range, with a configurable outer padding fraction reserved
/// on each side and no padding between bands.
///
/// Built once from resolved inputs and immutable afterwards; there is no
/// post-hoc domain assignment.
#[derive(Debug, Clone)]
pub struct BandScale<T> {
    index: IndexMap<T, usize>,
    range_length: f64,
    outer_padding: f64,
}

impl<T: Copy + Eq + Hash + Debug> BandScale<T> {
    pub fn build(
        domain: impl IntoIterator<Item = T>,
        range_length: f64,
        outer_padding: f64,
    ) -> HeatmapResult<Self> {
        if !range_length.is_finite() || range_length <= 0.0 {
            return Err(HeatmapError::InvalidData(
                "band scale range length must be finite and > 0".to_owned(),
            ));
        }
        if !outer_padding.is_finite() || !(0.0..0.5).contains(&outer_padding) {
            return Err(HeatmapError::InvalidData(
                "band scale outer padding must be in [0, 0.5)".to_owned(),
            ));
        }

        let mut index = IndexMap::new();
        for value in domain {
            let slot = index.len();
            if index.insert(value, slot).is_some() {
                return Err(HeatmapError::InvalidData(format!(
                    "duplicate band scale domain value: {value:?}"
                )));
            }
        }
        if index.is_empty() {
            return Err(HeatmapError::InvalidData(
                "band scale domain must not be empty".to_owned(),
            ));
        }

        Ok(Self {
            index,
            range_length,
            outer_padding,
        })
    }

    /// Pixel offset of the band start for `value`.
    ///
    /// A lookup outside the domain is a caller bug (e.g. a record whose year was
    /// never registered) and surfaces as `HeatmapError::Domain`.
    pub fn position(&self, value: T) -> HeatmapResult<f64> {
        let slot = self.index.get(&value).copied().ok_or_else(|| {
            HeatmapError::Domain(format!("value {value:?} is not in the band scale domain"))
        })?;
        Ok(self.outer_padding * self.range_length + slot as f64 * self.bandwidth())
    }

    /// Uniform band width: `L * (1 - 2 * outer_padding) / |domain|`.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.range_length * (1.0 - 2.0 * self.outer_padding) / self.index.len() as f64
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn domain(&self) -> impl Iterator<Item = T> + '_ {
        self.index.keys().copied()
    }
}

impl BandScale<u32> {
    /// Month scale over the fixed calendar domain `0..=11`, independent of the
    /// months actually present in a dataset.
    pub fn months(range_length: f64) -> HeatmapResult<Self> {
        Self::build(0..MONTHS_PER_YEAR, range_length, 0.0)
    }
}
