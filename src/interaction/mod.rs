use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::core::TemperatureRecord;
use crate::error::{HeatmapError, HeatmapResult};

/// Tuning for tooltip placement relative to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    pub width: f64,
    pub margin: f64,
    pub vertical_offset: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            width: 180.0,
            margin: 30.0,
            vertical_offset: 50.0,
        }
    }
}

/// Resolved tooltip position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPlacement {
    pub left: f64,
    pub top: f64,
}

impl TooltipConfig {
    /// Pure placement for one pointer-move event.
    ///
    /// The tooltip flips to the left of the cursor when it would spill past
    /// the right viewport edge; a cursor exactly at the flip threshold keeps
    /// the right-side placement.
    #[must_use]
    pub fn position(self, viewport_width: f64, cursor_x: f64, cursor_y: f64) -> TooltipPlacement {
        let threshold = viewport_width - self.width - self.margin;
        let left = if cursor_x > threshold {
            cursor_x - (self.width + self.margin)
        } else {
            cursor_x + self.margin
        };
        TooltipPlacement {
            left,
            top: cursor_y + self.vertical_offset,
        }
    }
}

/// Hover payload for one cell, preformatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub year: i32,
    pub month_name: String,
    /// Absolute temperature, one decimal.
    pub absolute_temp: String,
    /// Signed variance, one decimal, sign always shown.
    pub variance: String,
}

impl TooltipContent {
    pub fn for_record(base_temperature: f64, record: TemperatureRecord) -> HeatmapResult<Self> {
        let month_index = u8::try_from(record.month + 1)
            .ok()
            .and_then(|index| Month::try_from(index).ok())
            .ok_or_else(|| {
                HeatmapError::Validation(format!("month index {} outside 0..=11", record.month))
            })?;

        Ok(Self {
            year: record.year,
            month_name: month_index.name().to_owned(),
            absolute_temp: format!("{:.1}", base_temperature + record.variance),
            variance: format!("{:+.1}", record.variance),
        })
    }

    /// Heading line in the original `"1951 - March"` shape.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} - {}", self.year, self.month_name)
    }
}
