use crate::error::{HeatmapError, HeatmapResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    pub fn validate(self) -> HeatmapResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(HeatmapError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// 11-class `RdYlBu` diverging palette, reversed so index 0 is the coldest blue
/// and index 10 the hottest red. The bucket count of the classifier is fixed by
/// this palette's length.
pub const RD_YL_BU_11: [Color; 11] = [
    Color::from_rgb8(0x31, 0x36, 0x95),
    Color::from_rgb8(0x45, 0x75, 0xb4),
    Color::from_rgb8(0x74, 0xad, 0xd1),
    Color::from_rgb8(0xab, 0xd9, 0xe9),
    Color::from_rgb8(0xe0, 0xf3, 0xf8),
    Color::from_rgb8(0xff, 0xff, 0xbf),
    Color::from_rgb8(0xfe, 0xe0, 0x90),
    Color::from_rgb8(0xfd, 0xae, 0x61),
    Color::from_rgb8(0xf4, 0x6d, 0x43),
    Color::from_rgb8(0xd7, 0x30, 0x27),
    Color::from_rgb8(0xa5, 0x00, 0x26),
];
