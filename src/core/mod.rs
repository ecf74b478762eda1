pub mod band_scale;
pub mod linear_scale;
pub mod palette;
pub mod threshold;
pub mod types;

pub use band_scale::BandScale;
pub use linear_scale::LinearScale;
pub use palette::{Color, RD_YL_BU_11};
pub use threshold::ThresholdClassifier;
pub use types::{Dataset, Geometry, TemperatureRecord, Viewport, MONTHS_PER_YEAR};
