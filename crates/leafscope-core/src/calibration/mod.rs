pub mod config;
pub mod tier;

pub use config::{Calibration, CalibrationConfig};
pub use tier::{ColorRange, HealthTier, TierProfile};
