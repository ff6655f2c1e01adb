pub mod calibration;
pub mod color;
pub mod consts;
pub mod detection;
pub mod error;
pub mod filters;
pub mod frame;
pub mod health;
pub mod io;
pub mod pipeline;
pub mod visualize;

pub use calibration::{Calibration, CalibrationConfig, HealthTier};
pub use error::{LeafscopeError, Result};
pub use frame::ColorFrame;
pub use health::{AnalysisResult, AnalysisStatus};
pub use pipeline::{PipelineOutput, VegetationPipeline};
