pub mod result;
pub mod scoring;

pub use result::{AnalysisResult, AnalysisStatus};
pub use scoring::score_health;
