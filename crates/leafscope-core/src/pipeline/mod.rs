mod orchestrator;
mod types;

pub use orchestrator::VegetationPipeline;
pub use types::{PipelineOutput, PipelineStage};
