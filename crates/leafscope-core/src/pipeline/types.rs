use crate::frame::ColorFrame;
use crate::health::AnalysisResult;

/// Pipeline processing stage, used in log events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Stretching,
    Indexing,
    FalseColoring,
    Segmenting,
    Scoring,
    Outlining,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stretching => write!(f, "Stretching contrast"),
            Self::Indexing => write!(f, "Computing vegetation index"),
            Self::FalseColoring => write!(f, "Applying false color"),
            Self::Segmenting => write!(f, "Segmenting vegetation"),
            Self::Scoring => write!(f, "Scoring health"),
            Self::Outlining => write!(f, "Drawing outline"),
        }
    }
}

/// Everything one frame produces.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    /// Palette-mapped vegetation index.
    pub false_color: ColorFrame,
    pub analysis: AnalysisResult,
    /// Vegetation outline drawn over the input frame.
    pub overlay: ColorFrame,
}
