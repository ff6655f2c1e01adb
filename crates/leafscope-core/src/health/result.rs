use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calibration::HealthTier;

/// Message carried by a result with no vegetation.
pub const NO_VEGETATION_MESSAGE: &str = "No living vegetation found in the image.";

/// Outcome of a health analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisStatus {
    Complete,
    /// The vegetation mask was empty. Not an error.
    NoDetection,
}

impl std::fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Complete => write!(f, "COMPLETE"),
            Self::NoDetection => write!(f, "NO DETECTION"),
        }
    }
}

/// Health analysis of one false-colored frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub status: AnalysisStatus,
    /// Number of pixels in the vegetation mask.
    pub vegetation_area: usize,
    /// `100 * vegetation_area / (width * height)`.
    pub coverage_percentage: f64,
    /// Share of vegetation pixels in each scoring tier, in percent.
    pub tier_percentages: BTreeMap<HealthTier, f64>,
    /// Weighted, target-normalized score in [0, 100].
    pub health_score: f64,
    /// One line per tier, healthiest first.
    pub analysis: String,
}

impl AnalysisResult {
    pub fn no_detection() -> Self {
        Self {
            status: AnalysisStatus::NoDetection,
            vegetation_area: 0,
            coverage_percentage: 0.0,
            tier_percentages: BTreeMap::new(),
            health_score: 0.0,
            analysis: NO_VEGETATION_MESSAGE.to_string(),
        }
    }

    pub fn is_detection(&self) -> bool {
        self.status == AnalysisStatus::Complete
    }
}

/// Plain-text report.
impl std::fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            AnalysisStatus::NoDetection => {
                writeln!(f, "Status: {}", self.status)?;
                write!(f, "{}", self.analysis)
            }
            AnalysisStatus::Complete => {
                writeln!(f, "Plant Coverage: {:.1}% of image", self.coverage_percentage)?;
                writeln!(f, "Overall Health Score: {:.1}/100", self.health_score)?;
                writeln!(f)?;
                writeln!(f, "Analysis:")?;
                write!(f, "{}", self.analysis)
            }
        }
    }
}
