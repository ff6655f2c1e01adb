use tracing::debug;

use crate::calibration::{Calibration, CalibrationConfig};
use crate::color::index::vegetation_index;
use crate::color::palette::apply_palette;
use crate::detection::segment::{segment_vegetation, VegetationMask};
use crate::error::Result;
use crate::filters::contrast::contrast_stretch_with_policy;
use crate::frame::{ColorFrame, IndexFrame};
use crate::health::scoring::score_matched;
use crate::health::AnalysisResult;
use crate::visualize::overlay::draw_overlay;

use super::types::{PipelineOutput, PipelineStage};

/// Frame-to-score pipeline with a fixed calibration.
///
/// Holds no mutable state, so one instance can be shared across threads and
/// every call is independent of the others.
#[derive(Clone, Debug)]
pub struct VegetationPipeline {
    calibration: Calibration,
}

impl VegetationPipeline {
    /// Validate `config` and build a pipeline from it.
    pub fn new(config: CalibrationConfig) -> Result<Self> {
        Ok(Self {
            calibration: Calibration::new(config)?,
        })
    }

    pub fn with_calibration(calibration: Calibration) -> Self {
        Self { calibration }
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Stretch the BGR frame, compute the index and stretch the index.
    ///
    /// The two stretches are independent calls; each computes its own
    /// percentiles.
    pub fn stretched_index(&self, frame: &ColorFrame) -> Result<IndexFrame> {
        let policy = self.calibration.on_degenerate;

        debug!(
            stage = %PipelineStage::Stretching,
            width = frame.width(),
            height = frame.height(),
            "Stage started"
        );
        let stretched = contrast_stretch_with_policy(&frame.to_f64(), policy)?;

        debug!(stage = %PipelineStage::Indexing, "Stage started");
        let index = vegetation_index(&stretched)?;

        debug!(stage = %PipelineStage::Stretching, "Stage started");
        let stretched_index = contrast_stretch_with_policy(&index.data, policy)?;

        Ok(IndexFrame::new(stretched_index))
    }

    /// BGR frame -> false-colored vegetation index.
    pub fn process(&self, frame: &ColorFrame) -> Result<ColorFrame> {
        let index = self.stretched_index(frame)?;
        debug!(stage = %PipelineStage::FalseColoring, "Stage started");
        Ok(apply_palette(&index, &self.calibration.palette))
    }

    /// Vegetation mask of a false-colored frame.
    pub fn segment(&self, false_color: &ColorFrame) -> VegetationMask {
        debug!(stage = %PipelineStage::Segmenting, "Stage started");
        segment_vegetation(false_color, &self.calibration)
    }

    /// Segment and score a false-colored frame.
    pub fn analyze(&self, false_color: &ColorFrame) -> AnalysisResult {
        let mask = self.segment(false_color);
        debug!(stage = %PipelineStage::Scoring, "Stage started");
        score_matched(false_color, &mask, &self.calibration)
    }

    /// Segment a false-colored frame and outline the vegetation on `display`.
    ///
    /// `display` must have the same size as `false_color`.
    pub fn visualize(&self, false_color: &ColorFrame, display: &ColorFrame) -> Result<ColorFrame> {
        let mask = self.segment(false_color);
        debug!(stage = %PipelineStage::Outlining, "Stage started");
        draw_overlay(display, &mask, &self.calibration.overlay)
    }

    /// Full pass over one frame, segmenting once for both the score and the
    /// outline. The outline is drawn over `frame` itself.
    pub fn run(&self, frame: &ColorFrame) -> Result<PipelineOutput> {
        let false_color = self.process(frame)?;
        let mask = self.segment(&false_color);

        debug!(stage = %PipelineStage::Scoring, "Stage started");
        let analysis = score_matched(&false_color, &mask, &self.calibration);

        debug!(stage = %PipelineStage::Outlining, "Stage started");
        let overlay = draw_overlay(frame, &mask, &self.calibration.overlay)?;

        Ok(PipelineOutput {
            false_color,
            analysis,
            overlay,
        })
    }
}

impl Default for VegetationPipeline {
    fn default() -> Self {
        Self::with_calibration(Calibration::default())
    }
}
