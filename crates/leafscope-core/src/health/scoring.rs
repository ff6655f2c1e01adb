use std::collections::BTreeMap;

use tracing::info;

use crate::calibration::{Calibration, HealthTier};
use crate::detection::segment::VegetationMask;
use crate::error::Result;
use crate::frame::ColorFrame;

use super::result::{AnalysisResult, AnalysisStatus};

/// Count mask pixels falling in each scoring tier.
///
/// Tier ranges never overlap, so each pixel lands in at most one tier.
pub fn tier_pixel_counts(
    frame: &ColorFrame,
    mask: &VegetationMask,
    calibration: &Calibration,
) -> BTreeMap<HealthTier, usize> {
    let mut counts: BTreeMap<HealthTier, usize> =
        calibration.tiers().map(|p| (p.tier, 0)).collect();

    for ((row, col), &inside) in mask.data.indexed_iter() {
        if !inside {
            continue;
        }
        let tier = calibration.classify(frame.pixel(row, col));
        if let Some(count) = counts.get_mut(&tier) {
            *count += 1;
        }
    }

    counts
}

/// Score the health of the vegetation in `frame` selected by `mask`.
///
/// For each tier: `min(observed / target, 1) * weight`; the score is the sum
/// over tiers divided by the total weight, times 100. Reaching a tier's target
/// earns full credit and exceeding it earns nothing more.
///
/// Fails if `frame` and `mask` differ in size.
pub fn score_health(
    frame: &ColorFrame,
    mask: &VegetationMask,
    calibration: &Calibration,
) -> Result<AnalysisResult> {
    frame.ensure_same_size(mask.height(), mask.width())?;
    Ok(score_matched(frame, mask, calibration))
}

/// [`score_health`] for a mask known to match the frame.
pub(crate) fn score_matched(
    frame: &ColorFrame,
    mask: &VegetationMask,
    calibration: &Calibration,
) -> AnalysisResult {
    let area = mask.area();
    if area == 0 {
        info!("No vegetation detected");
        return AnalysisResult::no_detection();
    }

    let counts = tier_pixel_counts(frame, mask, calibration);

    let mut score = 0.0_f64;
    let mut tier_percentages = BTreeMap::new();
    let mut lines = Vec::with_capacity(counts.len());

    for profile in calibration.tiers().rev() {
        let fraction = counts[&profile.tier] as f64 / area as f64;
        score += (fraction / profile.target).min(1.0) * profile.tier.weight() as f64;
        tier_percentages.insert(profile.tier, fraction * 100.0);
        lines.push(format!("{}: {:.1}%", profile.tier, fraction * 100.0));
    }

    let health_score = (score / calibration.total_weight() as f64) * 100.0;
    let coverage_percentage = (area as f64 / frame.area() as f64) * 100.0;

    info!(
        area,
        coverage = coverage_percentage,
        score = health_score,
        "Health analysis complete"
    );

    AnalysisResult {
        status: AnalysisStatus::Complete,
        vegetation_area: area,
        coverage_percentage,
        tier_percentages,
        health_score,
        analysis: lines.join("\n"),
    }
}
