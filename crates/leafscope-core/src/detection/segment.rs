use ndarray::{Array2, Zip};
use tracing::debug;

use crate::calibration::{Calibration, ColorRange};
use crate::consts::CROSS_KERNEL_RADIUS;
use crate::frame::ColorFrame;

use super::morphology::{morphological_closing, morphological_opening, StructuringElement};

/// Binary map of living vegetation, same size as the false-colored frame it
/// was derived from.
#[derive(Clone, Debug, PartialEq)]
pub struct VegetationMask {
    pub data: Array2<bool>,
}

impl VegetationMask {
    pub fn new(data: Array2<bool>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Number of set pixels.
    pub fn area(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.data.iter().any(|&v| v)
    }
}

/// Pixels of `frame` inside `range` (inclusive on every channel).
pub fn in_range(frame: &ColorFrame, range: &ColorRange) -> Array2<bool> {
    Array2::from_shape_fn((frame.height(), frame.width()), |(row, col)| {
        range.contains(frame.pixel(row, col))
    })
}

/// Union of every scoring tier's range mask, before cleanup.
pub fn raw_vegetation_mask(frame: &ColorFrame, calibration: &Calibration) -> Array2<bool> {
    let mut mask = Array2::from_elem((frame.height(), frame.width()), false);
    for profile in calibration.tiers() {
        let tier_mask = in_range(frame, &profile.range);
        Zip::from(&mut mask)
            .and(&tier_mask)
            .for_each(|m, &t| *m |= t);
    }
    mask
}

/// Classify living vegetation in a false-colored frame.
///
/// Pipeline: per-tier range masks -> OR -> closing -> opening, both with the
/// radius-2 cross. Closing runs first so filled interiors are not removed as
/// noise by the opening.
pub fn segment_vegetation(frame: &ColorFrame, calibration: &Calibration) -> VegetationMask {
    let raw = raw_vegetation_mask(frame, calibration);
    let element = StructuringElement::cross(CROSS_KERNEL_RADIUS);

    let closed = morphological_closing(&raw, &element);
    let opened = morphological_opening(&closed, &element);

    let mask = VegetationMask::new(opened);
    debug!(
        raw_pixels = raw.iter().filter(|&&v| v).count(),
        mask_pixels = mask.area(),
        "Vegetation segmented"
    );
    mask
}
