#![allow(dead_code)]

use ndarray::Array2;

use leafscope_core::frame::{Bgr, ColorFrame};
use leafscope_core::HealthTier;

/// Background color that falls outside every default tier range.
pub const SOIL: Bgr = [50, 50, 50];

/// A color inside the default range of `tier` (`SOIL` for `Other`).
pub fn tier_color(tier: HealthTier) -> Bgr {
    match tier {
        HealthTier::Tier4 => [100, 0, 255],
        HealthTier::Tier3 => [0, 100, 255],
        HealthTier::Tier2 => [0, 255, 100],
        HealthTier::Tier1 => [30, 200, 10],
        HealthTier::Other => SOIL,
    }
}

/// `background` everywhere except the half-open block `rows` x `cols`.
pub fn frame_with_block(
    height: usize,
    width: usize,
    background: Bgr,
    block: Bgr,
    rows: std::ops::Range<usize>,
    cols: std::ops::Range<usize>,
) -> ColorFrame {
    ColorFrame::from_fn(height, width, |row, col| {
        if rows.contains(&row) && cols.contains(&col) {
            block
        } else {
            background
        }
    })
}

/// Frame whose pixels are laid out in raster order with `counts[i]` pixels
/// of `tier_color(tiers[i])`.
pub fn frame_with_tier_counts(height: usize, width: usize, counts: &[(HealthTier, usize)]) -> ColorFrame {
    let mut colors = Vec::with_capacity(height * width);
    for &(tier, n) in counts {
        colors.extend(std::iter::repeat(tier_color(tier)).take(n));
    }
    assert_eq!(colors.len(), height * width, "counts must cover the frame");
    ColorFrame::from_fn(height, width, |row, col| colors[row * width + col])
}

/// Mask that is true inside the half-open block `rows` x `cols`.
pub fn block_mask(
    height: usize,
    width: usize,
    rows: std::ops::Range<usize>,
    cols: std::ops::Range<usize>,
) -> Array2<bool> {
    Array2::from_shape_fn((height, width), |(row, col)| {
        rows.contains(&row) && cols.contains(&col)
    })
}

pub fn count_true(mask: &Array2<bool>) -> usize {
    mask.iter().filter(|&&v| v).count()
}

/// Two-region test scene: a blue-dominant "plant" on the left half and a
/// red-dominant "soil" on the right half.
pub fn plant_and_soil(height: usize, width: usize) -> ColorFrame {
    ColorFrame::from_fn(height, width, |_, col| {
        if col < width / 2 {
            [200, 100, 20]
        } else {
            [50, 50, 150]
        }
    })
}
