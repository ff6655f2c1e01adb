/// Number of channels in a color frame (B, G, R).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Lower percentile used as the black point of the contrast stretch.
pub const STRETCH_LOW_PERCENTILE: f64 = 2.0;

/// Upper percentile used as the white point of the contrast stretch.
pub const STRETCH_HIGH_PERCENTILE: f64 = 98.0;

/// Output range of the contrast stretch.
pub const STRETCH_OUT_MIN: f64 = 0.0;
pub const STRETCH_OUT_MAX: f64 = 255.0;

/// Substituted for `B + R` wherever it is exactly zero.
pub const INDEX_DENOMINATOR_EPSILON: f64 = 0.01;

/// Number of entries in a false-color palette.
pub const PALETTE_SIZE: usize = 256;

/// Radius of the plus-shaped structuring element used to clean the vegetation mask.
pub const CROSS_KERNEL_RADIUS: usize = 2;

/// Inclusive BGR ranges of the default calibration, matched against
/// [`crate::color::palette::Palette::default`].
pub const DEFAULT_TIER4_RANGE: ([u8; 3], [u8; 3]) = ([14, 0, 255], [239, 0, 255]);
pub const DEFAULT_TIER3_RANGE: ([u8; 3], [u8; 3]) = ([0, 0, 255], [0, 249, 255]);
pub const DEFAULT_TIER2_RANGE: ([u8; 3], [u8; 3]) = ([0, 255, 7], [0, 255, 255]);
pub const DEFAULT_TIER1_RANGE: ([u8; 3], [u8; 3]) = ([0, 175, 0], [60, 254, 30]);

/// Expected share of vegetation pixels in each tier for a fully healthy plant.
pub const DEFAULT_TIER4_TARGET: f64 = 0.10;
pub const DEFAULT_TIER3_TARGET: f64 = 0.20;
pub const DEFAULT_TIER2_TARGET: f64 = 0.30;
pub const DEFAULT_TIER1_TARGET: f64 = 0.25;

/// Overlay stroke color (BGR green).
pub const DEFAULT_OVERLAY_COLOR: [u8; 3] = [0, 255, 0];

/// Overlay stroke width in pixels.
pub const DEFAULT_OVERLAY_THICKNESS: usize = 2;
