use ndarray::{Array2, Array3, ArrayBase, Data, Ix3};

use crate::consts::{COLOR_CHANNEL_COUNT, INDEX_DENOMINATOR_EPSILON};
use crate::error::{LeafscopeError, Result};
use crate::frame::IndexFrame;

/// Channel positions in a BGR array.
const BLUE: usize = 0;
const RED: usize = 2;

/// Compute the blue/red pseudo-vegetation index of a BGR array.
///
/// `idx = (B - R) / (B + R)`. Where `B + R` is exactly zero the denominator is
/// replaced by [`INDEX_DENOMINATOR_EPSILON`]; those pixels get a finite value
/// and are not excluded from later stages.
pub fn vegetation_index<S>(bgr: &ArrayBase<S, Ix3>) -> Result<IndexFrame>
where
    S: Data<Elem = f64>,
{
    let (h, w, channels) = bgr.dim();
    if channels != COLOR_CHANNEL_COUNT {
        return Err(LeafscopeError::ChannelMismatch {
            expected: COLOR_CHANNEL_COUNT,
            actual: channels,
        });
    }

    let data = Array2::from_shape_fn((h, w), |(row, col)| {
        let b = bgr[[row, col, BLUE]];
        let r = bgr[[row, col, RED]];
        let bottom = r + b;
        let bottom = if bottom == 0.0 {
            INDEX_DENOMINATOR_EPSILON
        } else {
            bottom
        };
        (b - r) / bottom
    });

    Ok(IndexFrame::new(data))
}

/// Convenience wrapper for integer pixel data.
pub fn vegetation_index_u8(bgr: &Array3<u8>) -> Result<IndexFrame> {
    vegetation_index(&bgr.mapv(f64::from))
}
