use ndarray::{Array, ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::consts::{
    STRETCH_HIGH_PERCENTILE, STRETCH_LOW_PERCENTILE, STRETCH_OUT_MAX, STRETCH_OUT_MIN,
};
use crate::error::{LeafscopeError, Result};

/// What to do when the stretch bounds coincide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegeneratePolicy {
    /// Return [`LeafscopeError::DegenerateInput`].
    Fail,
    /// Zero-scale pass: every value becomes the low percentile.
    #[default]
    Flatten,
}

impl std::fmt::Display for DegeneratePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fail => write!(f, "Fail"),
            Self::Flatten => write!(f, "Flatten"),
        }
    }
}

/// Percentile of already sorted values, `q` in [0, 100].
///
/// Linear interpolation between the two closest ranks. The interpolation is
/// anchored on the nearer rank so that `q` landing exactly on a rank returns
/// that rank's value unchanged. Returns `None` for an empty slice.
pub fn percentile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    let n = sorted.len();
    match n {
        0 => return None,
        1 => return Some(sorted[0]),
        _ => {}
    }
    let pos = (n - 1) as f64 * (q / 100.0);
    let lo = (pos.floor() as usize).min(n - 1);
    let hi = (lo + 1).min(n - 1);
    let t = pos - lo as f64;
    let (a, b) = (sorted[lo], sorted[hi]);
    let diff = b - a;
    if t >= 0.5 {
        Some(b - diff * (1.0 - t))
    } else {
        Some(a + diff * t)
    }
}

/// The 2nd and 98th percentiles of every value in `data`.
pub fn stretch_bounds<S, D>(data: &ArrayBase<S, D>) -> Result<(f64, f64)>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let mut sorted: Vec<f64> = data.iter().copied().collect();
    sorted.sort_unstable_by(f64::total_cmp);
    let low =
        percentile_sorted(&sorted, STRETCH_LOW_PERCENTILE).ok_or(LeafscopeError::EmptyFrame)?;
    let high =
        percentile_sorted(&sorted, STRETCH_HIGH_PERCENTILE).ok_or(LeafscopeError::EmptyFrame)?;
    Ok((low, high))
}

/// Percentile-based linear stretch, in place.
///
/// `out = (in - p2) * (0 - 255) / (p2 - p98) + p2`
///
/// Note the trailing `+ p2`: outputs are offset by the low percentile, so the
/// bounds land on `p2` and `255 + p2`. No clamping is applied.
pub fn contrast_stretch_in_place<D: Dimension>(data: &mut Array<f64, D>) -> Result<()> {
    let (low, high) = stretch_bounds(&*data)?;
    if high == low {
        return Err(LeafscopeError::DegenerateInput { low, high });
    }
    let scale = (STRETCH_OUT_MIN - STRETCH_OUT_MAX) / (low - high);
    debug!(p2 = low, p98 = high, scale, "Contrast stretch");
    data.mapv_inplace(|v| (v - low) * scale + low);
    Ok(())
}

/// Percentile-based linear stretch returning a new array.
pub fn contrast_stretch<S, D>(data: &ArrayBase<S, D>) -> Result<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let mut out = data.to_owned();
    contrast_stretch_in_place(&mut out)?;
    Ok(out)
}

/// Stretch, resolving a zero percentile spread according to `policy`.
pub fn contrast_stretch_with_policy<S, D>(
    data: &ArrayBase<S, D>,
    policy: DegeneratePolicy,
) -> Result<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    match contrast_stretch(data) {
        Err(LeafscopeError::DegenerateInput { low, high }) if policy == DegeneratePolicy::Flatten => {
            warn!(p2 = low, p98 = high, "Flat input, applying zero-scale stretch");
            Ok(data.mapv(|_| low))
        }
        other => other,
    }
}
