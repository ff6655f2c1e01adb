use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DEFAULT_OVERLAY_COLOR, DEFAULT_OVERLAY_THICKNESS};
use crate::detection::contour::external_contours;
use crate::detection::segment::VegetationMask;
use crate::error::{LeafscopeError, Result};
use crate::frame::{Bgr, ColorFrame};

use super::draw::draw_closed_polyline;

/// Stroke used for vegetation outlines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayStyle {
    /// BGR stroke color.
    #[serde(default = "default_color")]
    pub color: Bgr,
    /// Stroke width in pixels.
    #[serde(default = "default_thickness")]
    pub thickness: usize,
}

fn default_color() -> Bgr {
    DEFAULT_OVERLAY_COLOR
}
fn default_thickness() -> usize {
    DEFAULT_OVERLAY_THICKNESS
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_OVERLAY_COLOR,
            thickness: DEFAULT_OVERLAY_THICKNESS,
        }
    }
}

impl OverlayStyle {
    pub fn validate(&self) -> Result<()> {
        if self.thickness == 0 {
            return Err(LeafscopeError::Configuration(
                "overlay thickness must be > 0".into(),
            ));
        }
        Ok(())
    }
}

/// Draw the outer contours of `mask` onto a copy of `display`.
///
/// `display` is left untouched; with an empty mask the copy is identical.
pub fn draw_overlay(
    display: &ColorFrame,
    mask: &VegetationMask,
    style: &OverlayStyle,
) -> Result<ColorFrame> {
    display.ensure_same_size(mask.height(), mask.width())?;

    let mut out = display.clone();
    if mask.is_empty() {
        return Ok(out);
    }

    let contours = external_contours(&mask.data);
    debug!(contours = contours.len(), "Drawing vegetation outline");
    for contour in &contours {
        draw_closed_polyline(&mut out, &contour.points, style.color, style.thickness);
    }

    Ok(out)
}
