use ndarray::{Array2, Array3};
use serde::{Deserialize, Serialize};

use crate::consts::{COLOR_CHANNEL_COUNT, PALETTE_SIZE};
use crate::error::{LeafscopeError, Result};
use crate::frame::{Bgr, ColorFrame, IndexFrame};

/// Fixed 256-entry BGR lookup table used for false coloring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Vec<Bgr>,
}

impl Palette {
    /// Build a palette from exactly [`PALETTE_SIZE`] entries.
    pub fn from_entries(entries: Vec<Bgr>) -> Result<Self> {
        let palette = Self { entries };
        palette.validate()?;
        Ok(palette)
    }

    pub fn validate(&self) -> Result<()> {
        if self.entries.len() != PALETTE_SIZE {
            return Err(LeafscopeError::Configuration(format!(
                "palette must have {} entries, got {}",
                PALETTE_SIZE,
                self.entries.len()
            )));
        }
        Ok(())
    }

    pub fn entries(&self) -> &[Bgr] {
        &self.entries
    }

    pub fn lookup(&self, intensity: u8) -> Bgr {
        self.entries[intensity as usize]
    }
}

impl Default for Palette {
    /// Dark-gray background ramp followed by four vegetation bands:
    ///
    /// | intensity | color ramp                  |
    /// |-----------|-----------------------------|
    /// | 0..=127   | black to mid gray           |
    /// | 128..=159 | dark green to bright green  |
    /// | 160..=191 | green to yellow             |
    /// | 192..=223 | yellow to red               |
    /// | 224..=255 | red to magenta              |
    ///
    /// Each vegetation band falls inside exactly one default tier range.
    fn default() -> Self {
        let entries = (0..PALETTE_SIZE)
            .map(|i| {
                let k = (i % 32) as u32;
                let ramp = |from: u32, to: u32| -> u8 {
                    if to >= from {
                        (from + k * (to - from) / 31) as u8
                    } else {
                        (from - k * (from - to) / 31) as u8
                    }
                };
                match i {
                    0..=127 => [i as u8; 3],
                    128..=159 => [0, ramp(175, 254), ramp(0, 30)],
                    160..=191 => [0, 255, ramp(7, 255)],
                    192..=223 => [0, ramp(249, 0), 255],
                    _ => [ramp(14, 239), 0, 255],
                }
            })
            .collect();
        Self { entries }
    }
}

/// Cast index values to 8-bit intensity.
///
/// Fractions are truncated; values below 0 saturate to 0 and above 255 to 255
/// (NaN maps to 0).
pub fn to_intensity(index: &IndexFrame) -> Array2<u8> {
    index.data.mapv(|v| v as u8)
}

/// Map a stretched index frame to a 3-channel false-color frame.
pub fn apply_palette(index: &IndexFrame, palette: &Palette) -> ColorFrame {
    let intensity = to_intensity(index);
    let (h, w) = intensity.dim();
    let data = Array3::from_shape_fn((h, w, COLOR_CHANNEL_COUNT), |(row, col, c)| {
        palette.lookup(intensity[[row, col]])[c]
    });
    ColorFrame { data }
}
