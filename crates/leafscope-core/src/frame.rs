use ndarray::{Array2, Array3};

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{LeafscopeError, Result};

/// A single BGR pixel.
pub type Bgr = [u8; 3];

/// An 8-bit color frame.
/// Channel order is blue, green, red.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorFrame {
    /// Pixel data, row-major, shape = (height, width, 3)
    pub data: Array3<u8>,
}

impl ColorFrame {
    /// Wrap a `(height, width, 3)` array.
    pub fn new(data: Array3<u8>) -> Result<Self> {
        let channels = data.dim().2;
        if channels != COLOR_CHANNEL_COUNT {
            return Err(LeafscopeError::ChannelMismatch {
                expected: COLOR_CHANNEL_COUNT,
                actual: channels,
            });
        }
        Ok(Self { data })
    }

    /// A frame where every pixel has the same color.
    pub fn filled(height: usize, width: usize, color: Bgr) -> Self {
        let data = Array3::from_shape_fn((height, width, COLOR_CHANNEL_COUNT), |(_, _, c)| color[c]);
        Self { data }
    }

    /// Build a frame by evaluating `f(row, col)` for every pixel.
    pub fn from_fn<F>(height: usize, width: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Bgr,
    {
        let mut data = Array3::<u8>::zeros((height, width, COLOR_CHANNEL_COUNT));
        for row in 0..height {
            for col in 0..width {
                let px = f(row, col);
                for (c, &v) in px.iter().enumerate() {
                    data[[row, col, c]] = v;
                }
            }
        }
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// Total number of pixels (width * height).
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    pub fn pixel(&self, row: usize, col: usize) -> Bgr {
        [
            self.data[[row, col, 0]],
            self.data[[row, col, 1]],
            self.data[[row, col, 2]],
        ]
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, color: Bgr) {
        for (c, &v) in color.iter().enumerate() {
            self.data[[row, col, c]] = v;
        }
    }

    /// Convert to floating point for the stretch and index stages.
    pub fn to_f64(&self) -> Array3<f64> {
        self.data.mapv(f64::from)
    }

    /// Fail unless `other` has the same width and height.
    pub fn ensure_same_size(&self, other_height: usize, other_width: usize) -> Result<()> {
        if self.height() != other_height || self.width() != other_width {
            return Err(LeafscopeError::DimensionMismatch {
                left_width: self.width(),
                left_height: self.height(),
                right_width: other_width,
                right_height: other_height,
            });
        }
        Ok(())
    }
}

/// Single-channel floating-point frame holding the pseudo-vegetation index.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexFrame {
    /// Index values, shape = (height, width)
    pub data: Array2<f64>,
}

impl IndexFrame {
    pub fn new(data: Array2<f64>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}
