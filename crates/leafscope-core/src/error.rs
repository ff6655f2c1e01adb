use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeafscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    /// The 2nd and 98th percentiles coincide, so the stretch has no scale.
    #[error("Degenerate input: percentile spread is zero (p2 = {low}, p98 = {high})")]
    DegenerateInput { low: f64, high: f64 },

    #[error("Invalid calibration: {0}")]
    Configuration(String),

    #[error("Expected {expected} channels, got {actual}")]
    ChannelMismatch { expected: usize, actual: usize },

    #[error("Frame dimensions differ: {left_width}x{left_height} vs {right_width}x{right_height}")]
    DimensionMismatch {
        left_width: usize,
        left_height: usize,
        right_width: usize,
        right_height: usize,
    },

    #[error("Empty frame")]
    EmptyFrame,
}

pub type Result<T> = std::result::Result<T, LeafscopeError>;
