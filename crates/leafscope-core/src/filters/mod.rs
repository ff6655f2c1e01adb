pub mod contrast;

pub use contrast::{contrast_stretch, contrast_stretch_in_place, DegeneratePolicy};
