pub mod index;
pub mod palette;

pub use index::vegetation_index;
pub use palette::{apply_palette, Palette};
