pub mod image_io;

pub use image_io::{load_color_image, save_color_image, save_color_png};
