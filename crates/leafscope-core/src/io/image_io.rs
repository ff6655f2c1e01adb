use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use ndarray::Array3;

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::Result;
use crate::frame::ColorFrame;

/// Convert an RGB image into a BGR frame.
pub fn from_rgb_image(img: &RgbImage) -> ColorFrame {
    let (w, h) = img.dimensions();
    let data = Array3::from_shape_fn((h as usize, w as usize, COLOR_CHANNEL_COUNT), |(row, col, c)| {
        img.get_pixel(col as u32, row as u32).0[2 - c]
    });
    ColorFrame { data }
}

/// Convert a BGR frame into an RGB image.
pub fn to_rgb_image(frame: &ColorFrame) -> RgbImage {
    let mut img = RgbImage::new(frame.width() as u32, frame.height() as u32);
    for row in 0..frame.height() {
        for col in 0..frame.width() {
            let [b, g, r] = frame.pixel(row, col);
            img.put_pixel(col as u32, row as u32, Rgb([r, g, b]));
        }
    }
    img
}

/// Load any image file as an 8-bit BGR frame.
///
/// Grayscale and alpha images are expanded/flattened to three channels.
pub fn load_color_image(path: &Path) -> Result<ColorFrame> {
    let img = image::open(path)?;
    Ok(from_rgb_image(&img.to_rgb8()))
}

/// Save a frame as 8-bit RGB PNG.
pub fn save_color_png(frame: &ColorFrame, path: &Path) -> Result<()> {
    to_rgb_image(frame).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a frame, choosing the format from the file extension (PNG otherwise).
pub fn save_color_image(frame: &ColorFrame, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tiff" | "tif") => {
            to_rgb_image(frame).save_with_format(path, ImageFormat::Tiff)?;
            Ok(())
        }
        Some("jpg" | "jpeg") => {
            to_rgb_image(frame).save_with_format(path, ImageFormat::Jpeg)?;
            Ok(())
        }
        _ => save_color_png(frame, path),
    }
}
