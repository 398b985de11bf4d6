//! Image utilities for testing rendered colour bars.

#![allow(dead_code)]

use image::{DynamicImage, GenericImageView, ImageError, ImageFormat};
use std::path::Path;

/// Load an image from a file
pub fn load_image(path: &Path) -> Result<DynamicImage, ImageError> {
    image::open(path)
}

/// Detect image format from bytes
pub fn detect_image_format(bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes).ok()
}

/// Check if an image has the expected dimensions
pub fn assert_image_dimensions(
    image: &DynamicImage,
    expected_width: u32,
    expected_height: u32,
) -> Result<(), String> {
    let (actual_width, actual_height) = image.dimensions();

    if actual_width != expected_width || actual_height != expected_height {
        return Err(format!(
            "Image dimensions differ: actual = {}x{}, expected = {}x{}",
            actual_width, actual_height, expected_width, expected_height
        ));
    }

    Ok(())
}

/// Number of runs of identical pixels down column `x`
pub fn count_column_runs(image: &DynamicImage, x: u32) -> usize {
    let (_, height) = image.dimensions();
    let mut runs = 0;
    let mut previous = None;
    for y in 0..height {
        let pixel = image.get_pixel(x, y).0;
        if previous != Some(pixel) {
            runs += 1;
            previous = Some(pixel);
        }
    }
    runs
}
