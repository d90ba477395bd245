//! Shared test helpers: synthetic image builders.
//!
//! Only compiled for tests.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};
use std::io::Cursor;

/// Encode an RGBA buffer as PNG bytes (default compression).
pub fn encoded_png(pixels: &RgbaImage) -> Vec<u8> {
    let mut out = Vec::new();
    PngEncoder::new(Cursor::new(&mut out))
        .write_image(
            pixels.as_raw(),
            pixels.width(),
            pixels.height(),
            ExtendedColorType::Rgba8,
        )
        .expect("PNG encode of test image");
    out
}

/// A fully opaque two-axis color gradient, encoded as PNG.
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) % 256) as u8,
            255,
        ])
    });
    encoded_png(&img)
}
