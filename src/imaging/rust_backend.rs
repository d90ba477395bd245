//! Pure-Rust image processing backend.
//!
//! Implements [`ImageBackend`] with the `image` crate: decode, Lanczos3
//! resampling, unsharp masking, palette quantization, and lossless PNG
//! encoding, all statically linked into the binary.

use super::backend::{BackendError, Dimensions, ImageBackend, NormalizedBase};
use super::calculations::{centered_offset, content_scale, normalized_side, scaled_dimensions};
use super::params::{QuantizeParams, ResizeParams, Sharpening};
use super::quant;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, ImageReader, RgbaImage};
use std::io::Cursor;

/// The production backend.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode raster bytes of any supported format into RGBA pixels.
fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage, BackendError> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let decoded = reader
        .decode()
        .map_err(|e| BackendError::DecodeFailed(e.to_string()))?;
    Ok(decoded.into_rgba8())
}

/// Encode RGBA pixels as a maximally-compressed PNG.
fn encode_png(pixels: &RgbaImage) -> Result<Vec<u8>, BackendError> {
    let mut out = Vec::new();
    let encoder = PngEncoder::new_with_quality(
        Cursor::new(&mut out),
        CompressionType::Best,
        PngFilterType::Adaptive,
    );
    encoder
        .write_image(
            pixels.as_raw(),
            pixels.width(),
            pixels.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| BackendError::ProcessingFailed(format!("PNG encode: {e}")))?;
    Ok(out)
}

/// Unsharp mask: sharpen by adding back the difference between the original
/// and a Gaussian-blurred copy, gated by a per-channel threshold.
///
/// Only R, G and B are sharpened; alpha passes through so edge transparency
/// from the normalized base's padding stays intact.
fn unsharp_mask(pixels: &RgbaImage, sharpening: &Sharpening) -> RgbaImage {
    let blurred = imageops::blur(pixels, sharpening.radius);
    let gain = sharpening.amount as f32 / 100.0;
    let mut out = pixels.clone();
    for (p, b) in out.pixels_mut().zip(blurred.pixels()) {
        for ch in 0..3 {
            let orig = i32::from(p.0[ch]);
            let diff = orig - i32::from(b.0[ch]);
            if diff.abs() > sharpening.threshold {
                let corrected = orig as f32 + gain * diff as f32;
                p.0[ch] = corrected.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    out
}

impl ImageBackend for RustBackend {
    /// Decode and fit the source onto a square transparent canvas.
    ///
    /// The canvas side is the longer source edge, floored at 512px. Content
    /// keeps its aspect ratio and is centered; padding stays transparent.
    fn normalize(&self, source: &[u8]) -> Result<NormalizedBase, BackendError> {
        let decoded = decode_rgba(source)?;
        let (width, height) = decoded.dimensions();
        if width == 0 || height == 0 {
            return Err(BackendError::DecodeFailed(
                "source has zero pixel area".into(),
            ));
        }

        let side = normalized_side(width, height);
        let scale = content_scale(width, height, side);
        let (scaled_w, scaled_h) = scaled_dimensions(width, height, scale);

        let scaled = if (scaled_w, scaled_h) == (width, height) {
            decoded
        } else {
            imageops::resize(&decoded, scaled_w, scaled_h, FilterType::Lanczos3)
        };

        let mut canvas = RgbaImage::new(side, side);
        let (x, y) = centered_offset(side, scaled_w, scaled_h);
        imageops::overlay(&mut canvas, &scaled, x, y);
        NormalizedBase::new(canvas)
    }

    /// Lanczos3 resample to the target square, then unsharp mask, then encode.
    fn resize(
        &self,
        base: &NormalizedBase,
        params: &ResizeParams,
    ) -> Result<Vec<u8>, BackendError> {
        let resized = imageops::resize(
            base.pixels(),
            params.target_size,
            params.target_size,
            FilterType::Lanczos3,
        );
        let sharpened = unsharp_mask(&resized, &params.sharpening);
        encode_png(&sharpened)
    }

    /// Re-decode the payload, quantize its palette, re-encode losslessly.
    fn quantize(&self, payload: &[u8], params: &QuantizeParams) -> Result<Vec<u8>, BackendError> {
        let mut pixels = decode_rgba(payload)?;
        let palette = quant::build_palette(&pixels, params.max_colors);
        quant::remap_in_place(&mut pixels, &palette);
        encode_png(&pixels)
    }
}

/// Decode just far enough to report the source's pixel dimensions.
pub fn identify(bytes: &[u8]) -> Result<Dimensions, BackendError> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| BackendError::DecodeFailed(e.to_string()))?;
    Ok(Dimensions { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{encoded_png, gradient_png};
    use image::Rgba;

    #[test]
    fn normalize_uses_longer_edge_above_512() {
        let backend = RustBackend::new();
        let base = backend.normalize(&gradient_png(1000, 400)).unwrap();
        assert_eq!(base.side(), 1000);
    }

    #[test]
    fn normalize_floors_canvas_at_512() {
        let backend = RustBackend::new();
        let base = backend.normalize(&gradient_png(300, 300)).unwrap();
        assert_eq!(base.side(), 512);
    }

    #[test]
    fn normalize_pads_with_transparency() {
        let backend = RustBackend::new();
        // Opaque 1000x400 content centered on a 1000x1000 canvas: rows above
        // y=300 are padding and must be fully transparent.
        let base = backend.normalize(&gradient_png(1000, 400)).unwrap();
        let pixels = base.pixels();
        assert_eq!(pixels.get_pixel(500, 10).0[3], 0);
        assert_eq!(pixels.get_pixel(500, 500).0[3], 255);
    }

    #[test]
    fn normalize_rejects_garbage() {
        let backend = RustBackend::new();
        let err = backend.normalize(b"definitely not an image").unwrap_err();
        assert!(matches!(err, BackendError::DecodeFailed(_)));
    }

    #[test]
    fn resize_outputs_decodable_square_png() {
        let backend = RustBackend::new();
        let base = backend.normalize(&gradient_png(300, 300)).unwrap();
        let payload = backend.resize(&base, &ResizeParams::for_size(48)).unwrap();

        let out = decode_rgba(&payload).unwrap();
        assert_eq!(out.dimensions(), (48, 48));
    }

    #[test]
    fn quantize_caps_distinct_colors() {
        let backend = RustBackend::new();
        let base = backend.normalize(&gradient_png(600, 600)).unwrap();
        let payload = backend.resize(&base, &ResizeParams::for_size(128)).unwrap();
        let quantized = backend
            .quantize(&payload, &QuantizeParams::default())
            .unwrap();

        let pixels = decode_rgba(&quantized).unwrap();
        let mut distinct: Vec<[u8; 3]> = pixels
            .pixels()
            .map(|p| [p.0[0], p.0[1], p.0[2]])
            .collect();
        distinct.sort_unstable();
        distinct.dedup();
        assert!(distinct.len() <= 256);
    }

    #[test]
    fn quantize_preserves_alpha_channel() {
        let img = RgbaImage::from_fn(64, 64, |x, y| {
            Rgba([(x * 4) as u8, (y * 4) as u8, 128, if x < 32 { 0 } else { 255 }])
        });
        let payload = encoded_png(&img);
        let backend = RustBackend::new();
        let quantized = backend
            .quantize(&payload, &QuantizeParams::default())
            .unwrap();

        let out = decode_rgba(&quantized).unwrap();
        for (a, b) in img.pixels().zip(out.pixels()) {
            assert_eq!(a.0[3], b.0[3]);
        }
    }

    #[test]
    fn quantize_is_idempotent() {
        // A quantized payload is already within the palette cap, so a second
        // pass takes the identity-palette path and re-encodes byte-identically.
        let backend = RustBackend::new();
        let base = backend.normalize(&gradient_png(400, 400)).unwrap();
        let payload = backend.resize(&base, &ResizeParams::for_size(64)).unwrap();
        let first = backend
            .quantize(&payload, &QuantizeParams::default())
            .unwrap();
        let second = backend
            .quantize(&first, &QuantizeParams::default())
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn quantize_rejects_undecodable_payload() {
        let backend = RustBackend::new();
        let err = backend
            .quantize(b"corrupt payload", &QuantizeParams::default())
            .unwrap_err();
        assert!(matches!(err, BackendError::DecodeFailed(_)));
    }

    #[test]
    fn identify_reports_source_dimensions() {
        let dims = identify(&gradient_png(320, 200)).unwrap();
        assert_eq!((dims.width, dims.height), (320, 200));
    }
}
