//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the three pixel operations the pipeline
//! needs: normalize, resize, and quantize.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, everything
//! statically linked into the binary.

use super::params::{QuantizeParams, ResizeParams};
use image::RgbaImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    DecodeFailed(String),
    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}

/// Pixel dimensions of a decoded source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// The single square resampling source for a generation run.
///
/// Created once per run by [`ImageBackend::normalize`] and treated as
/// read-only shared input for every subsequent resize. The buffer is always
/// square; the *content* keeps its aspect ratio and is centered on a
/// transparent border.
#[derive(Debug, Clone)]
pub struct NormalizedBase {
    pixels: RgbaImage,
}

impl NormalizedBase {
    /// Wrap a square RGBA buffer. Non-square buffers are a construction bug.
    pub fn new(pixels: RgbaImage) -> Result<Self, BackendError> {
        if pixels.width() != pixels.height() {
            return Err(BackendError::ProcessingFailed(format!(
                "normalized base must be square, got {}x{}",
                pixels.width(),
                pixels.height()
            )));
        }
        Ok(Self { pixels })
    }

    pub fn side(&self) -> u32 {
        self.pixels.width()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Trait for image processing backends.
///
/// Every backend must implement all three operations so the pipeline driving
/// loops are backend-agnostic and testable against a mock.
pub trait ImageBackend: Sync {
    /// Decode arbitrary raster bytes into the square normalized base.
    fn normalize(&self, source: &[u8]) -> Result<NormalizedBase, BackendError>;

    /// Resample the base down (or up) to one square PNG payload.
    fn resize(&self, base: &NormalizedBase, params: &ResizeParams)
    -> Result<Vec<u8>, BackendError>;

    /// Palette-quantize an encoded payload and re-encode it losslessly.
    fn quantize(&self, payload: &[u8], params: &QuantizeParams) -> Result<Vec<u8>, BackendError>;
}
