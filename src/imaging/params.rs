//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the pipeline driving loops (which decide which icons to
//! create) and the [`backend`](super::backend) (which does the actual pixel
//! work). This separation allows swapping backends (e.g. for testing with a
//! mock) without changing pipeline logic.

use super::calculations::sharpen_amount;

/// Unsharp-mask parameters applied after resampling.
///
/// - `amount`: strength of the correction as a percentage gain on the
///   original-minus-blurred difference
/// - `radius`: standard deviation of the Gaussian blur used to build the mask
/// - `threshold`: minimum channel difference to sharpen (suppresses noise)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sharpening {
    pub amount: u32,
    pub radius: f32,
    pub threshold: i32,
}

impl Sharpening {
    /// Size-adaptive sharpening: 160 below 64px, 80 otherwise; radius and
    /// threshold held constant across sizes.
    pub fn adaptive(target_size: u32) -> Self {
        Self {
            amount: sharpen_amount(target_size),
            radius: 0.6,
            threshold: 1,
        }
    }
}

/// Parameters for a single resize from the normalized base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeParams {
    /// Output edge length; the result is always square.
    pub target_size: u32,
    pub sharpening: Sharpening,
}

impl ResizeParams {
    /// Standard parameters for a catalog size: adaptive sharpening included.
    pub fn for_size(target_size: u32) -> Self {
        Self {
            target_size,
            sharpening: Sharpening::adaptive(target_size),
        }
    }
}

/// Parameters for palette quantization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantizeParams {
    /// Palette entry cap. PNG-indexed tooling tops out at 256.
    pub max_colors: usize,
}

impl Default for QuantizeParams {
    fn default() -> Self {
        Self { max_colors: 256 }
    }
}
