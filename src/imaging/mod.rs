//! Image processing: normalization, resampling, quantization.
//!
//! The [`ImageBackend`] trait is the seam between the pipeline's driving
//! loops and actual pixel work; [`RustBackend`] is the production
//! implementation, and tests substitute a recording mock.

pub mod backend;
pub mod calculations;
pub mod params;
pub mod quant;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend, NormalizedBase};
pub use params::{QuantizeParams, ResizeParams, Sharpening};
pub use rust_backend::{RustBackend, identify};
