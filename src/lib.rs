//! # iconforge
//!
//! A batch icon pipeline: one source image in, a zip of platform-ready icon
//! sets out. Android, iOS, Windows, browser, macOS and Linux catalogs are
//! built in, down to the folder conventions each platform's tooling expects.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! ```text
//! 1. Normalize  source bytes → square padded base  (once per run)
//! 2. Resize     base → one PNG per catalog size    (Lanczos3 + unsharp)
//! 3. Optimize   PNG → palette-quantized PNG        (optional, per variant)
//! 4. Package    variants → dated zip               (manifests + README)
//! ```
//!
//! The stages are strictly sequential and share only immutable data: the
//! normalized base is produced once and read by every resize, and the variant
//! list is append-only during generation and replaced in place (by stable
//! identity) during optimization. Failures stay local — a source that cannot
//! be decoded yields an empty variant set, and one icon's optimization
//! failure never touches its neighbors.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | The fixed platform/size tables — pure enumerated configuration |
//! | [`imaging`] | Pixel work behind the [`ImageBackend`](imaging::ImageBackend) trait: normalize, resize, quantize |
//! | [`pipeline`] | The driving loops — ordering, progress events, failure isolation |
//! | [`types`] | [`IconVariant`](types::IconVariant) and its quality bookkeeping |
//! | [`manifest`] | Generated `Contents.json` and web manifest documents |
//! | [`report`] | The README bundled into every archive |
//! | [`archive`] | Filename policy and zip serialization |
//! | [`config`] | Optional `iconforge.toml` for manifest constants |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## One Normalized Base
//!
//! Every output size is resampled from a single square, transparency-padded
//! canvas (side = longer source edge, floored at 512px) rather than from the
//! raw source. This keeps content centering and aspect handling in one place
//! and makes every resize a plain square-to-square Lanczos3 pass.
//!
//! ## Pure-Rust Imaging
//!
//! All pixel work uses the `image` crate plus a small in-crate quantizer — no
//! ImageMagick, no libpng, no system dependencies. The binary is fully
//! self-contained.
//!
//! ## Quantize, Don't Recompress
//!
//! Optimization reduces each icon's distinct colors to a ≤256-entry palette
//! (alpha untouched) and re-encodes losslessly, instead of reaching for lossy
//! compression. Icons are flat-colored by nature, so palette reduction is
//! where the bytes are — and the output stays pixel-stable enough to ship.

pub mod archive;
pub mod catalog;
pub mod config;
pub mod imaging;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
