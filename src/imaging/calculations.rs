//! Pure calculation functions for canvas geometry and size statistics.
//!
//! All functions here are pure and testable without any I/O or images.

/// Side length of the square normalized base for a given source.
///
/// The base is never smaller than 512px so that upscaled small sources still
/// resample cleanly down to every catalog size.
///
/// # Examples
/// ```
/// # use iconforge::imaging::calculations::normalized_side;
/// assert_eq!(normalized_side(1000, 400), 1000);
/// assert_eq!(normalized_side(300, 300), 512);
/// ```
pub fn normalized_side(width: u32, height: u32) -> u32 {
    512.max(width.max(height))
}

/// Uniform scale factor that fits a source inside a square of `side`.
pub fn content_scale(width: u32, height: u32, side: u32) -> f64 {
    let sx = side as f64 / width as f64;
    let sy = side as f64 / height as f64;
    sx.min(sy)
}

/// Source dimensions after applying a uniform scale, rounded to pixels.
///
/// At least 1px per edge, so degenerate scales never produce an empty buffer.
pub fn scaled_dimensions(width: u32, height: u32, scale: f64) -> (u32, u32) {
    let w = (width as f64 * scale).round() as u32;
    let h = (height as f64 * scale).round() as u32;
    (w.max(1), h.max(1))
}

/// Top-left offset that centers a `scaled_w × scaled_h` content block on a
/// square canvas of `side`.
pub fn centered_offset(side: u32, scaled_w: u32, scaled_h: u32) -> (i64, i64) {
    (
        (i64::from(side) - i64::from(scaled_w)) / 2,
        (i64::from(side) - i64::from(scaled_h)) / 2,
    )
}

/// Unsharp-mask amount for a target size.
///
/// Small icons lose perceptual sharpness disproportionately during downscale
/// and need stronger correction.
pub fn sharpen_amount(target_size: u32) -> u32 {
    if target_size < 64 { 160 } else { 80 }
}

/// Approximate payload size in whole kilobytes.
///
/// Uses the original tool's base64-derived estimate (`len × 0.75 / 1024`) so
/// reported numbers stay comparable with it.
pub fn payload_size_kb(len: usize) -> u32 {
    (len as f64 * 0.75 / 1024.0).round() as u32
}

/// Percentage saved by optimization, rounded to the nearest integer.
///
/// Zero-sized originals report 0 (divide-by-zero guard). Negative savings are
/// reported as computed — a payload growing under quantization is a real
/// measurement, not an error.
///
/// # Examples
/// ```
/// # use iconforge::imaging::calculations::savings_percent;
/// assert_eq!(savings_percent(100, 60), 40);
/// assert_eq!(savings_percent(100, 130), -30);
/// assert_eq!(savings_percent(0, 10), 0);
/// ```
pub fn savings_percent(original_kb: u32, optimized_kb: u32) -> i32 {
    if original_kb == 0 {
        return 0;
    }
    ((1.0 - optimized_kb as f64 / original_kb as f64) * 100.0).round() as i32
}
