//! Color palette quantization.
//!
//! Reduces an icon's distinct colors to a bounded palette (≤256 entries) so
//! the lossless re-encode deflates dramatically better. The palette is built
//! with a Wu-style variance-minimizing box split over the RGB histogram:
//! repeatedly split the bucket contributing the most weighted color variance,
//! at its widest channel's weighted mean, until the palette is full. Pixels
//! are then remapped to their nearest entry by Euclidean RGB distance.
//!
//! The alpha channel is never quantized: remapping touches R, G and B only
//! and leaves every pixel's alpha byte numerically untouched.

use image::RgbaImage;
use std::collections::HashMap;

/// An RGB palette of at most `max_colors` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<[u8; 3]>,
}

impl Palette {
    pub fn entries(&self) -> &[[u8; 3]] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One distinct RGB color and how many pixels carry it.
#[derive(Debug, Clone, Copy)]
struct WeightedColor {
    rgb: [u8; 3],
    count: u32,
}

/// A bucket of colors with cached split statistics.
struct Bucket {
    colors: Vec<WeightedColor>,
    weight: u64,
    /// Weighted variance summed over channels; the split priority.
    variance: f64,
    /// Channel with the largest weighted variance (0=R, 1=G, 2=B).
    split_channel: usize,
    /// Weighted mean of `split_channel`; the split point.
    split_mean: f64,
}

impl Bucket {
    fn from_colors(colors: Vec<WeightedColor>) -> Self {
        let weight: u64 = colors.iter().map(|c| u64::from(c.count)).sum();
        let mut means = [0.0f64; 3];
        for c in &colors {
            for ch in 0..3 {
                means[ch] += f64::from(c.rgb[ch]) * f64::from(c.count);
            }
        }
        if weight > 0 {
            for mean in &mut means {
                *mean /= weight as f64;
            }
        }

        let mut variances = [0.0f64; 3];
        for c in &colors {
            for ch in 0..3 {
                let d = f64::from(c.rgb[ch]) - means[ch];
                variances[ch] += d * d * f64::from(c.count);
            }
        }

        let split_channel = (0..3)
            .max_by(|&a, &b| variances[a].total_cmp(&variances[b]))
            .unwrap_or(0);

        Self {
            colors,
            weight,
            variance: variances.iter().sum(),
            split_channel,
            split_mean: means[split_channel],
        }
    }

    fn can_split(&self) -> bool {
        self.colors.len() > 1
    }

    /// Split at the weighted mean of the highest-variance channel, clamped so
    /// both halves stay non-empty.
    fn split(self) -> (Bucket, Bucket) {
        let channel = self.split_channel;
        let mean = self.split_mean;
        let mut colors = self.colors;
        colors.sort_unstable_by_key(|c| c.rgb[channel]);

        let mut split_idx = colors
            .iter()
            .position(|c| f64::from(c.rgb[channel]) > mean)
            .unwrap_or(colors.len() / 2);
        split_idx = split_idx.clamp(1, colors.len() - 1);

        let right = colors.split_off(split_idx);
        (Bucket::from_colors(colors), Bucket::from_colors(right))
    }

    /// Weighted mean color of the bucket.
    fn palette_entry(&self) -> [u8; 3] {
        if self.weight == 0 {
            return [0, 0, 0];
        }
        let mut sums = [0u64; 3];
        for c in &self.colors {
            for ch in 0..3 {
                sums[ch] += u64::from(c.rgb[ch]) * u64::from(c.count);
            }
        }
        [
            (sums[0] / self.weight) as u8,
            (sums[1] / self.weight) as u8,
            (sums[2] / self.weight) as u8,
        ]
    }
}

/// Build the RGB histogram: sorted keys + run-length counting, no hashing.
fn histogram(pixels: &RgbaImage) -> Vec<WeightedColor> {
    let mut keys: Vec<u32> = pixels
        .pixels()
        .map(|p| (u32::from(p.0[0]) << 16) | (u32::from(p.0[1]) << 8) | u32::from(p.0[2]))
        .collect();
    keys.sort_unstable();

    let mut colors = Vec::new();
    let mut iter = keys.into_iter();
    let Some(first) = iter.next() else {
        return colors;
    };
    let mut prev = first;
    let mut count = 1u32;
    for key in iter {
        if key == prev {
            count = count.saturating_add(1);
        } else {
            colors.push(WeightedColor {
                rgb: [(prev >> 16) as u8, (prev >> 8) as u8, prev as u8],
                count,
            });
            prev = key;
            count = 1;
        }
    }
    colors.push(WeightedColor {
        rgb: [(prev >> 16) as u8, (prev >> 8) as u8, prev as u8],
        count,
    });
    colors
}

/// Build a palette of at most `max_colors` entries for an image.
///
/// Images already within the cap get an identity palette (every distinct
/// color becomes its own entry), which makes repeated quantization a no-op.
pub fn build_palette(pixels: &RgbaImage, max_colors: usize) -> Palette {
    let colors = histogram(pixels);
    if colors.is_empty() {
        return Palette { entries: vec![] };
    }
    if colors.len() <= max_colors {
        return Palette {
            entries: colors.iter().map(|c| c.rgb).collect(),
        };
    }

    let mut buckets = vec![Bucket::from_colors(colors)];
    while buckets.len() < max_colors {
        let candidate = buckets
            .iter()
            .enumerate()
            .filter(|(_, b)| b.can_split())
            .max_by(|(_, a), (_, b)| a.variance.total_cmp(&b.variance))
            .map(|(i, _)| i);
        let Some(idx) = candidate else {
            break;
        };
        let bucket = buckets.swap_remove(idx);
        let (left, right) = bucket.split();
        buckets.push(left);
        buckets.push(right);
    }

    Palette {
        entries: buckets.iter().map(|b| b.palette_entry()).collect(),
    }
}

/// Index of the palette entry nearest to `rgb` by Euclidean distance.
fn nearest_entry(rgb: [u8; 3], entries: &[[u8; 3]]) -> usize {
    let mut best_idx = 0;
    let mut best_dist = u32::MAX;
    for (i, e) in entries.iter().enumerate() {
        let dr = i32::from(rgb[0]) - i32::from(e[0]);
        let dg = i32::from(rgb[1]) - i32::from(e[1]);
        let db = i32::from(rgb[2]) - i32::from(e[2]);
        let dist = (dr * dr + dg * dg + db * db) as u32;
        if dist < best_dist {
            best_dist = dist;
            best_idx = i;
        }
    }
    best_idx
}

/// Remap every pixel's RGB to its nearest palette entry, leaving alpha alone.
///
/// Lookups are memoized per distinct color; icons rarely carry more than a
/// few thousand.
pub fn remap_in_place(pixels: &mut RgbaImage, palette: &Palette) {
    if palette.is_empty() {
        return;
    }
    let entries = palette.entries();
    let mut memo: HashMap<u32, usize> = HashMap::new();
    for p in pixels.pixels_mut() {
        let key = (u32::from(p.0[0]) << 16) | (u32::from(p.0[1]) << 8) | u32::from(p.0[2]);
        let idx = *memo
            .entry(key)
            .or_insert_with(|| nearest_entry([p.0[0], p.0[1], p.0[2]], entries));
        let [r, g, b] = entries[idx];
        p.0[0] = r;
        p.0[1] = g;
        p.0[2] = b;
        // p.0[3] untouched
    }
}
