//! Pixel histogram over a reduced-precision color space
//!
//! Each channel is truncated to its 5 most significant bits, giving a
//! 32x32x32 grid of 32768 buckets. Alongside the per-bucket pixel counts the
//! table accumulates the full-precision channel sums, so box averages can be
//! computed without re-reading the pixels.

use swatch_core::Rgb;

/// Significant bits kept per channel
pub const SIGBITS: u32 = 5;

/// Bits dropped from each 8-bit channel
pub const RSHIFT: u32 = 8 - SIGBITS;

/// Number of buckets in the reduced color space
pub const HIST_SIZE: usize = 1 << (3 * SIGBITS);

/// Pack reduced 5-bit channel coordinates into a histogram index
pub fn color_index(r: usize, g: usize, b: usize) -> usize {
    (r << (2 * SIGBITS)) | (g << SIGBITS) | b
}

/// Reduce an 8-bit channel value to its 5-bit coordinate
pub fn quantize_channel(value: u8) -> usize {
    (value >> RSHIFT) as usize
}

/// Frequency table over the reduced color space.
///
/// Built once per quantization call and never mutated afterwards.
pub struct Histogram {
    counts: Vec<u32>,
    r_sums: Vec<u64>,
    g_sums: Vec<u64>,
    b_sums: Vec<u64>,
}

impl Histogram {
    /// Bucket every pixel by its reduced color index
    pub fn from_pixels(pixels: &[Rgb]) -> Self {
        let mut counts = vec![0u32; HIST_SIZE];
        let mut r_sums = vec![0u64; HIST_SIZE];
        let mut g_sums = vec![0u64; HIST_SIZE];
        let mut b_sums = vec![0u64; HIST_SIZE];

        for px in pixels {
            let index = color_index(
                quantize_channel(px.r),
                quantize_channel(px.g),
                quantize_channel(px.b),
            );
            counts[index] += 1;
            r_sums[index] += px.r as u64;
            g_sums[index] += px.g as u64;
            b_sums[index] += px.b as u64;
        }

        Self {
            counts,
            r_sums,
            g_sums,
            b_sums,
        }
    }

    /// Pixel count in the given bucket
    pub fn count(&self, index: usize) -> u32 {
        self.counts[index]
    }

    /// Accumulated (r, g, b) channel sums for the given bucket
    pub fn channel_sums(&self, index: usize) -> (u64, u64, u64) {
        (self.r_sums[index], self.g_sums[index], self.b_sums[index])
    }
}
