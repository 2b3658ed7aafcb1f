//! Color boxes in the reduced color space
//!
//! A `VBox` is an axis-aligned bounding box over the 5-bit-per-channel grid.
//! Its aggregates (pixel count, cell volume, average color) are derived from
//! the histogram on first access and memoized; only an explicit cache reset
//! after a bounds mutation forces recomputation.

use crate::histogram::{Histogram, RSHIFT, color_index};
use std::cell::Cell;
use swatch_core::Rgb;

/// One of the three color axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Red,
    Green,
    Blue,
}

/// Axis-aligned bounding box over the reduced color space.
///
/// Bounds are inclusive coordinates in `0..32`. A box may be degenerate
/// (lower bound above upper bound) after a failed split; such a box covers
/// no cells and has a zero count.
pub struct VBox {
    pub(crate) r1: i32,
    pub(crate) r2: i32,
    pub(crate) g1: i32,
    pub(crate) g2: i32,
    pub(crate) b1: i32,
    pub(crate) b2: i32,
    count: Cell<Option<u32>>,
    volume: Cell<Option<u32>>,
    avg: Cell<Option<Rgb>>,
}

impl VBox {
    /// Create a box with the given inclusive bounds
    pub fn new(r1: i32, r2: i32, g1: i32, g2: i32, b1: i32, b2: i32) -> Self {
        Self {
            r1,
            r2,
            g1,
            g2,
            b1,
            b2,
            count: Cell::new(None),
            volume: Cell::new(None),
            avg: Cell::new(None),
        }
    }

    /// Smallest box covering every occupied coordinate of the pixel set
    pub fn from_pixels(pixels: &[Rgb]) -> Self {
        let mut rmin = i32::MAX;
        let mut rmax = 0;
        let mut gmin = i32::MAX;
        let mut gmax = 0;
        let mut bmin = i32::MAX;
        let mut bmax = 0;

        for px in pixels {
            let r = (px.r >> RSHIFT) as i32;
            let g = (px.g >> RSHIFT) as i32;
            let b = (px.b >> RSHIFT) as i32;
            rmin = rmin.min(r);
            rmax = rmax.max(r);
            gmin = gmin.min(g);
            gmax = gmax.max(g);
            bmin = bmin.min(b);
            bmax = bmax.max(b);
        }

        Self::new(rmin, rmax, gmin, gmax, bmin, bmax)
    }

    /// Duplicate the bounds; the copy starts with cold caches
    pub fn copy(&self) -> Self {
        Self::new(self.r1, self.r2, self.g1, self.g2, self.b1, self.b2)
    }

    /// Force recomputation of all memoized aggregates.
    ///
    /// Called after a split mutates the bounds of a copied box.
    pub(crate) fn reset_cache(&self) {
        self.count.set(None);
        self.volume.set(None);
        self.avg.set(None);
    }

    /// Inclusive bounds along the given axis
    pub fn axis_bounds(&self, axis: Axis) -> (i32, i32) {
        match axis {
            Axis::Red => (self.r1, self.r2),
            Axis::Green => (self.g1, self.g2),
            Axis::Blue => (self.b1, self.b2),
        }
    }

    pub(crate) fn set_axis_max(&mut self, axis: Axis, value: i32) {
        match axis {
            Axis::Red => self.r2 = value,
            Axis::Green => self.g2 = value,
            Axis::Blue => self.b2 = value,
        }
        self.reset_cache();
    }

    pub(crate) fn set_axis_min(&mut self, axis: Axis, value: i32) {
        match axis {
            Axis::Red => self.r1 = value,
            Axis::Green => self.g1 = value,
            Axis::Blue => self.b1 = value,
        }
        self.reset_cache();
    }

    /// Number of grid cells inside the bounds
    pub fn volume(&self) -> u32 {
        if let Some(v) = self.volume.get() {
            return v;
        }
        let v = ((self.r2 - self.r1 + 1).max(0)
            * (self.g2 - self.g1 + 1).max(0)
            * (self.b2 - self.b1 + 1).max(0)) as u32;
        self.volume.set(Some(v));
        v
    }

    /// Total pixel population inside the bounds
    pub fn count(&self, histo: &Histogram) -> u32 {
        if let Some(c) = self.count.get() {
            return c;
        }
        let mut count = 0u32;
        for i in self.r1..=self.r2 {
            for j in self.g1..=self.g2 {
                for k in self.b1..=self.b2 {
                    count += histo.count(color_index(i as usize, j as usize, k as usize));
                }
            }
        }
        self.count.set(Some(count));
        count
    }

    /// Population-weighted mean color of the box.
    ///
    /// An empty box falls back to the geometric center of its bounds,
    /// expanded back to 8-bit precision.
    pub fn avg(&self, histo: &Histogram) -> Rgb {
        if let Some(avg) = self.avg.get() {
            return avg;
        }

        let mut ntot = 0u64;
        let mut rsum = 0u64;
        let mut gsum = 0u64;
        let mut bsum = 0u64;
        for i in self.r1..=self.r2 {
            for j in self.g1..=self.g2 {
                for k in self.b1..=self.b2 {
                    let index = color_index(i as usize, j as usize, k as usize);
                    ntot += histo.count(index) as u64;
                    let (r, g, b) = histo.channel_sums(index);
                    rsum += r;
                    gsum += g;
                    bsum += b;
                }
            }
        }

        let avg = if ntot > 0 {
            Rgb::new(
                (rsum / ntot) as u8,
                (gsum / ntot) as u8,
                (bsum / ntot) as u8,
            )
        } else {
            let mult = 1 << RSHIFT;
            Rgb::new(
                ((mult * (self.r1 + self.r2 + 1)) / 2).clamp(0, 255) as u8,
                ((mult * (self.g1 + self.g2 + 1)) / 2).clamp(0, 255) as u8,
                ((mult * (self.b1 + self.b2 + 1)) / 2).clamp(0, 255) as u8,
            )
        };
        self.avg.set(Some(avg));
        avg
    }

    /// Whether the probe color's quantized coordinates fall inside the box
    pub fn contains(&self, px: Rgb) -> bool {
        let r = (px.r >> RSHIFT) as i32;
        let g = (px.g >> RSHIFT) as i32;
        let b = (px.b >> RSHIFT) as i32;
        r >= self.r1
            && r <= self.r2
            && g >= self.g1
            && g <= self.g2
            && b >= self.b1
            && b <= self.b2
    }
}
