//! Modified median cut quantization (MMCQ)
//!
//! Adaptive palette reduction after Leptonica's `colorquant2.c` and the
//! widely ported `quantize.js`. The occupied region of the reduced color
//! space is split recursively: a first pass pops the most populous box, a
//! second pass re-keys the queue by `count x volume` so that boxes which are
//! both populous and spatially large are refined further.

use crate::colormap::ColorMap;
use crate::histogram::{Histogram, color_index};
use crate::pqueue::PQueue;
use crate::vbox::{Axis, VBox};
use log::warn;
use swatch_core::Rgb;

/// Hard cap on split iterations per pass
pub const MAX_ITERATIONS: u32 = 1000;

/// Fraction of the target colors generated by the population-only pass
pub const FRACT_BY_POPULATIONS: f64 = 0.75;

/// Reduce a pixel set to at most `max_colors` representative colors.
///
/// `max_colors` must lie in `1..=256` and the pixel slice must be non-empty;
/// violations are logged and produce an empty [`ColorMap`] rather than an
/// error, so callers can treat an empty palette as "nothing to show".
pub fn quantize(pixels: &[Rgb], max_colors: u32) -> ColorMap {
    if pixels.is_empty() || !(1..=256).contains(&max_colors) {
        warn!(
            "quantize: need a non-empty pixel set and 1..=256 colors, \
             got {} pixels and max_colors={max_colors}",
            pixels.len()
        );
        return ColorMap::new();
    }

    let histo = Histogram::from_pixels(pixels);
    let initial = VBox::from_pixels(pixels);

    // First pass: split by population only.
    let mut pq = PQueue::new(|a: &VBox, b: &VBox| a.count(&histo).cmp(&b.count(&histo)));
    pq.push(initial);

    let first_target = (FRACT_BY_POPULATIONS * max_colors as f64).ceil() as usize;
    iterate(&mut pq, &histo, first_target);

    // Second pass: re-key by population times color-space volume.
    let mut pq2 = PQueue::new(|a: &VBox, b: &VBox| {
        let pa = a.count(&histo) as u64 * a.volume() as u64;
        let pb = b.count(&histo) as u64 * b.volume() as u64;
        pa.cmp(&pb)
    });
    while let Some(vbox) = pq.pop() {
        pq2.push(vbox);
    }
    iterate(&mut pq2, &histo, max_colors as usize);

    // Drain in descending count x volume order. Degenerate zero-count boxes
    // left behind by unsplittable cells contribute no palette entry.
    let mut cmap = ColorMap::new();
    while let Some(vbox) = pq2.pop() {
        if vbox.count(&histo) == 0 {
            continue;
        }
        cmap.push(vbox, &histo);
    }
    cmap
}

/// Pop, split, and re-push boxes until the queue holds `target` of them,
/// the top box runs out of pixels, or the iteration cap is hit.
fn iterate(pq: &mut PQueue<'_, VBox>, histo: &Histogram, target: usize) {
    let mut ncolors = pq.len();
    let mut niters = 0;

    while niters < MAX_ITERATIONS {
        if ncolors >= target {
            return;
        }
        match pq.peek() {
            Some(vbox) if vbox.count(histo) == 0 => return,
            None => return,
            _ => {}
        }
        niters += 1;

        let Some(vbox) = pq.pop() else {
            return;
        };
        if vbox.count(histo) == 0 {
            pq.push(vbox);
            niters += 1;
            continue;
        }

        let Some((vbox1, vbox2)) = median_cut_apply(histo, &vbox) else {
            warn!("quantize: popped box produced no cut");
            return;
        };

        pq.push(vbox1);
        if let Some(vbox2) = vbox2 {
            pq.push(vbox2);
            ncolors += 1;
        }
    }
}

/// Split a box across its widest axis at the median of its population.
///
/// Returns `None` for an empty box and a single unchanged box for one that
/// holds a lone pixel. Otherwise the cut point starts at the coordinate
/// where the cumulative population first reaches half the total, is biased
/// toward the larger remaining half, and skips forward past coordinates
/// with no population at all.
fn median_cut_apply(histo: &Histogram, vbox: &VBox) -> Option<(VBox, Option<VBox>)> {
    let total = vbox.count(histo);
    if total == 0 {
        return None;
    }
    if total == 1 {
        return Some((vbox.copy(), None));
    }

    let rw = vbox.r2 - vbox.r1 + 1;
    let gw = vbox.g2 - vbox.g1 + 1;
    let bw = vbox.b2 - vbox.b1 + 1;
    let axis = if rw >= gw && rw >= bw {
        Axis::Red
    } else if gw >= bw {
        Axis::Green
    } else {
        Axis::Blue
    };

    // Cumulative population along the chosen axis, indexed by coordinate.
    let mut partial = [0u32; 32];
    let mut running = 0u32;
    let (lo, hi) = vbox.axis_bounds(axis);
    for i in lo..=hi {
        let mut sum = 0u32;
        match axis {
            Axis::Red => {
                for j in vbox.g1..=vbox.g2 {
                    for k in vbox.b1..=vbox.b2 {
                        sum += histo.count(color_index(i as usize, j as usize, k as usize));
                    }
                }
            }
            Axis::Green => {
                for j in vbox.r1..=vbox.r2 {
                    for k in vbox.b1..=vbox.b2 {
                        sum += histo.count(color_index(j as usize, i as usize, k as usize));
                    }
                }
            }
            Axis::Blue => {
                for j in vbox.r1..=vbox.r2 {
                    for k in vbox.g1..=vbox.g2 {
                        sum += histo.count(color_index(j as usize, k as usize, i as usize));
                    }
                }
            }
        }
        running += sum;
        partial[i as usize] = running;
    }

    // First coordinate where the cumulative sum reaches half the total.
    let mut median = lo;
    while median < hi && partial[median as usize] * 2 < total {
        median += 1;
    }

    // Bias the cut into the larger remaining half, then skip past any
    // coordinates that contribute nothing.
    let left = median - lo;
    let right = hi - median;
    let mut cut = if left <= right {
        (median + right / 2).min(hi - 1)
    } else {
        (median - 1 - left / 2).max(lo)
    };
    while cut <= hi && (cut < lo || partial[cut as usize] == 0) {
        cut += 1;
    }

    let mut vbox1 = vbox.copy();
    let mut vbox2 = vbox.copy();
    vbox1.set_axis_max(axis, cut);
    vbox2.set_axis_min(axis, cut + 1);

    Some((vbox1, Some(vbox2)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_balances_population() {
        // half the pixels dark red, half bright red
        let mut pixels = vec![Rgb::new(16, 0, 0); 50];
        pixels.extend(vec![Rgb::new(240, 0, 0); 50]);
        let histo = Histogram::from_pixels(&pixels);
        let vbox = VBox::from_pixels(&pixels);

        let (a, b) = median_cut_apply(&histo, &vbox).unwrap();
        let b = b.unwrap();
        assert_eq!(a.count(&histo) + b.count(&histo), 100);
        assert!(a.count(&histo) > 0);
        assert!(b.count(&histo) > 0);
    }

    #[test]
    fn test_single_pixel_box_not_split() {
        let pixels = [Rgb::new(10, 20, 30)];
        let histo = Histogram::from_pixels(&pixels);
        let vbox = VBox::from_pixels(&pixels);

        let (a, b) = median_cut_apply(&histo, &vbox).unwrap();
        assert!(b.is_none());
        assert_eq!(a.count(&histo), 1);
    }

    #[test]
    fn test_empty_box_yields_no_cut() {
        let pixels = [Rgb::new(255, 255, 255)];
        let histo = Histogram::from_pixels(&pixels);
        let vbox = VBox::new(0, 3, 0, 3, 0, 3);
        assert!(median_cut_apply(&histo, &vbox).is_none());
    }

    #[test]
    fn test_widest_axis_is_cut() {
        // green spans the full range, red and blue a single cell
        let mut pixels = Vec::new();
        for g in 0..32u8 {
            pixels.push(Rgb::new(100, g * 8, 100));
        }
        let histo = Histogram::from_pixels(&pixels);
        let vbox = VBox::from_pixels(&pixels);

        let (a, b) = median_cut_apply(&histo, &vbox).unwrap();
        let b = b.unwrap();
        // the cut partitioned the green axis
        assert_eq!(a.axis_bounds(Axis::Red), b.axis_bounds(Axis::Red));
        assert_eq!(a.axis_bounds(Axis::Blue), b.axis_bounds(Axis::Blue));
        let (_, a_hi) = a.axis_bounds(Axis::Green);
        let (b_lo, _) = b.axis_bounds(Axis::Green);
        assert_eq!(b_lo, a_hi + 1);
    }
}
