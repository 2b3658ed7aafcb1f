//! Regression tests for median cut quantization
//!
//! Exercises the public contract: palette size bounds, dominance ordering,
//! count conservation, the soft no-op on invalid parameters, and the
//! degenerate single-color inputs.

use swatch_core::Rgb;
use swatch_quant::quantize;

/// Interleave a color gradient, `steps` distinct colors, `per_step` pixels each
fn make_gradient(steps: u8, per_step: usize) -> Vec<Rgb> {
    let mut pixels = Vec::new();
    for i in 0..steps {
        let v = i.wrapping_mul(255 / steps.max(1));
        for _ in 0..per_step {
            pixels.push(Rgb::new(v, 255 - v, i));
        }
    }
    pixels
}

/// A 64x64 two-axis color sweep with plenty of distinct colors
fn make_sweep() -> Vec<Rgb> {
    let mut pixels = Vec::new();
    for y in 0..64u32 {
        for x in 0..64u32 {
            pixels.push(Rgb::new((x * 4) as u8, (y * 4) as u8, 128));
        }
    }
    pixels
}

#[test]
fn test_uniform_red_returns_single_entry() {
    let pixels = vec![Rgb::new(255, 0, 0); 100];
    let cmap = quantize(&pixels, 5);

    assert_eq!(cmap.palette(), vec![Rgb::new(255, 0, 0)]);
    assert_eq!(cmap.palette_with_counts(), vec![(Rgb::new(255, 0, 0), 100)]);
}

#[test]
fn test_black_and_white_split() {
    let mut pixels = vec![Rgb::new(0, 0, 0); 50];
    pixels.extend(vec![Rgb::new(255, 255, 255); 50]);

    let palette = quantize(&pixels, 2).palette();
    assert_eq!(palette.len(), 2);
    assert!(palette.contains(&Rgb::new(0, 0, 0)));
    assert!(palette.contains(&Rgb::new(255, 255, 255)));
}

#[test]
fn test_higher_count_comes_first() {
    let mut pixels = vec![Rgb::new(0, 0, 0); 60];
    pixels.extend(vec![Rgb::new(255, 255, 255); 40]);

    let with_counts = quantize(&pixels, 2).palette_with_counts();
    assert_eq!(with_counts.len(), 2);
    assert!(with_counts[0].1 >= with_counts[1].1);
    assert_eq!(with_counts[0], (Rgb::new(0, 0, 0), 60));
}

#[test]
fn test_palette_len_bounded() {
    let pixels = make_sweep();
    for max_colors in [1, 2, 4, 16, 64] {
        let palette = quantize(&pixels, max_colors).palette();
        assert!(palette.len() <= max_colors as usize);
        assert!(!palette.is_empty());
    }
}

#[test]
fn test_enough_colors_reaches_target() {
    let pixels = make_sweep();
    assert_eq!(quantize(&pixels, 16).len(), 16);
    assert_eq!(quantize(&pixels, 4).len(), 4);
}

#[test]
fn test_counts_are_conserved() {
    let pixels = make_sweep();
    for max_colors in [2, 5, 16] {
        let total: u64 = quantize(&pixels, max_colors)
            .palette_with_counts()
            .iter()
            .map(|&(_, count)| count as u64)
            .sum();
        assert_eq!(total, pixels.len() as u64);
    }
}

#[test]
fn test_invalid_max_colors_yields_empty_map() {
    let pixels = make_gradient(16, 4);

    assert!(quantize(&pixels, 0).is_empty());
    assert!(quantize(&pixels, 257).is_empty());
    assert!(quantize(&pixels, 300).is_empty());
}

#[test]
fn test_empty_pixels_yield_empty_map() {
    let cmap = quantize(&[], 16);
    assert!(cmap.is_empty());
    assert!(cmap.palette().is_empty());
}

#[test]
fn test_palette_entries_are_valid_colors() {
    // u8 channels cannot escape [0, 255]; check the entries are plausible
    // averages of the input rather than box-center artifacts
    let pixels = make_sweep();
    let palette = quantize(&pixels, 8).palette();
    for color in palette {
        assert!(color.r <= 252);
        assert_eq!(color.b, 128);
    }
}

#[test]
fn test_map_probe_roundtrip() {
    let mut pixels = vec![Rgb::new(250, 5, 5); 30];
    pixels.extend(vec![Rgb::new(5, 5, 250); 30]);
    let cmap = quantize(&pixels, 2);

    assert_eq!(cmap.map(Rgb::new(255, 0, 0)), Some(Rgb::new(250, 5, 5)));
    assert_eq!(cmap.nearest(Rgb::new(0, 0, 255)), Some(Rgb::new(5, 5, 250)));
}

#[test]
fn test_force_bw_snaps_extremes() {
    let mut pixels = vec![Rgb::new(2, 2, 2); 40];
    pixels.extend(vec![Rgb::new(253, 253, 253); 40]);

    let mut cmap = quantize(&pixels, 2);
    cmap.force_bw();

    let palette = cmap.palette();
    assert!(palette.contains(&Rgb::new(0, 0, 0)));
    assert!(palette.contains(&Rgb::new(255, 255, 255)));
}
