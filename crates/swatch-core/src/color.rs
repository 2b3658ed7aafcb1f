//! Color math utilities
//!
//! Pure functions over [`Rgb`] values:
//! - sRGB linearization and WCAG relative luminance
//! - Luminance-ordered palette sorting
//! - Hex and HSL formatting
//! - Light/dark theme classification driven by the dominant palette colors

use crate::pixel::Rgb;
use std::fmt;

/// Relative luminance below which the dominant color alone forces dark mode
pub const VERY_DARK_LUMINANCE: f64 = 0.015;

/// Relative luminance below which the averaged top colors select dark mode
pub const DARK_MODE_LUMINANCE: f64 = 0.08;

/// Convert an 8-bit sRGB gamma-compressed channel to linear light.
///
/// Piecewise curve: `c / 12.92` below the 0.04045 threshold, else
/// `((c + 0.055) / 1.055)^2.4`.
pub fn srgb_to_linear(value: u8) -> f64 {
    let norm = value as f64 / 255.0;
    if norm > 0.04045 {
        ((norm + 0.055) / 1.055).powf(2.4)
    } else {
        norm / 12.92
    }
}

/// Relative luminance of a color, per ITU-R BT.709 weights.
///
/// Ranges from 0.0 (black) to 1.0 (white).
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * srgb_to_linear(color.r)
        + 0.7152 * srgb_to_linear(color.g)
        + 0.0722 * srgb_to_linear(color.b)
}

/// Return a copy of the palette sorted by descending relative luminance.
///
/// The sort is stable, so applying it twice gives the same result.
pub fn sort_by_luminance(palette: &[Rgb]) -> Vec<Rgb> {
    let mut sorted = palette.to_vec();
    sorted.sort_by(|a, b| relative_luminance(*b).total_cmp(&relative_luminance(*a)));
    sorted
}

/// Format a color as a lowercase `#rrggbb` hex string
pub fn rgb_to_hex(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// HSL color representation
///
/// - `h`: Hue in whole degrees [0, 360)
/// - `s`: Saturation in range [0.0, 1.0], rounded to 2 decimals
/// - `l`: Lightness in range [0.0, 1.0], rounded to 2 decimals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    /// Create a new HSL color
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.h, self.s, self.l)
    }
}

/// Convert an 8-bit RGB color to HSL using the standard min/max/delta formula
pub fn rgb_to_hsl(color: Rgb) -> Hsl {
    let r = color.r as f32 / 255.0;
    let g = color.g as f32 / 255.0;
    let b = color.b as f32 / 255.0;

    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);
    let delta = cmax - cmin;

    let mut h = if delta == 0.0 {
        0.0
    } else if cmax == r {
        ((g - b) / delta) % 6.0
    } else if cmax == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    h = (h * 60.0).round();
    if h < 0.0 {
        h += 360.0;
    }

    let l = (cmax + cmin) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    Hsl::new(h, round2(s), round2(l))
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

/// Page theme derived from a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Classify a dominance-ordered palette as light or dark.
///
/// Dark mode is chosen when the dominant color is nearly black
/// ([`VERY_DARK_LUMINANCE`]), or when the mean luminance of the top three
/// entries falls below [`DARK_MODE_LUMINANCE`]. An empty palette is light.
pub fn theme_mode(palette: &[Rgb]) -> ThemeMode {
    let Some(&dominant) = palette.first() else {
        return ThemeMode::Light;
    };

    if relative_luminance(dominant) < VERY_DARK_LUMINANCE {
        return ThemeMode::Dark;
    }

    let top = &palette[..palette.len().min(3)];
    let mean = top.iter().map(|&c| relative_luminance(c)).sum::<f64>() / top.len() as f64;
    if mean < DARK_MODE_LUMINANCE {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}
