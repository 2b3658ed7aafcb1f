//! Pixel primitives
//!
//! An image, for the purposes of this library, is just a flat sequence of
//! 8-bit sRGB triplets. Callers decode their image with whatever codec they
//! like and hand the interleaved RGBA bytes to [`rgb_from_rgba`].

use crate::error::{CoreError, CoreResult};

/// An 8-bit sRGB pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new pixel
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string (leading `#` optional)
    pub fn from_hex(s: &str) -> CoreResult<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(CoreError::InvalidHexColor(s.to_string()));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| CoreError::InvalidHexColor(s.to_string()))
        };
        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }

    /// Sum of the three channels
    pub fn channel_sum(self) -> u32 {
        self.r as u32 + self.g as u32 + self.b as u32
    }
}

/// Extract RGB pixels from a flat interleaved RGBA byte buffer.
///
/// The alpha channel is ignored. The buffer length must be a multiple of 4.
pub fn rgb_from_rgba(data: &[u8]) -> CoreResult<Vec<Rgb>> {
    if data.len() % 4 != 0 {
        return Err(CoreError::InvalidBufferLength { len: data.len() });
    }

    Ok(data
        .chunks_exact(4)
        .map(|px| Rgb::new(px[0], px[1], px[2]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_rgba() {
        let data = [255, 0, 0, 255, 0, 128, 64, 0];
        let pixels = rgb_from_rgba(&data).unwrap();
        assert_eq!(pixels, vec![Rgb::new(255, 0, 0), Rgb::new(0, 128, 64)]);
    }

    #[test]
    fn test_rgb_from_rgba_ignores_alpha() {
        let opaque = rgb_from_rgba(&[10, 20, 30, 255]).unwrap();
        let clear = rgb_from_rgba(&[10, 20, 30, 0]).unwrap();
        assert_eq!(opaque, clear);
    }

    #[test]
    fn test_rgb_from_rgba_truncated() {
        let result = rgb_from_rgba(&[255, 0, 0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("#ff8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::from_hex("00ff00").unwrap(), Rgb::new(0, 255, 0));
        assert!(Rgb::from_hex("#f80").is_err());
        assert!(Rgb::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn test_channel_sum() {
        assert_eq!(Rgb::new(255, 255, 255).channel_sum(), 765);
        assert_eq!(Rgb::new(0, 0, 0).channel_sum(), 0);
    }
}
