//! Swatch Core - Pixel and color primitives for palette extraction
//!
//! This crate provides the shared building blocks used by the quantization
//! engines and their consumers:
//!
//! - [`Rgb`] - 8-bit sRGB pixel, plus RGBA buffer ingestion ([`rgb_from_rgba`])
//! - Color math ([`color`]): relative luminance, luminance sorting,
//!   hex/HSL formatting, light/dark theme classification

pub mod color;
pub mod error;
pub mod pixel;

// Re-export error types
pub use error::{CoreError, CoreResult};

// Re-export pixel types
pub use pixel::{Rgb, rgb_from_rgba};

// Re-export color math
pub use color::{
    // Types
    Hsl,
    ThemeMode,
    // Functions
    relative_luminance,
    rgb_to_hex,
    rgb_to_hsl,
    sort_by_luminance,
    srgb_to_linear,
    theme_mode,
};
