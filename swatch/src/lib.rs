//! Swatch - Color palette extraction for Rust
//!
//! Reduces a decoded image's pixels to a small, ordered palette of
//! representative colors using one of two quantization algorithms:
//! modified median cut (MMCQ) or octree reduction. Companion color math
//! derives luminance orderings, hex/HSL renderings, and a light/dark
//! theme classification from the resulting palette.
//!
//! # Example
//!
//! ```
//! use swatch::{Rgb, quant, rgb_to_hex};
//!
//! // a solid red image collapses to a single palette entry
//! let pixels = vec![Rgb::new(255, 0, 0); 100];
//! let cmap = quant::quantize(&pixels, 5);
//! assert_eq!(cmap.palette(), vec![Rgb::new(255, 0, 0)]);
//! assert_eq!(rgb_to_hex(cmap.palette()[0]), "#ff0000");
//! ```
//!
//! Invalid parameters never panic or error: an empty pixel set or a color
//! target outside `1..=256` logs a diagnostic and returns an empty palette.

// Re-export core types (pixels, color math, errors)
pub use swatch_core::*;

// Re-export the quantization engines as a module
pub use swatch_quant as quant;
