//! Error types for swatch-core

use thiserror::Error;

/// Errors that can occur while constructing color primitives
#[derive(Debug, Error)]
pub enum CoreError {
    /// Interleaved RGBA buffer with a truncated final pixel
    #[error("invalid rgba buffer length: {len} is not a multiple of 4")]
    InvalidBufferLength { len: usize },

    /// Hex color string that does not parse as `#rrggbb`
    #[error("invalid hex color: {0:?}")]
    InvalidHexColor(String),
}

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;
