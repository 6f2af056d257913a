//! Unified error types for pixfont_engine

use thiserror::Error;

/// Main error type for font engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Bitmask Format Errors ===
    #[error("Invalid bitmask font format: {length} bytes (length must be a multiple of 256 and encode a multiple of 8 rows per glyph)")]
    InvalidFormat { length: usize },

    // === Font Errors ===
    #[error("Incomplete font: no glyph for character code {code}")]
    IncompleteFont { code: u8 },

    #[error("Glyph for character code {code} has {actual} cells, expected {expected}")]
    GlyphSizeMismatch { code: u8, actual: usize, expected: usize },

    // === Pixel Access Errors ===
    #[error("Pixel ({x}, {y}) out of bounds for {width}x{height} glyph")]
    OutOfBounds { x: i32, y: i32, width: i32, height: i32 },

    // === Raster Export Errors ===
    #[error("Raster buffer has {actual} bytes, expected {expected} for {size}")]
    RasterSizeMismatch { actual: usize, expected: usize, size: crate::Size },

    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    #[error("{0}")]
    Generic(String),
}

/// Result type alias for font engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Create a generic error from any displayable type
    pub fn generic(msg: impl std::fmt::Display) -> Self {
        Self::Generic(msg.to_string())
    }
}
