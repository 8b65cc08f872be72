//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while loading presentation resources.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Failed to read or decode an image file.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The decoded image has a zero dimension and cannot be displayed.
    #[error("image has invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
