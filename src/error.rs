//! Error type shared by every pipeline stage.
//!
//! Only unrecoverable conditions live here. A payload that fails base64
//! validation is not an error (see [`crate::validate::Validation`]), and
//! neither is an image with zero or several symbols.

use std::path::PathBuf;

use crate::models::ColorMode;

/// Fatal failure of a scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The image file could not be opened or decoded.
    #[error("failed to load image {}: {source}", path.display())]
    Load {
        /// Path that was requested
        path: PathBuf,
        /// Underlying decoder error
        #[source]
        source: image::ImageError,
    },

    /// Sample buffer does not match the declared dimensions.
    #[error("raster buffer holds {actual} bytes, expected {expected} for {width}x{height}")]
    InvalidRaster {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
        /// Bytes required by width, height and channel count
        expected: usize,
        /// Bytes supplied
        actual: usize,
    },

    /// Zero width or height.
    #[error("image has no pixels")]
    EmptyImage,

    /// Upscaled raster would overflow the address space or exceed an
    /// explicitly configured pixel budget.
    #[error("image {width}x{height} is too large to upscale")]
    ImageTooLarge {
        /// Source width
        width: u32,
        /// Source height
        height: u32,
    },

    /// A stage received a raster in the wrong colour mode.
    #[error("expected a {expected:?} raster, got {actual:?}")]
    UnexpectedColorMode {
        /// Mode the stage works on
        expected: ColorMode,
        /// Mode of the raster supplied
        actual: ColorMode,
    },

    /// Rejected configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The symbol detector could not run on the supplied raster.
    #[error("symbol detection failed: {0}")]
    Detection(String),

    /// Writing diagnostics or payloads failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ScanError>;
