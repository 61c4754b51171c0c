//! Utility functions for image processing
//!
//! This module provides the raster helpers used by preprocessing:
//! - Grayscale conversion (RGB to luminance)
//! - Nearest-neighbour upscaling

/// RGB to luminance conversion
pub mod grayscale;
/// Integer-factor resampling
pub mod resample;
