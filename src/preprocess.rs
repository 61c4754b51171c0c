//! Raster preparation ahead of symbol detection.
//!
//! Detectors resolve modules more reliably when each module spans several
//! samples, so the source is reduced to luminance and blown up by an integer
//! factor with nearest-neighbour sampling (hard module edges stay hard).

use crate::config::PreprocessConfig;
use crate::error::{Result, ScanError};
use crate::models::{ColorMode, RasterImage};
use crate::utils::grayscale::rgb_to_grayscale_parallel;
use crate::utils::resample::upscale_nearest;

/// Reduce a raster to one luminance channel
pub fn to_grayscale(image: &RasterImage) -> Result<RasterImage> {
    let (w, h) = (image.width(), image.height());
    let luma = match image.mode() {
        ColorMode::Grayscale => image.samples().to_vec(),
        ColorMode::Color => rgb_to_grayscale_parallel(image.samples(), w as usize, h as usize),
    };
    RasterImage::from_luma(w, h, luma)
}

/// Dimensions of a `width x height` raster upscaled by `factor`
///
/// Fails with `ImageTooLarge` when the result cannot be addressed in memory,
/// or when `max_pixels` is set and the result exceeds it.
pub fn upscaled_dimensions(
    width: u32,
    height: u32,
    factor: u32,
    max_pixels: Option<u64>,
) -> Result<(u32, u32)> {
    let too_large = || ScanError::ImageTooLarge { width, height };
    let out_w = width.checked_mul(factor).ok_or_else(too_large)?;
    let out_h = height.checked_mul(factor).ok_or_else(too_large)?;
    let pixels = out_w as u64 * out_h as u64;
    if usize::try_from(pixels).is_err() {
        return Err(too_large());
    }
    if max_pixels.is_some_and(|max| pixels > max) {
        return Err(too_large());
    }
    Ok((out_w, out_h))
}

/// Upscale a grayscale raster by `factor` in both directions
pub fn upscale(image: &RasterImage, factor: u32, max_pixels: Option<u64>) -> Result<RasterImage> {
    if image.mode() != ColorMode::Grayscale {
        return Err(ScanError::UnexpectedColorMode {
            expected: ColorMode::Grayscale,
            actual: image.mode(),
        });
    }
    let (w, h) = (image.width(), image.height());
    let (out_w, out_h) = upscaled_dimensions(w, h, factor, max_pixels)?;

    let samples = upscale_nearest(image.samples(), w as usize, h as usize, factor as usize);
    RasterImage::from_luma(out_w, out_h, samples)
}

/// Grayscale conversion followed by the configured upscale
///
/// Produces a `(k*w, k*h)` single-channel raster for any non-empty input,
/// whatever its colour mode. The input is left untouched.
pub fn preprocess(image: &RasterImage, config: &PreprocessConfig) -> Result<RasterImage> {
    if image.is_empty() {
        return Err(ScanError::EmptyImage);
    }
    let gray = to_grayscale(image)?;
    let scaled = upscale(&gray, config.upscale_factor(), config.max_pixels())?;
    log::debug!(
        "preprocessed {}x{} {:?} -> {}x{} grayscale",
        image.width(),
        image.height(),
        image.mode(),
        scaled.width(),
        scaled.height()
    );
    Ok(scaled)
}
