use crate::error::{Result, ScanError};

/// Pixel layout of a [`RasterImage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Interleaved RGB, 3 bytes per pixel
    Color,
    /// Single luminance channel, 1 byte per pixel
    Grayscale,
}

impl ColorMode {
    /// Bytes per pixel
    pub fn channels(&self) -> usize {
        match self {
            ColorMode::Color => 3,
            ColorMode::Grayscale => 1,
        }
    }
}

/// Immutable 2-D grid of pixel samples
///
/// Every pipeline stage produces a new raster instead of editing one in
/// place, so a raster is only ever owned by the stage holding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    mode: ColorMode,
    samples: Vec<u8>,
}

impl RasterImage {
    /// Build a raster, checking the buffer against the dimensions
    pub fn new(width: u32, height: u32, mode: ColorMode, samples: Vec<u8>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(mode.channels()))
            .ok_or(ScanError::ImageTooLarge { width, height })?;
        if samples.len() != expected {
            return Err(ScanError::InvalidRaster {
                width,
                height,
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            mode,
            samples,
        })
    }

    /// Build an RGB raster
    pub fn from_rgb(width: u32, height: u32, rgb: Vec<u8>) -> Result<Self> {
        Self::new(width, height, ColorMode::Color, rgb)
    }

    /// Build a grayscale raster
    pub fn from_luma(width: u32, height: u32, luma: Vec<u8>) -> Result<Self> {
        Self::new(width, height, ColorMode::Grayscale, luma)
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Colour mode tag
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Raw sample bytes, row-major
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// True when the raster has no pixels
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Luminance sample at (x, y); only meaningful for grayscale rasters
    pub fn luma(&self, x: usize, y: usize) -> u8 {
        self.samples[y * self.width as usize + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_length() {
        assert!(RasterImage::from_rgb(2, 2, vec![0; 12]).is_ok());
        let err = RasterImage::from_rgb(2, 2, vec![0; 4]).unwrap_err();
        assert!(matches!(
            err,
            ScanError::InvalidRaster {
                expected: 12,
                actual: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_luma_indexing() {
        let img = RasterImage::from_luma(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(img.luma(0, 0), 0);
        assert_eq!(img.luma(2, 0), 2);
        assert_eq!(img.luma(1, 1), 4);
        assert_eq!(img.mode(), ColorMode::Grayscale);
    }

    #[test]
    fn test_empty() {
        let img = RasterImage::from_luma(0, 5, Vec::new()).unwrap();
        assert!(img.is_empty());
    }
}
