use crate::error::{Result, ScanError};

/// Integer factor applied by the preprocessor
pub const DEFAULT_UPSCALE_FACTOR: u32 = 4;

/// Preprocessing settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreprocessConfig {
    upscale_factor: u32,
    max_pixels: Option<u64>,
}

impl PreprocessConfig {
    /// Use a different upscale factor; zero is rejected
    pub fn with_upscale_factor(mut self, factor: u32) -> Result<Self> {
        if factor == 0 {
            return Err(ScanError::InvalidConfig(
                "upscale factor must be at least 1".to_string(),
            ));
        }
        self.upscale_factor = factor;
        Ok(self)
    }

    /// Cap the number of pixels in the upscaled raster
    ///
    /// Unbounded by default; only address-space overflow is rejected.
    pub fn with_max_pixels(mut self, max_pixels: u64) -> Self {
        self.max_pixels = Some(max_pixels);
        self
    }

    /// Integer upscale factor
    pub fn upscale_factor(&self) -> u32 {
        self.upscale_factor
    }

    /// Pixel budget for the upscaled raster, if one was set
    pub fn max_pixels(&self) -> Option<u64> {
        self.max_pixels
    }
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            upscale_factor: DEFAULT_UPSCALE_FACTOR,
            max_pixels: None,
        }
    }
}

/// Settings for a whole scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Preprocessor settings
    pub preprocess: PreprocessConfig,
}
