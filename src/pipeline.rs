use crate::config::PipelineConfig;
use crate::detector::{RqrrDetector, SymbolDetector};
use crate::error::Result;
use crate::models::RasterImage;
use crate::preprocess::preprocess;
use crate::report::{Outcome, classify};
use crate::validate::{ValidatedPayload, Validation, validate_all};

/// Everything one run of the pipeline produced
#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    /// Per-symbol validation results, in detector order
    pub validations: Vec<Validation>,
    /// Ordered outcomes to report
    pub outcomes: Vec<Outcome>,
    /// Factor the raster was upscaled by before detection
    pub upscale_factor: u32,
}

impl Scan {
    /// Number of symbols the detector reported
    pub fn symbol_count(&self) -> usize {
        self.validations.len()
    }

    /// Validated payloads in detector order
    pub fn payloads(&self) -> impl Iterator<Item = &ValidatedPayload> {
        self.validations.iter().filter_map(Validation::payload)
    }
}

/// Preprocess, detect, validate, classify
///
/// Holds no state between runs; the same raster always yields the same
/// [`Scan`].
#[derive(Debug, Clone, Default)]
pub struct Pipeline<D = RqrrDetector> {
    detector: D,
    config: PipelineConfig,
}

impl Pipeline<RqrrDetector> {
    /// Pipeline with the default detector and settings
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: SymbolDetector> Pipeline<D> {
    /// Pipeline using a custom detector
    pub fn with_detector(detector: D) -> Self {
        Self {
            detector,
            config: PipelineConfig::default(),
        }
    }

    /// Replace the settings
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the pipeline over one raster
    pub fn run(&self, image: RasterImage) -> Result<Scan> {
        let prepared = preprocess(&image, &self.config.preprocess)?;
        drop(image);

        let raws = self.detector.detect(&prepared)?;
        log::debug!("detector reported {} symbols", raws.len());

        let validations = validate_all(raws);
        let outcomes = classify(&validations);

        Ok(Scan {
            validations,
            outcomes,
            upscale_factor: self.config.preprocess.upscale_factor(),
        })
    }
}

/// Run the default pipeline over one raster
pub fn scan(image: RasterImage) -> Result<Scan> {
    Pipeline::new().run(image)
}
