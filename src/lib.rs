//! qr_payload - base64 payload extraction from QR code images
//!
//! A single still image goes through four stages:
//! 1. [`preprocess`]: grayscale conversion and a 4x nearest-neighbour upscale
//! 2. [`detector`]: QR symbol location and decoding
//! 3. [`validate`]: strict base64 validation of each symbol's bytes
//! 4. [`report`]: classification into outcomes and streaming output
//!
//! ```no_run
//! let scan = qr_payload::scan_file("code.png")?;
//! qr_payload::Reporter::new(std::io::stdout().lock()).emit(&scan.outcomes)?;
//! # Ok::<(), qr_payload::ScanError>(())
//! ```

#![warn(missing_docs)]

/// Preprocessing and pipeline settings
pub mod config;
/// QR symbol detection behind the `SymbolDetector` trait
pub mod detector;
/// Fatal error type
pub mod error;
/// Image file loading
pub mod loader;
/// Core data structures (RasterImage, Region, RawDecodeResult)
pub mod models;
/// Stage composition
pub mod pipeline;
/// Grayscale + upscale preparation
pub mod preprocess;
/// Outcome classification and output
pub mod report;
/// Utility functions (grayscale, resampling)
pub mod utils;
/// Base64 payload validation
pub mod validate;

use std::path::Path;

pub use config::{PipelineConfig, PreprocessConfig};
pub use detector::{RqrrDetector, SymbolDetector};
pub use error::{Result, ScanError};
pub use models::{ColorMode, RasterImage, RawDecodeResult, Region};
pub use pipeline::{Pipeline, Scan, scan};
pub use report::{Outcome, Reporter};
pub use validate::{InvalidPayload, ValidatedPayload, Validation};

/// Load an image file and run the default pipeline over it
pub fn scan_file<P: AsRef<Path>>(path: P) -> Result<Scan> {
    let image = loader::load_raster(path)?;
    scan(image)
}
