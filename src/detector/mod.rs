//! QR symbol location and decoding
//!
//! The pipeline only depends on [`SymbolDetector`]. Error correction and
//! finder-pattern geometry are delegated to an implementation of that trait;
//! [`RqrrDetector`] is the one used by default.

mod rqrr_backend;

pub use rqrr_backend::RqrrDetector;

use crate::error::Result;
use crate::models::{RasterImage, RawDecodeResult};

/// Finds and decodes every QR symbol in a raster
///
/// Implementations report symbols in their own order and must not filter or
/// deduplicate them. Failing to run at all is an error; finding nothing is
/// an empty vector.
pub trait SymbolDetector {
    /// Detect and decode all QR symbols in `image`
    fn detect(&self, image: &RasterImage) -> Result<Vec<RawDecodeResult>>;
}

impl<D: SymbolDetector + ?Sized> SymbolDetector for &D {
    fn detect(&self, image: &RasterImage) -> Result<Vec<RawDecodeResult>> {
        (**self).detect(image)
    }
}
