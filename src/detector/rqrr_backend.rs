use rqrr::PreparedImage;

use super::SymbolDetector;
use crate::error::{Result, ScanError};
use crate::models::{ColorMode, ECLevel, Point, RasterImage, RawDecodeResult, Region, SymbolInfo};

/// Detector backed by the `rqrr` grid finder and decoder
///
/// Works on grayscale rasters only. Grids that rqrr locates but cannot
/// error-correct are not reported as symbols.
#[derive(Debug, Clone, Copy, Default)]
pub struct RqrrDetector;

impl RqrrDetector {
    /// Create a new detector
    pub fn new() -> Self {
        Self
    }
}

impl SymbolDetector for RqrrDetector {
    fn detect(&self, image: &RasterImage) -> Result<Vec<RawDecodeResult>> {
        if image.is_empty() {
            return Err(ScanError::Detection("raster has no pixels".to_string()));
        }
        if image.mode() != ColorMode::Grayscale {
            return Err(ScanError::Detection(format!(
                "expected a grayscale raster, got {:?}",
                image.mode()
            )));
        }

        let (width, height) = (image.width() as usize, image.height() as usize);
        let mut prepared = PreparedImage::prepare_from_greyscale(width, height, |x, y| image.luma(x, y));
        let grids = prepared.detect_grids();
        log::debug!("located {} candidate grids", grids.len());

        let mut results = Vec::with_capacity(grids.len());
        for (idx, grid) in grids.iter().enumerate() {
            let mut data = Vec::new();
            match grid.decode_to(&mut data) {
                Ok(meta) => {
                    let region = region_from_bounds(&grid.bounds);
                    log::trace!("grid {} decoded {} bytes at {:?}", idx, data.len(), region);
                    let info = SymbolInfo {
                        version: meta.version.0 as u8,
                        ec_level: ECLevel::from_format_bits(meta.ecc_level),
                        mask: meta.mask as u8,
                    };
                    results.push(RawDecodeResult::new(data, region).with_info(info));
                }
                Err(err) => {
                    log::debug!("grid {} could not be decoded: {:?}", idx, err);
                }
            }
        }

        Ok(results)
    }
}

fn region_from_bounds(bounds: &[rqrr::Point; 4]) -> Region {
    Region::new([0, 1, 2, 3].map(|i| Point::new(bounds[i].x as f32, bounds[i].y as f32)))
}
