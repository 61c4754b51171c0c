use std::path::Path;

use image::{ColorType, DynamicImage, GenericImageView};

use crate::error::{Result, ScanError};
use crate::models::RasterImage;

/// Load an image file as a raster.
///
/// Luminance-only files become grayscale rasters; everything else is
/// flattened to RGB (alpha is dropped).
pub fn load_raster<P: AsRef<Path>>(path: P) -> Result<RasterImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| ScanError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let (width, height) = img.dimensions();
    log::debug!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        width,
        height,
        img.color()
    );
    from_dynamic(img)
}

/// Convert a decoded `image` buffer into a raster.
pub fn from_dynamic(img: DynamicImage) -> Result<RasterImage> {
    match img.color() {
        ColorType::L8 | ColorType::La8 | ColorType::L16 | ColorType::La16 => {
            let luma = img.to_luma8();
            let (width, height) = luma.dimensions();
            RasterImage::from_luma(width, height, luma.into_raw())
        }
        _ => {
            let rgb = img.to_rgb8();
            let (width, height) = rgb.dimensions();
            RasterImage::from_rgb(width, height, rgb.into_raw())
        }
    }
}
