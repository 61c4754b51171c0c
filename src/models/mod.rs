/// Points, bounding boxes and symbol regions
pub mod point;
/// Pixel rasters passed between pipeline stages
pub mod raster;
/// Detected symbols and their metadata
pub mod symbol;

pub use point::{BoundingBox, Point, Region};
pub use raster::{ColorMode, RasterImage};
pub use symbol::{ECLevel, RawDecodeResult, SymbolInfo};
