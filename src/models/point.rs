/// 2D point with floating point coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another point
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Divide both coordinates by `factor`
    pub fn scaled_down(&self, factor: u32) -> Self {
        let f = factor.max(1) as f32;
        Self {
            x: self.x / f,
            y: self.y / f,
        }
    }
}

/// Axis-aligned rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    /// Left edge
    pub min_x: f32,
    /// Top edge
    pub min_y: f32,
    /// Right edge
    pub max_x: f32,
    /// Bottom edge
    pub max_y: f32,
}

impl BoundingBox {
    /// Horizontal extent
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Vertical extent
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Quadrilateral occupied by a detected symbol
///
/// Corners are stored in the order the detector reports them (clockwise from
/// the top-left finder pattern for rqrr).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    /// Corner points in image coordinates
    pub corners: [Point; 4],
}

impl Region {
    /// Create a region from four corners
    pub fn new(corners: [Point; 4]) -> Self {
        Self { corners }
    }

    /// Smallest axis-aligned box containing every corner
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bb = BoundingBox {
            min_x: f32::INFINITY,
            min_y: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            max_y: f32::NEG_INFINITY,
        };
        for p in &self.corners {
            bb.min_x = bb.min_x.min(p.x);
            bb.min_y = bb.min_y.min(p.y);
            bb.max_x = bb.max_x.max(p.x);
            bb.max_y = bb.max_y.max(p.y);
        }
        bb
    }

    /// Map the region back through an integer upscale
    pub fn scaled_down(&self, factor: u32) -> Self {
        Self {
            corners: self.corners.map(|p| p.scaled_down(factor)),
        }
    }

    /// Mean length of the four edges
    pub fn mean_side(&self) -> f32 {
        let c = &self.corners;
        (c[0].distance(&c[1]) + c[1].distance(&c[2]) + c[2].distance(&c[3]) + c[3].distance(&c[0]))
            / 4.0
    }
}
