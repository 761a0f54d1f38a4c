//! Plain geometry value types shared by the frame, the session and the host.
//!
//! A `Point` means different things depending on where it travels: equation
//! space (continuous, y up) or screen space (pixels, y down). The type does
//! not tag the space; the conversion methods on `CoordinateFrame` are the
//! only crossing points.

/// An immutable pair of coordinates. All operations return new points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The zero point.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply each coordinate by its own factor.
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        Self {
            x: self.x * sx,
            y: self.y * sy,
        }
    }

    /// Componentwise sum.
    pub fn add(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Componentwise difference.
    pub fn subtract(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// A straight line between two screen points, used for the axis lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Pixel dimensions of the drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Screen-space center of the drawing area.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// The smaller of the two dimensions.
    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }
}
