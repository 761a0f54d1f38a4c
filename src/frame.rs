//! The bidirectional mapping between equation space and screen space.
//!
//! A frame is fully described by `origin` (the pixel where equation-space
//! (0,0) sits) and `scale` (pixels per equation unit, uniform on both axes).
//! Derived quantities like the visible x-range and the sampling step are
//! computed on demand, never cached.

use crate::error::{FuncPlotError, Result};
use crate::geom::Point;

/// Affine view transform with a strictly positive scale.
///
/// `Copy`, so recalculation passes work against a snapshot of the frame and
/// a later mutation cannot bleed into an in-flight pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateFrame {
    origin: Point,
    scale: f64,
}

impl CoordinateFrame {
    /// Create a frame. Fails if `scale` is not strictly positive.
    pub fn new(origin: Point, scale: f64) -> Result<Self> {
        if !(scale > 0.0) {
            return Err(FuncPlotError::non_positive_scale(scale));
        }
        Ok(Self { origin, scale })
    }

    /// Screen position of equation-space (0,0).
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Pixels per equation-space unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Replace the scale. Fails if `scale` is not strictly positive; the
    /// frame is left untouched in that case.
    pub fn set_scale(&mut self, scale: f64) -> Result<()> {
        if !(scale > 0.0) {
            return Err(FuncPlotError::non_positive_scale(scale));
        }
        self.scale = scale;
        Ok(())
    }

    /// Map an equation-space point to screen space.
    ///
    /// The y factor is negated because screen y grows downward while
    /// equation y grows upward.
    pub fn to_screen(&self, p: Point) -> Point {
        p.scale(self.scale, -self.scale).add(self.origin)
    }

    /// Map a screen point back to equation space. Exact inverse of
    /// [`to_screen`](Self::to_screen) up to floating-point rounding.
    pub fn to_equation(&self, p: Point) -> Point {
        p.subtract(self.origin)
            .scale(1.0 / self.scale, -1.0 / self.scale)
    }

    /// Equation-space x bounds visible across `viewport_width` pixels.
    /// Always `xmin < xmax` for a positive width.
    pub fn visible_x_range(&self, viewport_width: f64) -> (f64, f64) {
        let xmin = self.to_equation(Point::ORIGIN).x;
        let xmax = self.to_equation(Point::new(viewport_width, 0.0)).x;
        (xmin, xmax)
    }

    /// Equation-space x increment between neighbouring samples: `2 / scale`,
    /// i.e. one sample every two screen pixels regardless of zoom.
    pub fn sampling_step(&self) -> f64 {
        2.0 / self.scale
    }
}
