//! Drawing seam between the session and whatever hosts it.
//!
//! The session never touches a real painter; it hands finished screen-space
//! geometry to a [`DrawSurface`]. The egui host adapts this onto an
//! `egui::Painter`; tests record the calls instead.

use egui::Color32;

use crate::geom::{Point, Segment};

/// Receiver for the session's draw output.
pub trait DrawSurface {
    /// Draw an open polyline through `points` (screen space, x-ascending).
    ///
    /// `points` may contain non-finite y values; implementations are
    /// expected to skip or split around them.
    fn draw_polyline(&mut self, points: &[Point], color: Color32, width: f32);

    /// Draw one of the fixed axis reference lines.
    fn draw_reference_line(&mut self, line: Segment);
}
