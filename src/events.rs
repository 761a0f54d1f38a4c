//! Input events consumed by [`PlotSession::dispatch`](crate::PlotSession::dispatch).
//!
//! The host translates raw pointer/timer/button activity into these discrete
//! events; the session applies each one as a single atomic transition
//! (mutate state, recompute the affected polylines, return). Keeping the
//! vocabulary explicit makes the invalidation policy testable without a
//! window or input stack.

/// A discrete input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A pointer button went down over the canvas. Suspends automatic
    /// animation while held.
    Pressed,
    /// The pointer button was released. Automatic animation resumes.
    Released,
    /// The pointer moved while held. `delta_x` is the horizontal
    /// displacement in pixels since the previous drag event; it is
    /// normalized by the viewport width and added onto the animation
    /// parameter.
    Dragged { delta_x: f64 },
    /// Periodic animation tick. Advances the parameter by the configured
    /// increment unless a press gesture is active.
    Tick,
    /// Zoom-in button: multiplies the scale by the configured factor.
    ZoomIn,
    /// Zoom-out button: multiplies the scale by the configured factor.
    ZoomOut,
    /// The drawing area changed size. Origin and scale are preserved; the
    /// visible range and axis lines are recomputed.
    Resized { width: f64, height: f64 },
}
