//! The plot session: all mutable plotter state and the invalidation policy.
//!
//! One session owns the coordinate frame, the shared animation parameter and
//! the ordered plot collection. Every state change funnels through the
//! methods here (or [`dispatch`](PlotSession::dispatch)), each of which
//! finishes its recalculation before returning, so a caller never observes a
//! polyline that is stale relative to the current frame and parameter.
//!
//! What gets recomputed when:
//! - origin, scale or viewport change → axis lines and **every** polyline;
//! - animation parameter change → **every** polyline, frame untouched;
//! - a newly shown plot → colors of all plots, polyline of **that plot only**.

use crate::config::SessionConfig;
use crate::error::{FuncPlotError, Result};
use crate::events::InputEvent;
use crate::frame::CoordinateFrame;
use crate::function::{self, ParametricFn};
use crate::geom::{Point, Segment, Viewport};
use crate::plot::FunctionPlot;
use crate::surface::DrawSurface;

/// An interactive plotting session.
pub struct PlotSession {
    config: SessionConfig,
    viewport: Viewport,
    frame: CoordinateFrame,
    animation_parameter: f64,
    /// Cleared while a press gesture is held, set again on release.
    animating: bool,
    plots: Vec<FunctionPlot>,
    x_axis: Segment,
    y_axis: Segment,
}

impl PlotSession {
    /// Create a session filling `viewport`: the origin starts at the center
    /// and the scale at a quarter of the smaller dimension, so the unit
    /// circle is comfortably visible.
    pub fn new(viewport: Viewport, config: SessionConfig) -> Result<Self> {
        if !(viewport.width > 0.0) || !(viewport.height > 0.0) {
            return Err(FuncPlotError::empty_viewport(viewport.width, viewport.height));
        }
        config.validate()?;
        let frame = CoordinateFrame::new(viewport.center(), viewport.min_dimension() / 4.0)?;
        let mut session = Self {
            config,
            viewport,
            frame,
            animation_parameter: 0.0,
            animating: true,
            plots: Vec::new(),
            x_axis: Segment::new(Point::ORIGIN, Point::ORIGIN),
            y_axis: Segment::new(Point::ORIGIN, Point::ORIGIN),
        };
        session.update_axes();
        Ok(session)
    }

    // ── Registration ─────────────────────────────────────────────────────

    /// Register a function in the uniform two-argument shape and display it.
    ///
    /// Reassigns every plot's color (the count changed) but resamples only
    /// the new plot; existing polylines are already valid for the current
    /// frame and parameter.
    pub fn show(&mut self, function: ParametricFn) {
        self.plots.push(FunctionPlot::new(function));
        self.recolor_plots();
        self.recalculate_last();
    }

    /// Register a single-variable function `f(x)`.
    pub fn show_fn<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64 + Send + 'static,
    {
        self.show(function::simple(f));
    }

    /// Register a two-argument function `f(x, t)` of position and the
    /// shared animation parameter.
    pub fn show_parametric<F>(&mut self, f: F)
    where
        F: Fn(f64, f64) -> f64 + Send + 'static,
    {
        self.show(function::parametric(f));
    }

    // ── Frame and parameter mutation ─────────────────────────────────────

    /// Move the equation origin to a new screen position and recalculate
    /// every plot.
    pub fn set_origin(&mut self, origin: Point) {
        self.frame.set_origin(origin);
        self.coordinates_changed();
    }

    /// Replace the scale (pixels per unit) and recalculate every plot.
    /// Fails without touching any state if `scale` is not positive.
    pub fn set_scale(&mut self, scale: f64) -> Result<()> {
        self.frame.set_scale(scale)?;
        self.coordinates_changed();
        Ok(())
    }

    /// Store a new animation parameter and resample every plot against the
    /// existing frame.
    pub fn set_animation_parameter(&mut self, parameter: f64) {
        self.animation_parameter = parameter;
        self.recalculate_all();
    }

    /// Multiply the scale by the configured zoom-in factor. The origin
    /// pixel stays put; only sampling density and visible range change.
    pub fn zoom_in(&mut self) -> Result<()> {
        self.set_scale(self.frame.scale() * self.config.zoom_in_factor)
    }

    /// Multiply the scale by the configured zoom-out factor.
    pub fn zoom_out(&mut self) -> Result<()> {
        self.set_scale(self.frame.scale() * self.config.zoom_out_factor)
    }

    /// Adopt a new viewport size. Origin and scale are preserved; the
    /// visible range, the sampling domain and the axis spans follow the new
    /// dimensions.
    pub fn resize(&mut self, viewport: Viewport) -> Result<()> {
        if !(viewport.width > 0.0) || !(viewport.height > 0.0) {
            return Err(FuncPlotError::empty_viewport(viewport.width, viewport.height));
        }
        self.viewport = viewport;
        self.coordinates_changed();
        Ok(())
    }

    // ── Event dispatch ───────────────────────────────────────────────────

    /// Apply one input event as a single atomic transition.
    pub fn dispatch(&mut self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::Pressed => {
                self.animating = false;
                Ok(())
            }
            InputEvent::Released => {
                self.animating = true;
                Ok(())
            }
            InputEvent::Dragged { delta_x } => {
                let delta = delta_x / self.viewport.width;
                self.set_animation_parameter(self.animation_parameter + delta);
                Ok(())
            }
            InputEvent::Tick => {
                if self.animating {
                    self.set_animation_parameter(
                        self.animation_parameter + self.config.tick_advance,
                    );
                }
                Ok(())
            }
            InputEvent::ZoomIn => self.zoom_in(),
            InputEvent::ZoomOut => self.zoom_out(),
            InputEvent::Resized { width, height } => self.resize(Viewport::new(width, height)),
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Snapshot of the current frame.
    pub fn frame(&self) -> CoordinateFrame {
        self.frame
    }

    /// Current viewport dimensions.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current shared animation parameter.
    pub fn animation_parameter(&self) -> f64 {
        self.animation_parameter
    }

    /// `false` while a press gesture suspends the automatic animation.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// All plots in registration order (also draw and color order).
    pub fn plots(&self) -> &[FunctionPlot] {
        &self.plots
    }

    /// The two axis reference lines, `(x_axis, y_axis)`, in screen space.
    pub fn axis_lines(&self) -> (Segment, Segment) {
        (self.x_axis, self.y_axis)
    }

    /// Hand the axis lines and every polyline to a drawing surface, plots
    /// in registration order.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        surface.draw_reference_line(self.x_axis);
        surface.draw_reference_line(self.y_axis);
        for plot in &self.plots {
            surface.draw_polyline(plot.polyline(), plot.color(), self.config.stroke_width);
        }
    }

    // ── Recalculation internals ──────────────────────────────────────────

    /// A frame or viewport mutation happened: refresh the axis lines, then
    /// resample everything.
    fn coordinates_changed(&mut self) {
        self.update_axes();
        self.recalculate_all();
    }

    /// Axis lines are derived straight from origin and viewport, never
    /// sampled.
    fn update_axes(&mut self) {
        let origin = self.frame.origin();
        self.x_axis = Segment::new(
            Point::new(0.0, origin.y),
            Point::new(self.viewport.width, origin.y),
        );
        self.y_axis = Segment::new(
            Point::new(origin.x, 0.0),
            Point::new(origin.x, self.viewport.height),
        );
    }

    fn recalculate_all(&mut self) {
        let frame = self.frame;
        let (xmin, xmax) = frame.visible_x_range(self.viewport.width);
        let step = frame.sampling_step();
        let parameter = self.animation_parameter;
        for plot in &mut self.plots {
            plot.recalculate(parameter, xmin, xmax, step, |p| frame.to_screen(p));
        }
    }

    fn recalculate_last(&mut self) {
        let frame = self.frame;
        let (xmin, xmax) = frame.visible_x_range(self.viewport.width);
        let step = frame.sampling_step();
        let parameter = self.animation_parameter;
        if let Some(plot) = self.plots.last_mut() {
            plot.recalculate(parameter, xmin, xmax, step, |p| frame.to_screen(p));
        }
    }

    fn recolor_plots(&mut self) {
        let total = self.plots.len();
        let palette = &self.config.palette;
        for (index, plot) in self.plots.iter_mut().enumerate() {
            plot.set_color(index, total, palette);
        }
    }
}
