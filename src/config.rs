//! Configuration types for the plotter.

use std::path::PathBuf;

use crate::color::Palette;
use crate::error::{FuncPlotError, Result};

// ─────────────────────────────────────────────────────────────────────────────
// SessionConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Tunable behaviour of a [`PlotSession`](crate::PlotSession).
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Animation-parameter increment applied per tick while animating.
    /// Default: `0.01`.
    pub tick_advance: f64,
    /// Scale multiplier for a zoom-in action. Default: `1.5`.
    pub zoom_in_factor: f64,
    /// Scale multiplier for a zoom-out action. Default: `0.5`.
    pub zoom_out_factor: f64,
    /// Stroke width of plotted curves in pixels. Default: `1.5`.
    pub stroke_width: f32,
    /// How plot colors are assigned. Default: hue wheel.
    pub palette: Palette,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_advance: 0.01,
            zoom_in_factor: 1.5,
            zoom_out_factor: 0.5,
            stroke_width: 1.5,
            palette: Palette::default(),
        }
    }
}

impl SessionConfig {
    /// Check the numeric knobs. Zoom factors and the tick advance must be
    /// finite and positive, otherwise a zoom or tick would corrupt the
    /// frame instead of failing at its own dispatch.
    pub(crate) fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("tick_advance", self.tick_advance),
            ("zoom_in_factor", self.zoom_in_factor),
            ("zoom_out_factor", self.zoom_out_factor),
            ("stroke_width", self.stroke_width as f64),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FuncPlotError::invalid_config(field, value));
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FuncPlotConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the hosted plotter window.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncPlotConfig {
    /// Native window title.
    pub title: String,
    /// Initial window size in logical pixels; also the viewport the session
    /// is constructed from.
    pub window_size: [f32; 2],
    /// Where to save/restore the view state. `None` disables the view
    /// buttons' file fallback and uses a dialog instead.
    pub state_path: Option<PathBuf>,
    /// Session behaviour.
    pub session: SessionConfig,
}

impl Default for FuncPlotConfig {
    fn default() -> Self {
        Self {
            title: "FuncPlot".to_string(),
            window_size: [800.0, 600.0],
            state_path: None,
            session: SessionConfig::default(),
        }
    }
}
