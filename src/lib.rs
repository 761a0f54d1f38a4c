//! FuncPlot crate root: re-exports and module wiring.
//!
//! An interactive function plotter built on egui/eframe. Functions of
//! `x` (or of `x` and a shared, animated parameter `t`) are sampled into
//! screen-space polylines through a pannable, zoomable coordinate frame.
//!
//! Module map:
//! - `geom`: point/segment/viewport value types
//! - `frame`: equation-space ↔ screen-space transform
//! - `function`: registration shapes for plotted callables
//! - `color`: deterministic per-plot color assignment
//! - `plot`: one function plus its sampled polyline
//! - `session`: all mutable state and the invalidation policy
//! - `events`, `surface`: input and drawing seams to the host
//! - `app`: the eframe host window
//! - `config`, `persistence`, `export`: the ambient plumbing

pub mod color;
pub mod config;
pub mod error;
pub mod events;
pub mod export;
pub mod frame;
pub mod function;
pub mod geom;
pub mod persistence;
pub mod plot;
pub mod session;
pub mod surface;

pub mod app;

// Public re-exports for a compact external API
pub use app::{run_funcplot, FuncPlotApp};
pub use color::Palette;
pub use config::{FuncPlotConfig, SessionConfig};
pub use error::{FuncPlotError, Result};
pub use events::InputEvent;
pub use frame::CoordinateFrame;
pub use function::ParametricFn;
pub use geom::{Point, Segment, Viewport};
pub use plot::FunctionPlot;
pub use session::PlotSession;
pub use surface::DrawSurface;
