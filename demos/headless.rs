//! Example: Headless engine use
//!
//! What it demonstrates
//! - Driving a session without a window: input events go through
//!   `dispatch`, drawing goes to a hand-made `DrawSurface`
//! - Exporting the current samples as CSV and the view state as JSON
//!
//! How to run
//! ```bash
//! cargo run --example headless
//! ```

use egui::Color32;
use funcplot::{
    export, persistence, DrawSurface, InputEvent, PlotSession, Point, Segment, SessionConfig,
    Viewport,
};

/// Counts draw calls instead of painting them.
struct CountingSurface {
    polylines: usize,
    reference_lines: usize,
    samples: usize,
}

impl DrawSurface for CountingSurface {
    fn draw_polyline(&mut self, points: &[Point], _color: Color32, _width: f32) {
        self.polylines += 1;
        self.samples += points.len();
    }

    fn draw_reference_line(&mut self, _line: Segment) {
        self.reference_lines += 1;
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut session = PlotSession::new(Viewport::new(800.0, 600.0), SessionConfig::default())?;
    session.show_fn(f64::sin);
    session.show_parametric(|x, t| (x - t).cos());

    // Scrub the parameter, zoom in, pause and resume.
    session.dispatch(InputEvent::Dragged { delta_x: 200.0 })?;
    session.dispatch(InputEvent::ZoomIn)?;
    session.dispatch(InputEvent::Pressed)?;
    session.dispatch(InputEvent::Tick)?;
    session.dispatch(InputEvent::Released)?;
    session.dispatch(InputEvent::Tick)?;

    let mut surface = CountingSurface {
        polylines: 0,
        reference_lines: 0,
        samples: 0,
    };
    session.render(&mut surface);
    println!(
        "rendered {} polylines ({} samples) and {} reference lines at t = {:.3}",
        surface.polylines,
        surface.samples,
        surface.reference_lines,
        session.animation_parameter()
    );

    let dir = std::env::temp_dir();
    let csv_path = dir.join("funcplot_headless.csv");
    export::save_samples_csv(&csv_path, &session)?;
    let state_path = dir.join("funcplot_headless_view.json");
    persistence::save_state_to_path(&session, &state_path)?;
    println!("wrote {} and {}", csv_path.display(), state_path.display());

    Ok(())
}
