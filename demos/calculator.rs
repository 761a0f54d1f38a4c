//! Example: Graphing calculator
//!
//! What it demonstrates
//! - A mixed set of plots: plain curves, curves animated by the shared
//!   parameter t, a truncated sine series and a harmonic series
//! - Functions with poles and NaN regions (tan, sqrt) to show how
//!   non-finite samples break the drawn polyline into runs
//! - Press and hold on the canvas to pause the animation, drag
//!   horizontally to scrub t by hand
//! - View state persisted to calculator_view.json across runs
//!
//! How to run
//! ```bash
//! cargo run --example calculator
//! ```

use std::path::PathBuf;

use funcplot::{run_funcplot, FuncPlotConfig, PlotSession, Viewport};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let cfg = FuncPlotConfig {
        title: "Graphing Calculator".to_string(),
        state_path: Some(PathBuf::from("calculator_view.json")),
        ..Default::default()
    };
    let mut session = PlotSession::new(
        Viewport::new(cfg.window_size[0] as f64, cfg.window_size[1] as f64),
        cfg.session.clone(),
    )
    .expect("default viewport is valid");

    session.show_fn(|x| x * x);
    session.show_fn(f64::tan);
    session.show_fn(f64::sin);
    session.show_fn(f64::sqrt);
    session.show_parametric(|x, t| (x / t.sin()).atan());
    session.show_parametric(|x, t| (x / t.tan()).sin());
    session.show_parametric(f64::powf);
    session.show_parametric(|x, t| {
        (1..20)
            .map(|i| (x * 3f64.powi(i) + t * i as f64).sin() / 2.5f64.powi(i))
            .sum::<f64>()
    });
    for i in 1..=12 {
        let k = i as f64;
        session.show_parametric(move |x, t| (k * x - t * 10.0).sin() / k);
    }

    run_funcplot(session, cfg)
}
