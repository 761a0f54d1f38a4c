//! Example: Single parabola
//!
//! What it demonstrates
//! - Creating a session over a viewport and registering one plain function
//! - Running the native window with the default configuration
//!
//! How to run
//! ```bash
//! cargo run --example parabola
//! ```

use funcplot::{run_funcplot, FuncPlotConfig, PlotSession, Viewport};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let cfg = FuncPlotConfig {
        title: "Parabola".to_string(),
        ..Default::default()
    };
    let mut session = PlotSession::new(
        Viewport::new(cfg.window_size[0] as f64, cfg.window_size[1] as f64),
        cfg.session.clone(),
    )
    .expect("default viewport is valid");
    session.show_fn(|x| x * x);

    run_funcplot(session, cfg)
}
