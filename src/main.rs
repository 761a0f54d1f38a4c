//! Native funcplot binary with a default set of demo functions.

use anyhow::Result;
use funcplot::{run_funcplot, FuncPlotConfig, PlotSession, Viewport};

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Starting funcplot");

    let cfg = FuncPlotConfig::default();
    let mut session = PlotSession::new(
        Viewport::new(cfg.window_size[0] as f64, cfg.window_size[1] as f64),
        cfg.session.clone(),
    )?;

    session.show_fn(|x| x * x);
    session.show_fn(f64::sin);
    session.show_fn(f64::tan);
    session.show_fn(f64::sqrt);
    session.show_parametric(|x, t| (x / t.sin()).atan());
    session.show_parametric(|x, t| (x / t.tan()).sin());
    // Twelve harmonics marching leftward as t advances.
    for i in 1..=12 {
        let k = i as f64;
        session.show_parametric(move |x, t| (k * x - t * 10.0).sin() / k);
    }

    run_funcplot(session, cfg).map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}
