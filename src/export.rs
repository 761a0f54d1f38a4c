//! CSV export of the currently materialized samples.

use std::path::Path;

use crate::error::Result;
use crate::session::PlotSession;

/// Write every plot's current samples to a CSV file.
///
/// One row per sample: plot index (registration order), then the sample in
/// equation space (screen points mapped back through the frame). Non-finite
/// values are written as-is ("NaN", "inf").
pub fn save_samples_csv<P: AsRef<Path>>(path: P, session: &PlotSession) -> Result<()> {
    use std::io::Write;
    let mut f = std::fs::File::create(path)?;
    writeln!(f, "plot,x,y")?;
    let frame = session.frame();
    for (index, plot) in session.plots().iter().enumerate() {
        for p in plot.polyline() {
            let eq = frame.to_equation(*p);
            writeln!(f, "{},{:.9},{:.9}", index, eq.x, eq.y)?;
        }
    }
    Ok(())
}
