//! View-state persistence: save and restore the manipulable view to/from
//! JSON files.
//!
//! Only the state a user shapes by hand travels through here: origin,
//! scale, animation parameter. Registered functions are code, not data, and
//! are never serialized.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geom::Point;
use crate::session::PlotSession;

// ---------- Serializable mirror type ----------

/// Serializable snapshot of a session's view state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewStateSerde {
    pub origin: [f64; 2],
    pub scale: f64,
    pub animation_parameter: f64,
}

impl From<&PlotSession> for ViewStateSerde {
    fn from(session: &PlotSession) -> Self {
        let frame = session.frame();
        Self {
            origin: [frame.origin().x, frame.origin().y],
            scale: frame.scale(),
            animation_parameter: session.animation_parameter(),
        }
    }
}

impl ViewStateSerde {
    /// Apply stored state to a session, recalculating every plot.
    ///
    /// The scale is applied first and re-validated exactly like a live
    /// mutation; a corrupt file with a non-positive scale leaves the
    /// session untouched.
    pub fn apply_to(&self, session: &mut PlotSession) -> Result<()> {
        session.set_scale(self.scale)?;
        session.set_origin(Point::new(self.origin[0], self.origin[1]));
        session.set_animation_parameter(self.animation_parameter);
        Ok(())
    }
}

// ---------- Public API ----------

/// Serialize a view state as pretty JSON.
pub fn state_to_json(state: &ViewStateSerde) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Deserialize a view state from JSON.
pub fn state_from_json(json: &str) -> Result<ViewStateSerde> {
    Ok(serde_json::from_str(json)?)
}

/// Save a session's view state to a JSON file at the given path.
pub fn save_state_to_path(session: &PlotSession, path: &Path) -> Result<()> {
    let txt = state_to_json(&ViewStateSerde::from(session))?;
    std::fs::write(path, txt)?;
    Ok(())
}

/// Load a view state from a JSON file at the given path.
pub fn load_state_from_path(path: &Path) -> Result<ViewStateSerde> {
    let txt = std::fs::read_to_string(path)?;
    state_from_json(&txt)
}
