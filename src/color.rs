//! Deterministic color assignment for plots.
//!
//! Colors depend only on a plot's index and the total plot count, so they are
//! reassigned for every plot whenever the count changes and stay put
//! otherwise.

use egui::Color32;
use once_cell::sync::Lazy;

/// Fallback fixed palette (matplotlib-style tab colors).
static CLASSIC_PALETTE: Lazy<Vec<Color32>> = Lazy::new(|| {
    vec![
        Color32::from_rgb(31, 119, 180),
        Color32::from_rgb(255, 127, 14),
        Color32::from_rgb(44, 160, 44),
        Color32::from_rgb(214, 39, 40),
        Color32::from_rgb(148, 103, 189),
        Color32::from_rgb(140, 86, 75),
        Color32::from_rgb(227, 119, 194),
        Color32::from_rgb(127, 127, 127),
    ]
});

/// How plot colors are assigned.
#[derive(Debug, Clone, PartialEq)]
pub enum Palette {
    /// Hue wheel: `total` plots spread evenly around the full hue circle.
    /// Distinct for any count.
    Spectrum,
    /// Classic fixed palette, assigned by index modulo its length; repeats
    /// past eight plots.
    Classic,
    /// Caller-supplied fixed palette, assigned by index modulo its length.
    Fixed(Vec<Color32>),
}

impl Default for Palette {
    fn default() -> Self {
        Palette::Spectrum
    }
}

impl Palette {
    /// Color for the plot at `index` among `total` currently shown plots.
    pub fn color_for(&self, index: usize, total: usize) -> Color32 {
        match self {
            Palette::Spectrum => spectrum_color(index, total),
            Palette::Classic => CLASSIC_PALETTE[index % CLASSIC_PALETTE.len()],
            Palette::Fixed(colors) if !colors.is_empty() => colors[index % colors.len()],
            // An empty custom palette falls back to the hue wheel.
            Palette::Fixed(_) => spectrum_color(index, total),
        }
    }
}

/// Evenly spaced hue-wheel color: `hue = index / total`, fixed saturation
/// and value.
pub fn spectrum_color(index: usize, total: usize) -> Color32 {
    let hue = index as f64 / total.max(1) as f64;
    let [r, g, b] = hsv_to_rgb(hue, 0.85, 0.9);
    Color32::from_rgb(r, g, b)
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [u8; 3] {
    // h in [0,1), s,v in [0,1]
    let h6 = (h.fract() * 6.0).max(0.0);
    let i = h6.floor() as i32;
    let f = h6 - (i as f64);
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);
    let (r, g, b) = match i.rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    [
        (r.clamp(0.0, 1.0) * 255.0) as u8,
        (g.clamp(0.0, 1.0) * 255.0) as u8,
        (b.clamp(0.0, 1.0) * 255.0) as u8,
    ]
}
