//! eframe host for a [`PlotSession`].
//!
//! Translates raw egui activity into the session's input events, paints the
//! session's output through a painter-backed [`DrawSurface`], and carries
//! the chrome around it: zoom buttons, CSV/PNG export, view save/restore.

use std::path::PathBuf;
use std::time::Duration;

use eframe::egui;
use egui::{Color32, Pos2, Stroke, ViewportCommand};
use image::{Rgba, RgbaImage};

use crate::config::FuncPlotConfig;
use crate::error::Result;
use crate::events::InputEvent;
use crate::export;
use crate::geom::{Point, Segment};
use crate::persistence;
use crate::session::PlotSession;
use crate::surface::DrawSurface;

/// Stroke width of the axis reference lines.
const AXIS_STROKE_WIDTH: f32 = 0.25;
/// Color of the axis reference lines.
const AXIS_COLOR: Color32 = Color32::from_rgb(0xA1, 0xA1, 0xA1);

// ─────────────────────────────────────────────────────────────────────────────
// Painter adapter
// ─────────────────────────────────────────────────────────────────────────────

/// Adapts the session's draw calls onto an `egui::Painter`.
///
/// Session geometry is relative to the canvas; egui paints in window
/// coordinates, so every point is shifted by the canvas offset.
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    offset: egui::Vec2,
}

impl PainterSurface<'_> {
    fn to_pos(&self, p: Point) -> Pos2 {
        Pos2::new(p.x as f32, p.y as f32) + self.offset
    }
}

impl DrawSurface for PainterSurface<'_> {
    fn draw_polyline(&mut self, points: &[Point], color: Color32, width: f32) {
        let stroke = Stroke::new(width, color);
        for run in finite_runs(points) {
            let screen: Vec<Pos2> = run.iter().map(|p| self.to_pos(*p)).collect();
            for window in screen.windows(2) {
                self.painter.line_segment([window[0], window[1]], stroke);
            }
        }
    }

    fn draw_reference_line(&mut self, line: Segment) {
        self.painter.line_segment(
            [self.to_pos(line.start), self.to_pos(line.end)],
            Stroke::new(AXIS_STROKE_WIDTH, AXIS_COLOR),
        );
    }
}

/// Split a polyline into runs of consecutive finite points.
///
/// Non-finite samples (poles, out-of-domain NaNs) end the current run; each
/// run is painted as its own line so no segment is drawn across a gap.
fn finite_runs(points: &[Point]) -> Vec<&[Point]> {
    let mut runs = Vec::new();
    let mut start = None;
    for (i, p) in points.iter().enumerate() {
        let finite = p.x.is_finite() && p.y.is_finite();
        match (finite, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push(&points[s..i]);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push(&points[s..]);
    }
    runs
}

// ─────────────────────────────────────────────────────────────────────────────
// FuncPlotApp
// ─────────────────────────────────────────────────────────────────────────────

/// The native window application around one session.
pub struct FuncPlotApp {
    session: PlotSession,
    /// Fixed view-state file; `None` routes the view buttons through a
    /// file dialog.
    state_path: Option<PathBuf>,
    pointer_down: bool,
    request_screenshot: bool,
}

impl FuncPlotApp {
    pub fn new(session: PlotSession, state_path: Option<PathBuf>) -> Self {
        Self {
            session,
            state_path,
            pointer_down: false,
            request_screenshot: false,
        }
    }

    fn controls_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Zoom In").clicked() {
                log_rejected(self.session.dispatch(InputEvent::ZoomIn));
            }
            if ui.button("Zoom Out").clicked() {
                log_rejected(self.session.dispatch(InputEvent::ZoomOut));
            }
            ui.separator();
            if ui.button("Save CSV").clicked() {
                self.save_csv();
            }
            if ui.button("Save PNG").clicked() {
                self.request_screenshot = true;
            }
            ui.separator();
            if ui.button("Save view").clicked() {
                self.save_view();
            }
            if ui.button("Restore view").clicked() {
                self.restore_view();
            }
            ui.separator();
            ui.label(format!("t = {:+.3}", self.session.animation_parameter()));
            if !self.session.is_animating() {
                ui.label("(hold)");
            }
        });
    }

    fn canvas_ui(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;

        let width = rect.width() as f64;
        let height = rect.height() as f64;
        let viewport = self.session.viewport();
        if width > 0.0 && height > 0.0 && (viewport.width != width || viewport.height != height) {
            log_rejected(self.session.dispatch(InputEvent::Resized { width, height }));
        }

        // Press/release transitions gate the automatic animation; the drag
        // delta scrubs the parameter by hand.
        let down = response.is_pointer_button_down_on();
        if down && !self.pointer_down {
            log_rejected(self.session.dispatch(InputEvent::Pressed));
        }
        if !down && self.pointer_down {
            log_rejected(self.session.dispatch(InputEvent::Released));
        }
        self.pointer_down = down;
        if response.dragged() {
            let delta_x = response.drag_delta().x as f64;
            if delta_x != 0.0 {
                log_rejected(self.session.dispatch(InputEvent::Dragged { delta_x }));
            }
        }

        // Tick after the gesture events so a press in this frame already
        // suspends the advance.
        log_rejected(self.session.dispatch(InputEvent::Tick));

        let mut surface = PainterSurface {
            painter: &painter,
            offset: rect.min.to_vec2(),
        };
        self.session.render(&mut surface);
    }

    fn save_csv(&self) {
        let default_name = format!(
            "funcplot_{}.csv",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        );
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(&default_name)
            .save_file()
        else {
            return;
        };
        match export::save_samples_csv(&path, &self.session) {
            Ok(()) => log::info!("exported samples to {}", path.display()),
            Err(e) => log::error!("CSV export failed: {e}"),
        }
    }

    fn save_view(&self) {
        let path = match &self.state_path {
            Some(p) => p.clone(),
            None => {
                let Some(p) = rfd::FileDialog::new()
                    .set_file_name("funcplot_view.json")
                    .save_file()
                else {
                    return;
                };
                p
            }
        };
        match persistence::save_state_to_path(&self.session, &path) {
            Ok(()) => log::info!("saved view state to {}", path.display()),
            Err(e) => log::error!("failed to save view state: {e}"),
        }
    }

    fn restore_view(&mut self) {
        let path = match &self.state_path {
            Some(p) => p.clone(),
            None => {
                let Some(p) = rfd::FileDialog::new().pick_file() else {
                    return;
                };
                p
            }
        };
        match persistence::load_state_from_path(&path)
            .and_then(|state| state.apply_to(&mut self.session))
        {
            Ok(()) => log::info!("restored view state from {}", path.display()),
            Err(e) => log::error!("failed to restore view state: {e}"),
        }
    }

    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        if self.request_screenshot {
            self.request_screenshot = false;
            // Result arrives on a later frame as Event::Screenshot.
            ctx.send_viewport_cmd(ViewportCommand::Screenshot(Default::default()));
        }

        let captured = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        if let Some(image) = captured {
            save_screenshot(&image);
        }
    }
}

impl eframe::App for FuncPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.controls_ui(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.canvas_ui(ui));

        self.handle_screenshot(ctx);

        // Keep the animation ticking.
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}

fn log_rejected(result: Result<()>) {
    if let Err(e) = result {
        log::warn!("input event rejected: {e}");
    }
}

fn save_screenshot(image: &egui::ColorImage) {
    let default_name = format!(
        "funcplot_{}.png",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    let Some(path) = rfd::FileDialog::new()
        .set_file_name(&default_name)
        .save_file()
    else {
        return;
    };
    let egui::ColorImage {
        size: [w, h],
        pixels,
        ..
    } = image;
    let mut out = RgbaImage::new(*w as u32, *h as u32);
    for y in 0..*h {
        for x in 0..*w {
            let p = pixels[y * *w + x];
            out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
        }
    }
    match out.save(&path) {
        Ok(()) => log::info!("saved screenshot to {}", path.display()),
        Err(e) => log::error!("failed to save screenshot: {e}"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry point
// ─────────────────────────────────────────────────────────────────────────────

/// Launch the plotter in a native window. Blocks until the window closes.
///
/// If `cfg.state_path` points at an existing file, the saved view is
/// restored before the first frame.
pub fn run_funcplot(mut session: PlotSession, cfg: FuncPlotConfig) -> eframe::Result<()> {
    if let Some(path) = cfg.state_path.as_deref().filter(|p| p.exists()) {
        match persistence::load_state_from_path(path)
            .and_then(|state| state.apply_to(&mut session))
        {
            Ok(()) => log::info!("restored view state from {}", path.display()),
            Err(e) => log::warn!("ignoring saved view state: {e}"),
        }
    }

    let app = FuncPlotApp::new(session, cfg.state_path.clone());
    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(egui::vec2(cfg.window_size[0], cfg.window_size[1]))
            .with_title(cfg.title.clone()),
        ..Default::default()
    };
    eframe::run_native(&cfg.title, opts, Box::new(|_cc| Ok(Box::new(app))))
}
