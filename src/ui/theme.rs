//! Neon-on-black look
use crate::constants::{BACKGROUND, NEON_GREEN};
use eframe::egui::{self, Color32, Stroke};

pub fn neon() -> Color32 {
    let [r, g, b] = NEON_GREEN;
    Color32::from_rgb(r, g, b)
}

pub fn background() -> Color32 {
    let [r, g, b] = BACKGROUND;
    Color32::from_rgb(r, g, b)
}

pub fn configure_theme(ctx: &egui::Context) {
    let neon = neon();
    let background = background();

    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(neon);
    visuals.panel_fill = background;
    visuals.window_fill = background;
    visuals.extreme_bg_color = background;
    visuals.selection.bg_fill = neon.linear_multiply(0.4);
    visuals.selection.stroke = Stroke::new(1.0, neon);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, neon);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, neon);
    visuals.widgets.active.bg_stroke = Stroke::new(2.0, neon);
    ctx.set_visuals(visuals);
    log::debug!("Widgets styled successfully.");
}
