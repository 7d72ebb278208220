use super::theme;
use crate::constants::{CONTROL_FONT_SIZE, DISPLAY_FONT_SIZE, INPUT_FONT_SIZE};
use crate::controller::TimerController;
use crate::input::TimeField;
use crate::interval::DeadlineTimer;
use eframe::egui::{self, FontId, RichText};
use std::time::Instant;

/// The single timer window
pub struct CountdownWindow {
    controller: TimerController<DeadlineTimer>,
}

impl CountdownWindow {
    pub fn new(controller: TimerController<DeadlineTimer>) -> Self {
        Self { controller }
    }

    fn time_inputs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for field in TimeField::ALL {
                let mut candidate = self.controller.field(field).to_string();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut candidate)
                        .desired_width(INPUT_FONT_SIZE * 2.0)
                        .font(FontId::monospace(INPUT_FONT_SIZE)),
                );
                // A rejected edit is dropped here and the old value is redrawn
                if response.changed() {
                    self.controller.edit_field(field, &candidate);
                }
            }
        });
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if control_button(ui, "Start").clicked() {
                if let Err(e) = self.controller.start(Instant::now()) {
                    log::debug!("Start rejected: {}", e);
                }
            }
            if control_button(ui, "Stop").clicked() {
                self.controller.stop();
            }
            if control_button(ui, "Reset").clicked() {
                self.controller.reset();
            }
        });
    }

    fn sound_toggle(&mut self, ui: &mut egui::Ui) {
        let mut enabled = self.controller.sound_enabled();
        let label = RichText::new("Enable Sound")
            .font(FontId::proportional(CONTROL_FONT_SIZE))
            .strong();
        let available = self.controller.sound_available();
        let response = ui.add_enabled(available, egui::Checkbox::new(&mut enabled, label));
        if response.changed() {
            self.controller.set_sound_enabled(enabled);
        }
    }
}

fn control_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let label = RichText::new(text)
        .font(FontId::proportional(CONTROL_FONT_SIZE))
        .strong()
        .color(theme::background());
    ui.add(
        egui::Button::new(label)
            .fill(theme::neon())
            .min_size(egui::vec2(72.0, 32.0)),
    )
}

impl eframe::App for CountdownWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll(Instant::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                self.time_inputs(ui);
                ui.add_space(16.0);
                ui.label(
                    RichText::new(self.controller.display_text())
                        .font(FontId::monospace(DISPLAY_FONT_SIZE))
                        .color(theme::neon()),
                );
                ui.add_space(10.0);
                self.controls(ui);
                ui.add_space(10.0);
                self.sound_toggle(ui);
            });
        });

        // Wake up again when the next tick is due, the loop idles otherwise
        if let Some(wait) = self.controller.time_until_tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
