pub mod theme;
pub mod window;

use crate::constants::{WINDOW_SIZE, WINDOW_TITLE};
use crate::controller::TimerController;
use crate::interval::DeadlineTimer;
use anyhow::Result;
use eframe::egui::{self, IconData};
use window::CountdownWindow;

/// Open the timer window and run the event loop until it is closed
pub fn run(controller: TimerController<DeadlineTimer>, icon: Option<IconData>) -> Result<()> {
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size(WINDOW_SIZE)
        .with_min_inner_size(WINDOW_SIZE);
    if let Some(icon) = icon {
        viewport = viewport.with_icon(icon);
    }

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |cc| {
            theme::configure_theme(&cc.egui_ctx);
            log::debug!("Widgets created successfully.");
            Ok(Box::new(CountdownWindow::new(controller)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to launch timer window: {err}"))?;

    Ok(())
}
