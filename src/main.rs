mod app;
mod config;
mod data;
mod state;
mod ui;

use anyhow::anyhow;
use app::DatosViewerApp;
use config::ViewerConfig;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let ViewerConfig {
        data_path,
        window_title,
        window_size,
        min_window_size,
        panels,
    } = ViewerConfig::default();

    // Load before opening the window; a missing file ends the program here.
    let state = AppState::load(&data_path)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_min_inner_size(min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        &window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(DatosViewerApp::new(state, panels)))),
    )
    .map_err(|e| anyhow!("running viewer: {e}"))
}
