use eframe::egui;

use crate::config::PanelConfig;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DatosViewerApp {
    pub state: AppState,
    panels: [PanelConfig; 2],
}

impl DatosViewerApp {
    pub fn new(state: AppState, panels: [PanelConfig; 2]) -> Self {
        Self { state, panels }
    }
}

impl eframe::App for DatosViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: stacked plots ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::sample_panels(ui, &self.state.samples, &self.panels);
        });
    }
}
