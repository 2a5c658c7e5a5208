use std::path::PathBuf;

use eframe::egui::Color32;

use crate::data::model::Series;

/// File read at startup, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "datos.txt";

// ---------------------------------------------------------------------------
// Chart styling
// ---------------------------------------------------------------------------

/// How one series is drawn.
#[derive(Debug, Clone)]
pub struct SeriesStyle {
    pub series: Series,
    pub label: String,
    pub color: Color32,
    pub width: f32,
    pub dashed: bool,
}

impl SeriesStyle {
    fn solid(series: Series, label: &str, color: Color32, width: f32) -> Self {
        SeriesStyle {
            series,
            label: label.to_string(),
            color,
            width,
            dashed: false,
        }
    }

    fn dashed(self) -> Self {
        SeriesStyle {
            dashed: true,
            ..self
        }
    }
}

/// One row of the chart.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: String,
    pub series: Vec<SeriesStyle>,
}

// matplotlib "tab" colours
const TAB_RED: Color32 = Color32::from_rgb(0xd6, 0x27, 0x28);
const TAB_BLUE: Color32 = Color32::from_rgb(0x1f, 0x77, 0xb4);
const TAB_ORANGE: Color32 = Color32::from_rgb(0xff, 0x7f, 0x0e);
const TAB_GREEN: Color32 = Color32::from_rgb(0x2c, 0xa0, 0x2c);

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

/// Fixed settings of the viewer. There is no config file; everything comes
/// from [`Default`].
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub data_path: PathBuf,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Top row, then bottom row.
    pub panels: [PanelConfig; 2],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let measured = PanelConfig {
            title: "Temperature and midpoint".to_string(),
            x_label: None,
            y_label: "Temperature (°C)".to_string(),
            series: vec![
                SeriesStyle::solid(Series::Value, "Temperature (°C)", TAB_RED, 2.0),
                SeriesStyle::solid(Series::ValueRef, "Midpoint (°C)", TAB_BLUE, 1.5).dashed(),
            ],
        };
        let states = PanelConfig {
            title: "Heater and fan states".to_string(),
            x_label: Some("Samples (every 1 s)".to_string()),
            y_label: "State".to_string(),
            series: vec![
                SeriesStyle::solid(Series::StateA, "Heater (0=OFF, 1-2=ON)", TAB_ORANGE, 2.0),
                SeriesStyle::solid(Series::StateB, "Fan (0-3)", TAB_GREEN, 2.0),
            ],
        };

        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            window_title: "Datos Viewer – Temperature Control Log".to_string(),
            window_size: [1000.0, 700.0],
            min_window_size: [500.0, 350.0],
            panels: [measured, states],
        }
    }
}
