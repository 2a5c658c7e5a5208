use eframe::egui::{Id, TextStyle, Ui};
use egui_plot::{Corner, Legend, Line, LineStyle, Plot};

use crate::config::PanelConfig;
use crate::data::model::SampleLog;

/// Below this the plots stop shrinking and the panel scrolls off screen.
const MIN_PLOT_HEIGHT: f32 = 80.0;

// ---------------------------------------------------------------------------
// Two-row sample chart (central panel)
// ---------------------------------------------------------------------------

/// Render the stacked sample plots. Both rows share the sample-index axis.
pub fn sample_panels(ui: &mut Ui, samples: &SampleLog, panels: &[PanelConfig; 2]) {
    let link_group = Id::new("sample_index_axis");

    let heading = ui.text_style_height(&TextStyle::Heading) + 2.0 * ui.spacing().item_spacing.y;
    let plot_height = ((ui.available_height() - 2.0 * heading) / 2.0).max(MIN_PLOT_HEIGHT);

    for (row, panel) in panels.iter().enumerate() {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.heading(&panel.title);
        });

        let mut plot = Plot::new(("sample_panel", row))
            .height(plot_height)
            .legend(Legend::default().position(Corner::RightTop))
            .show_grid(true)
            .y_axis_label(panel.y_label.clone())
            .link_axis(link_group, [true, false])
            .link_cursor(link_group, [true, false])
            .allow_boxed_zoom(true)
            .allow_drag(true)
            .allow_scroll(true)
            .allow_zoom(true);
        if let Some(x_label) = &panel.x_label {
            plot = plot.x_axis_label(x_label.clone());
        }

        plot.show(ui, |plot_ui| {
            for style in &panel.series {
                let mut line = Line::new(samples.points(style.series))
                    .name(&style.label)
                    .color(style.color)
                    .width(style.width);
                if style.dashed {
                    line = line.style(LineStyle::dashed_loose());
                }
                plot_ui.line(line);
            }
        });
    }
}
