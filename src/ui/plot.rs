use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::state::PlotSession;

// ---------------------------------------------------------------------------
// Benchmark plot (central panel)
// ---------------------------------------------------------------------------

/// Render every series on one set of axes.
pub fn benchmark_plot(ui: &mut Ui, session: &PlotSession) {
    let config = &session.config;

    // An empty log still gets its (empty) axes.
    if session.document.is_empty() {
        if let Some(path) = &session.source {
            ui.label(
                RichText::new(format!("No benchmark sections found in {}", path.display()))
                    .color(Color32::GRAY),
            );
        }
    }

    Plot::new("benchmark_plot")
        .legend(Legend::default())
        .x_axis_label(config.x_label.as_str())
        .y_axis_label(config.y_label.as_str())
        .show_grid(config.show_grid)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (i, series) in session.series.iter().enumerate() {
                let color = session.colors.color_for(i);

                // Line and markers share a name so the legend treats them as one entry.
                let line_points: PlotPoints = series.points.iter().copied().collect();
                let marker_points: PlotPoints = series.points.iter().copied().collect();

                plot_ui.line(
                    Line::new(line_points)
                        .name(&series.label)
                        .color(color)
                        .width(config.line_width),
                );
                plot_ui.points(
                    Points::new(marker_points)
                        .name(&series.label)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(config.marker_radius),
                );
            }
        });
}
