use eframe::egui::{self, Color32, RichText, Stroke};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::app::TaxiHist;
use crate::constants::layout;
use crate::export::tooltip_text;

/// Render the histogram plot from the current snapshot
///
/// One bar chart per (year, month) group, quads spanning each bin's
/// [left, right) interval with the group color at half alpha and a black
/// outline; hover shows "<Month> <year>. From <interval>" plus the
/// formatted percentage.
pub fn render_plot(app: &TaxiHist, ui: &mut egui::Ui) {
    profiling::scope!("render_plot");

    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Histogram of trip distance by month")
                .size(layout::TITLE_FONT_SIZE)
                .strong(),
        );
    });

    let plot = Plot::new("trip_distance_hist")
        .legend(Legend::default().position(egui_plot::Corner::RightTop))
        .x_axis_label(
            RichText::new("Trip distance (miles)")
                .size(layout::AXIS_LABEL_FONT_SIZE)
                .strong(),
        )
        .y_axis_label(
            RichText::new("Proportion (%)")
                .size(layout::AXIS_LABEL_FONT_SIZE)
                .strong(),
        )
        .include_y(0.0);

    plot.show(ui, |plot_ui| {
        for group in app.state.table.groups() {
            let color = group[0].color;
            let label = format!("{} {}", group[0].month, group[0].year);

            let bars: Vec<Bar> = group
                .iter()
                .map(|row| {
                    Bar::new((row.left + row.right) / 2.0, row.proportion)
                        .width(row.right - row.left)
                        .fill(color.gamma_multiply(0.5))
                        .stroke(Stroke::new(1.0, Color32::BLACK))
                        .name(tooltip_text(row))
                })
                .collect();

            plot_ui.bar_chart(
                BarChart::new(label, bars)
                    .color(color)
                    .element_formatter(Box::new(|bar, _chart| bar.name.clone())),
            );
        }
    });
}
