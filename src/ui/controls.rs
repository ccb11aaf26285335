use eframe::egui;

use crate::app::TaxiHist;
use crate::constants::hist;

/// Render the year/month checkboxes and the bin-width slider
///
/// Returns true when any control changed this frame, which triggers a full
/// snapshot recompute.
pub fn render_controls(app: &mut TaxiHist, ui: &mut egui::Ui) -> bool {
    let mut changed = false;

    ui.heading("Years");
    for toggle in &mut app.state.controls.years {
        changed |= ui.checkbox(&mut toggle.selected, &toggle.label).changed();
    }

    ui.separator();

    ui.heading("Months");
    egui::ScrollArea::vertical()
        .id_salt("month_checkboxes")
        .max_height(ui.available_height() - 90.0)
        .show(ui, |ui| {
            for toggle in &mut app.state.controls.months {
                changed |= ui.checkbox(&mut toggle.selected, &toggle.label).changed();
            }
        });

    ui.separator();

    ui.label("Distance width (miles)");
    changed |= ui
        .add(egui::Slider::new(
            &mut app.state.controls.bin_width,
            hist::MIN_BIN_WIDTH..=hist::MAX_BIN_WIDTH,
        ))
        .changed();

    changed
}
