use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::app::TaxiHist;
use crate::constants::layout;
use crate::data::BinRow;

/// Render the bin-detail table panel (right sidebar)
pub fn render_bin_table(app: &mut TaxiHist, ui: &mut egui::Ui) {
    profiling::scope!("render_bin_table");

    ui.heading("Bins");

    ui.horizontal(|ui| {
        ui.label("Filter:");
        ui.text_edit_singleline(&mut app.state.ui.row_filter);
        if ui.button("✖").clicked() {
            app.state.ui.clear_filter();
        }
    });

    ui.separator();

    let filter = app.state.ui.row_filter.to_lowercase();
    let rows: Vec<&BinRow> = app
        .state
        .table
        .rows()
        .iter()
        .filter(|row| filter.is_empty() || matches_filter(row, &filter))
        .collect();

    egui::ScrollArea::vertical()
        .id_salt("bin_table_scroll")
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::initial(20.0).resizable(false))
                .column(Column::initial(80.0).resizable(true))
                .column(Column::initial(50.0).resizable(true))
                .column(Column::initial(100.0).resizable(true))
                .column(Column::remainder())
                .header(layout::TABLE_HEADER_HEIGHT, |mut header| {
                    header.col(|_| {});
                    header.col(|ui| {
                        ui.strong("Month");
                    });
                    header.col(|ui| {
                        ui.strong("Year");
                    });
                    header.col(|ui| {
                        ui.strong("Interval");
                    });
                    header.col(|ui| {
                        ui.strong("Proportion");
                    });
                })
                .body(|mut body| {
                    for row in &rows {
                        body.row(layout::TABLE_ROW_HEIGHT, |mut row_ui| {
                            row_ui.col(|ui| {
                                ui.colored_label(row.color, "●");
                            });
                            row_ui.col(|ui| {
                                ui.label(&row.month);
                            });
                            row_ui.col(|ui| {
                                ui.label(&row.year);
                            });
                            row_ui.col(|ui| {
                                ui.label(&row.f_interval);
                            });
                            row_ui.col(|ui| {
                                ui.label(&row.f_proportion);
                            });
                        });
                    }
                });
        });
}

fn matches_filter(row: &BinRow, filter: &str) -> bool {
    row.month.to_lowercase().contains(filter)
        || row.year.contains(filter)
        || row.f_interval.contains(filter)
        || row.f_proportion.contains(filter)
}
