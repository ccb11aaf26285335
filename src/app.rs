use eframe::egui::{self, CentralPanel};
use egui_extras::{Size, StripBuilder};
use std::path::{Path, PathBuf};

use crate::constants::{self, layout, months};
use crate::data::{self, HistogramTable, TripStore};
use crate::error::Result;
use crate::export;
use crate::state::{AppState, DashboardConfig};
use crate::ui;

/// Trip-distance histogram dashboard
pub struct TaxiHist {
    pub state: AppState,
}

impl Default for TaxiHist {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl TaxiHist {
    /// Start the dashboard against `./data`; a failed load leaves the app
    /// empty with the error surfaced as a toast
    pub fn with_default_data() -> Self {
        let mut app = Self::default();
        let dir = PathBuf::from(constants::csv::DEFAULT_DATA_DIR);
        if let Err(e) = app.load_data(dir) {
            app.state.ui.set_error(e.user_message());
        }
        app
    }

    /// Load all twelve monthly extract pairs from a directory and compute
    /// the initial snapshot from the current control selections
    pub fn load_data(&mut self, dir: PathBuf) -> Result<()> {
        let store = TripStore::load(&dir, &months::CODES)?;
        self.state.store = Some(store);
        self.state.data_dir = Some(dir);
        self.state.ui.clear_error();
        self.recompute();
        Ok(())
    }

    /// Rebuild the histogram snapshot from the current control selections
    /// and swap it into the app state
    ///
    /// On error the previous snapshot is kept and the error is shown as a
    /// toast.
    pub fn recompute(&mut self) {
        profiling::scope!("recompute");

        let Some(store) = &self.state.store else {
            self.state.table = HistogramTable::empty();
            return;
        };

        let years = self.state.controls.selected_years();
        let months = self.state.controls.selected_months();
        let bin_width = self.state.controls.bin_width;

        match data::make_dataset(store, &years, &months, bin_width) {
            Ok(table) => self.state.table = table,
            Err(e) => self.state.ui.set_error(e.user_message()),
        }
    }

    /// Save the current selection to a JSON config file
    pub fn save_config(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(constants::export::CONFIG_FILE)
            .save_file()
        {
            if let Err(e) = self.write_config(&path) {
                self.state.ui.set_error(e.user_message());
            }
        }
    }

    fn write_config(&self, path: &Path) -> Result<()> {
        let config = self.state.controls.to_config();
        let json = serde_json::to_string_pretty(&config)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a selection from a JSON config file and recompute
    pub fn load_config(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            match self.read_config(&path) {
                Ok(config) => {
                    self.state.controls.apply_config(&config);
                    self.recompute();
                }
                Err(e) => self.state.ui.set_error(e.user_message()),
            }
        }
    }

    fn read_config(&self, path: &Path) -> Result<DashboardConfig> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Export the current bin rows as CSV
    pub fn export_csv(&mut self) {
        if self.state.table.is_empty() {
            return;
        }
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name(constants::export::CSV_FILE)
            .save_file()
        {
            if let Err(e) = export::write_bins_csv(&path, &self.state.table) {
                self.state.ui.set_error(e.user_message());
            }
        }
    }

    /// Export a static HTML snapshot of the current histogram
    pub fn export_html(&mut self) {
        if self.state.table.is_empty() {
            return;
        }
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("HTML", &["html"])
            .set_file_name(constants::export::HTML_FILE)
            .save_file()
        {
            if let Err(e) = export::write_html_snapshot(&path, &self.state.table) {
                self.state.ui.set_error(e.user_message());
            }
        }
    }
}

impl eframe::App for TaxiHist {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.state.ui.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(dir) = &self.state.data_dir {
                    ui.label(format!("📁 {}", dir.display()));
                    ui.separator();
                }
                ui.label(format!(
                    "Trips: {} | Bins: {}",
                    self.state.total_trips(),
                    self.state.table.len()
                ));
                if let Some(message) = self.state.ui.error_message.clone() {
                    ui.separator();
                    ui.colored_label(egui::Color32::RED, format!("⚠ {}", message));
                    if ui.button("✖").on_hover_text("Dismiss").clicked() {
                        self.state.ui.clear_error();
                    }
                }
            });
        });

        CentralPanel::default().show(ctx, |ui| {
            let show_bin_table = self.state.ui.show_bin_table && !self.state.table.is_empty();

            let mut builder = StripBuilder::new(ui)
                .size(Size::exact(layout::CONTROL_PANEL_WIDTH))
                .size(Size::remainder());
            if show_bin_table {
                builder = builder.size(Size::exact(layout::BIN_TABLE_WIDTH));
            }

            builder.horizontal(|mut strip| {
                // Left: toolbar and the three dashboard controls
                strip.cell(|ui| {
                    ui::render_toolbar(self, ui);
                    ui.separator();
                    if ui::render_controls(self, ui) {
                        // idle -> recomputing -> idle, synchronously
                        self.recompute();
                    }
                });

                // Center: histogram plot
                strip.cell(|ui| {
                    if self.state.has_data() {
                        ui::render_plot(self, ui);
                    } else {
                        ui.vertical_centered(|ui| {
                            ui.heading("No trip data loaded");
                            ui.label(
                                "Place the monthly extracts under ./data or pick \
                                 a data folder from the toolbar",
                            );
                        });
                    }
                });

                // Right: bin-detail table
                if show_bin_table {
                    strip.cell(|ui| {
                        ui::render_bin_table(self, ui);
                    });
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MonthFrame;
    use polars::df;

    fn app_with_store() -> TaxiHist {
        let frames = ["2019", "2020"]
            .iter()
            .flat_map(|&year| {
                ["January", "February"].iter().map(move |&month| {
                    let df = df!("trip_distance" => [1.0f64, 3.0, 5.0, 12.0]).unwrap();
                    MonthFrame::from_dataframe(df, month, year)
                })
            })
            .collect();

        let mut app = TaxiHist::default();
        app.state.store = Some(TripStore::from_frames(frames).unwrap());
        app
    }

    #[test]
    fn test_recompute_default_selection() {
        let mut app = app_with_store();
        app.recompute();

        // 2 years x 2 default months x 15 bins at the default width
        assert_eq!(app.state.table.len(), 60);
        for group in app.state.table.groups() {
            let total: f64 = group.iter().map(|r| r.proportion).sum();
            assert!((total - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_recompute_without_store_clears_table() {
        let mut app = app_with_store();
        app.recompute();
        assert!(!app.state.table.is_empty());

        app.state.store = None;
        app.recompute();
        assert!(app.state.table.is_empty());
    }

    #[test]
    fn test_recompute_tracks_control_changes() {
        let mut app = app_with_store();
        app.state.controls.years[1].selected = false;
        app.state.controls.bin_width = 10;
        app.recompute();

        // 1 year x 2 months x 3 bins
        assert_eq!(app.state.table.len(), 6);
        assert!(app.state.table.rows().iter().all(|r| r.year == "2019"));
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut app = app_with_store();
        app.state.controls.months[2].selected = true;
        app.state.controls.bin_width = 5;
        app.write_config(&path).unwrap();

        let restored = app.read_config(&path).unwrap();
        assert_eq!(restored.bin_width, 5);
        assert!(restored.months.contains(&"March".to_string()));
    }
}
