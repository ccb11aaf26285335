use eframe::egui;

use crate::app::TaxiHist;

/// Render the toolbar: data folder selection, exports, config, theme
pub fn render_toolbar(app: &mut TaxiHist, ui: &mut egui::Ui) {
    ui.horizontal_wrapped(|ui| {
        if ui.button("📂").on_hover_text("Open data folder").clicked() {
            if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                if let Err(e) = app.load_data(dir) {
                    app.state.ui.set_error(e.user_message());
                }
            }
        }

        if ui.button("🔄").on_hover_text("Reload data").clicked() {
            if let Some(dir) = app.state.data_dir.clone() {
                if let Err(e) = app.load_data(dir) {
                    app.state.ui.set_error(e.user_message());
                }
            }
        }

        ui.separator();

        if ui.button("💾").on_hover_text("Export bins as CSV").clicked() {
            app.export_csv();
        }
        if ui.button("🌐").on_hover_text("Export HTML snapshot").clicked() {
            app.export_html();
        }

        ui.separator();

        if ui.button("⚙").on_hover_text("Save selection").clicked() {
            app.save_config();
        }
        if ui.button("📥").on_hover_text("Load selection").clicked() {
            app.load_config();
        }

        ui.separator();

        ui.toggle_value(&mut app.state.ui.show_bin_table, "📋")
            .on_hover_text("Bin table");

        let theme_icon = if app.state.ui.dark_mode { "🌙" } else { "☀" };
        if ui.button(theme_icon).on_hover_text("Toggle theme").clicked() {
            app.state.ui.dark_mode = !app.state.ui.dark_mode;
        }
    });
}
