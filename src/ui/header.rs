//! Header panel UI rendering
//!
//! Handles the top bar with file controls and the theme selector.

use crate::app::AppState;
use crate::io::AsyncLoader;
use eframe::egui;
use std::path::PathBuf;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a table file to open
    OpenFileRequested(PathBuf),
    /// User clicked "Sample Data"
    OpenSampleRequested,
}

/// Renders the application header with file controls and the theme selector
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState, loader: &AsyncLoader) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        let loading = loader.is_loading();

        if ui.add_enabled(!loading, egui::Button::new("📁 Open Table")).clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Table Files", &["jsonl", "br"])
                .add_filter("All Files", &["*"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.add_enabled(!loading, egui::Button::new("🎲 Sample Data")).clicked() {
            interaction = Some(HeaderInteraction::OpenSampleRequested);
        }

        if loading {
            ui.spinner();
            ui.label("Loading…");
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            let manager = state.theme.theme_manager();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in manager.list_themes() {
                        let response = ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                        if let Some(theme) = manager.get_theme(theme_name) {
                            response.on_hover_text(&theme.description);
                        }
                    }
                })
                .response
                .on_hover_text(&state.theme.current_theme().description);

            if old_theme != current_theme {
                // Saved from update() where the storage is reachable
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(state.theme.colors().error, err);
    }

    interaction
}
