//! Status bar UI rendering
//!
//! Memory usage, then row count, date range and source of the loaded table.

use crate::app::AppState;
use crate::utils::{format_count, format_date_range, format_memory_mb, get_current_memory_mb};
use eframe::egui;
use egui::RichText;

/// Renders the status panel at the bottom of the window
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        // Always show memory usage first
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());

        let Some(table) = state.table.table() else {
            ui.label(RichText::new(state.table.source_label()).strong());
            return;
        };

        let mut parts = vec![
            state.table.source_label(),
            format!("Rows: {}", format_count(table.len())),
        ];
        if let Ok(Some((first, last))) = table.date_range(&state.chart.columns().date) {
            parts.push(format_date_range(first, last));
        }
        if let Some(ticker) = state.table.metadata().get("ticker").and_then(|v| v.as_str()) {
            parts.push(format!("Ticker: {}", ticker));
        }
        if let Some(seed) = state.table.metadata().get("seed").and_then(|v| v.as_u64()) {
            parts.push(format!("Seed: {}", seed));
        }

        let response = ui.label(RichText::new(parts.join(" | ")).strong());
        if let Some(path) = state.table.file_path() {
            response.on_hover_text(path.display().to_string());
        }
    });
}
