//! Chart controls panel
//!
//! Picks which chart is shown and edits the options that feed it. Every
//! edit goes through a `ChartState` setter, which marks the chart dirty.

use crate::app::AppState;
use crate::state::ChartKind;
use eframe::egui;

const MAX_WINDOW_SIZE: usize = 365;

/// Renders the controls panel.
pub fn render_controls_panel(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Chart");
    ui.separator();

    let mut kind = state.chart.kind();
    for candidate in ChartKind::ALL {
        ui.radio_value(&mut kind, candidate, candidate.label());
    }
    state.chart.set_kind(kind);

    ui.add_space(8.0);
    ui.heading("Columns");
    ui.separator();

    let Some(table) = state.table.table() else {
        ui.label("No table loaded");
        return;
    };
    let dates: Vec<String> = table.date_column_names().into_iter().map(String::from).collect();
    let numbers: Vec<String> = table.numeric_column_names().into_iter().map(String::from).collect();

    let chart = &mut state.chart;
    match kind {
        ChartKind::TimeSeries | ChartKind::Scatter | ChartKind::RollingAverage => {
            if kind != ChartKind::Scatter {
                if let Some(name) = column_combo(ui, "date_column", "Date", &chart.columns().date, &dates) {
                    chart.set_date_column(name);
                }
            }
            if let Some(name) = column_combo(ui, "sentiment_column", "Sentiment", &chart.columns().sentiment, &numbers) {
                chart.set_sentiment_column(name);
            }
            if kind != ChartKind::RollingAverage {
                if let Some(name) = column_combo(ui, "return_column", "Returns", &chart.columns().daily_return, &numbers) {
                    chart.set_return_column(name);
                }
            }
        }
        ChartKind::Distribution => {
            if let Some(name) = column_combo(ui, "distribution_column", "Column", chart.distribution_column(), &numbers) {
                chart.set_distribution_column(name);
            }
            ui.label("Title");
            let mut title = chart.distribution_title().to_string();
            if ui.text_edit_singleline(&mut title).changed() {
                chart.set_distribution_title(title);
            }
        }
    }

    if kind == ChartKind::RollingAverage {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label("Window (days)");
            let mut window = chart.window_size();
            ui.add(egui::DragValue::new(&mut window).range(1..=MAX_WINDOW_SIZE));
            chart.set_window_size(window);
        });
    }
}

/// A labelled column picker. Returns the new name if the user changed it.
fn column_combo(ui: &mut egui::Ui, id: &str, label: &str, current: &str, options: &[String]) -> Option<String> {
    let mut selected = current.to_string();
    ui.horizontal(|ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(id)
            .selected_text(&selected)
            .show_ui(ui, |ui| {
                for option in options {
                    ui.selectable_value(&mut selected, option.clone(), option);
                }
            });
    });
    (selected != current).then_some(selected)
}
