//! Chart panel
//!
//! Paints the selected chart to fill the panel and shows the data
//! coordinates under the pointer.

use crate::app::AppState;
use crate::io::AsyncLoader;
use eframe::egui;
use egui::{Align2, FontId};
use sentiplot::render::ticks::{day_to_date, format_date};
use sentiplot::{paint_chart, AxisKind};

/// Renders the chart panel contents.
pub fn render_chart_panel(ui: &mut egui::Ui, state: &AppState, loader: &AsyncLoader) {
    if loader.is_loading() {
        ui.centered_and_justified(|ui| {
            ui.spinner();
        });
        return;
    }

    let colors = state.theme.colors();
    match state.chart.chart() {
        None => {
            ui.centered_and_justified(|ui| {
                ui.label("Open a table file or load sample data");
            });
        }
        Some(Err(message)) => {
            ui.centered_and_justified(|ui| {
                ui.colored_label(colors.error, format!("Cannot draw chart: {}", message));
            });
        }
        Some(Ok(chart)) => {
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
            let transform = paint_chart(&painter, response.rect, chart, colors);

            let Some(pos) = response.hover_pos() else {
                return;
            };
            if !transform.rect().contains(pos) {
                return;
            }

            let [x, y] = transform.to_data(pos);
            let x_text = match chart.x_axis {
                AxisKind::Date => day_to_date(x.round() as i64)
                    .map(format_date)
                    .unwrap_or_else(|| format!("{:.0}", x)),
                AxisKind::Numeric => format!("{:.4}", x),
            };
            painter.text(
                transform.rect().left_top() + egui::vec2(6.0, 4.0),
                Align2::LEFT_TOP,
                format!("x: {}   y: {:.4}", x_text, y),
                FontId::monospace(11.0),
                colors.text_dim,
            );
        }
    }
}
