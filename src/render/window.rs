//! Blocking chart windows.

use anyhow::anyhow;
use eframe::egui;

use crate::chart::{Chart, DEFAULT_DPI};
use crate::render::chart_renderer::paint_chart;
use crate::theme::ThemeManager;

/// Window that paints a fixed list of charts stacked top to bottom.
struct ChartWindow {
    charts: Vec<Chart>,
    themes: ThemeManager,
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let colors = self.themes.current_theme().colors.clone();
        let count = self.charts.len().max(1) as f32;

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(colors.panel_background))
            .show(ctx, |ui| {
                let width = ui.available_width();
                let height = ui.available_height() / count;
                for chart in &self.charts {
                    let (response, painter) = ui.allocate_painter(egui::vec2(width, height), egui::Sense::hover());
                    paint_chart(&painter, response.rect, chart, &colors);
                }
            });
    }
}

/// Opens a native window showing `chart` and blocks until it is closed.
pub fn show(chart: Chart) -> anyhow::Result<()> {
    show_all(vec![chart])
}

/// Opens one window with every chart stacked vertically; blocks until closed.
pub fn show_all(charts: Vec<Chart>) -> anyhow::Result<()> {
    let Some(first) = charts.first() else {
        return Ok(());
    };

    let [width, _] = first.figure.to_pixels(DEFAULT_DPI);
    let height: f32 = charts.iter().map(|c| c.figure.to_pixels(DEFAULT_DPI)[1]).sum();
    let title = first.title.clone();

    tracing::debug!(charts = charts.len(), %title, "opening chart window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ChartWindow { charts, themes: ThemeManager::new() }))),
    )
    .map_err(|e| anyhow!("failed to open chart window: {}", e))
}
