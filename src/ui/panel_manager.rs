//! Panel orchestration and layout management.
//!
//! Lays out the header, controls, chart and status panels and funnels their
//! interactions back to the application coordinator.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::ui::{chart_panel, controls_panel, header, status_bar};
use eframe::egui;

const CONTROLS_WIDTH: f32 = 240.0;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a file
    OpenFileRequested(std::path::PathBuf),
    /// User requested the generated sample table
    OpenSampleRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from `eframe::App::update()`. Chart options edited here take
    /// effect on the next `AppState::refresh_chart`.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state, loader) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::OpenSampleRequested => {
                        PanelInteraction::OpenSampleRequested
                    }
                });
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        egui::SidePanel::left("controls_panel")
            .default_width(CONTROLS_WIDTH)
            .resizable(true)
            .frame(egui::Frame::default().inner_margin(egui::Margin::same(6)).fill(ctx.style().visuals.panel_fill))
            .show(ctx, |ui| {
                controls_panel::render_controls_panel(ui, state);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::default().inner_margin(egui::Margin::same(4)).fill(ctx.style().visuals.panel_fill))
            .show(ctx, |ui| {
                chart_panel::render_chart_panel(ui, state, loader);
            });

        interaction
    }
}
