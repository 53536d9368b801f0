//! Sentiplot viewer GUI application
//!
//! Interactive viewer for daily sentiment tables built on egui. It shows
//! one of four charts (time series, sentiment vs returns scatter,
//! distribution, rolling average) for a loaded table file or for the
//! generated sample table.
//!
//! - `app/` - Application state and coordinators
//! - `state/` - Table, chart and theme state
//! - `io/` - Background table loading
//! - `ui/` - Panel rendering
//! - `utils/` - Status bar formatting

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod utils;
mod io;
mod app;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use io::AsyncLoader;
use ui::panel_manager::{PanelInteraction, PanelManager};

const SAMPLE_FLAG: &str = "--sample";

/// What to show on the first frame.
enum StartupLoad {
    File(PathBuf),
    Sample,
}

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let startup = std::env::args().nth(1).map(|arg| {
        if arg == SAMPLE_FLAG {
            StartupLoad::Sample
        } else {
            StartupLoad::File(PathBuf::from(arg))
        }
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_title("Sentiplot"),
        ..Default::default()
    };

    eframe::run_native(
        "Sentiplot",
        options,
        Box::new(move |cc| Ok(Box::new(SentiplotApp::new(cc, startup)))),
    )
}

/// The viewer application; all behavior lives in the coordinators.
struct SentiplotApp {
    state: AppState,
    loader: AsyncLoader,
    /// Load requested on the command line, applied on the first frame
    pending_load: Option<StartupLoad>,
}

impl SentiplotApp {
    /// Creates the viewer with theme and chart preferences from persistent storage.
    fn new(cc: &eframe::CreationContext, startup: Option<StartupLoad>) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let (kind, window_size) = SettingsCoordinator::load_chart_preferences(cc.storage);
        tracing::debug!(%theme_name, ?kind, window_size, "restored preferences");

        Self {
            state: AppState::with_preferences(theme_name, kind, window_size),
            loader: AsyncLoader::new(),
            pending_load: startup,
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::OpenSampleRequested => {
                ApplicationCoordinator::open_sample_data(&mut self.state, &mut self.loader);
            }
        }
    }

    fn save_preferences(&self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_chart_preferences(
            storage,
            self.state.chart.kind(),
            self.state.chart.window_size(),
        );
    }
}

impl eframe::App for SentiplotApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.save_preferences(storage);
    }

    /// Per frame: pick up finished loads, apply the theme, run the startup
    /// load once, draw the panels, then rebuild the chart if its inputs changed.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(storage) = frame.storage_mut() {
            self.save_preferences(storage);
        }

        match self.pending_load.take() {
            Some(StartupLoad::File(path)) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            Some(StartupLoad::Sample) => {
                ApplicationCoordinator::open_sample_data(&mut self.state, &mut self.loader);
            }
            None => {}
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            self.handle_panel_interaction(interaction, ctx);
        }

        if self.state.chart.is_dirty() && self.state.table.table().is_some() {
            self.state.refresh_chart();
            ctx.request_repaint();
        }
    }
}
