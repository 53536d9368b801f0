//! Theme management and persistence coordination.
//!
//! Handles theme selection, application, and persistent storage across sessions.

use crate::app::AppState;
use sentiplot::theme::DEFAULT_THEME;

const THEME_KEY: &str = "theme_preference";

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads theme preference from persistent storage during application startup.
    ///
    /// Returns the stored theme name if it names a known theme, otherwise the default.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> String {
        let known = sentiplot::ThemeManager::new();
        storage
            .and_then(|s| s.get_string(THEME_KEY))
            .filter(|name| known.get_theme(name).is_some())
            .unwrap_or_else(|| DEFAULT_THEME.to_string())
    }

    /// Saves current theme preference to persistent storage.
    ///
    /// Should be called during application shutdown or when theme changes.
    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme_name: &str) {
        storage.set_string(THEME_KEY, theme_name.to_string());
        storage.flush();
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame to ensure theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let mut visuals = if state.theme.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        let theme = state.theme.current_theme();
        state.theme.theme_manager().apply_theme(theme, &mut visuals);
        ctx.set_visuals(visuals);
    }
}
