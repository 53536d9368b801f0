//! Theme selection state.
//!
//! Owns the theme manager and the selected theme name. Chart colors and
//! the egui base visuals are both resolved from here every frame.

use sentiplot::theme::{Theme, ThemeColors, ThemeManager, DEFAULT_THEME};

/// Selected theme plus the themes it can be switched to.
///
/// The selected name always names a theme the manager knows; unknown names
/// are rejected when set.
pub struct ThemeState {
    theme_manager: ThemeManager,
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            theme_manager: ThemeManager::new(),
            current_theme_name: DEFAULT_THEME.to_string(),
        }
    }

    /// Starts on `theme_name`, or the default theme if it is unknown.
    pub fn with_theme(theme_name: String) -> Self {
        let mut state = Self::new();
        state.set_theme(theme_name);
        state
    }

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    pub fn current_theme(&self) -> &Theme {
        self.theme_manager
            .get_theme(&self.current_theme_name)
            .unwrap_or_else(|| self.theme_manager.current_theme())
    }

    /// Chart colors of the selected theme.
    pub fn colors(&self) -> &ThemeColors {
        &self.current_theme().colors
    }

    /// True when the selected theme should start from egui's dark visuals.
    pub fn is_dark(&self) -> bool {
        self.current_theme_name != DEFAULT_THEME
    }

    /// Selects `theme_name`. Returns false and keeps the current theme if
    /// no such theme exists.
    pub fn set_theme(&mut self, theme_name: String) -> bool {
        if self.theme_manager.get_theme(&theme_name).is_none() {
            tracing::warn!(theme = %theme_name, "unknown theme ignored");
            return false;
        }
        self.current_theme_name = theme_name;
        true
    }
}
