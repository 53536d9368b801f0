//! Centralized application state for the sentiplot viewer.
//!
//! Composes the focused state components so each keeps its own invariants
//! and the borrow checker can hand out disjoint borrows of them.

use crate::state::{ChartKind, ChartState, TableState, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Loaded table and its source
    pub table: TableState,

    /// Selected chart, its options and the last built chart
    pub chart: ChartState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            table: TableState::new(),
            chart: ChartState::new(),
            theme: ThemeState::new(),
            error_message: None,
        }
    }

    /// Creates state from preferences loaded out of persistent storage.
    pub fn with_preferences(theme_name: String, kind: ChartKind, window_size: usize) -> Self {
        Self {
            table: TableState::new(),
            chart: ChartState::with_preferences(kind, window_size),
            theme: ThemeState::with_theme(theme_name),
            error_message: None,
        }
    }

    /// Clears table-related state before a new table is loaded.
    pub fn reset_table_state(&mut self) {
        self.table.clear();
        self.chart.clear();
        self.error_message = None;
    }

    /// Rebuilds the chart if any of its inputs changed.
    ///
    /// Borrows the table and the chart state separately, which is why both
    /// live side by side here.
    pub fn refresh_chart(&mut self) {
        if !self.chart.is_dirty() {
            return;
        }
        if let Some(table) = self.table.table_mut() {
            self.chart.rebuild(table);
        }
    }
}
