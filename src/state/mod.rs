//! State management modules for the sentiplot viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Table state (loaded table, source file, header metadata)
//! - Chart state (selected chart, column names, window size, built chart)
//! - Theme state (theme manager, current theme)

mod table_state;
mod chart_state;
mod theme_state;

pub use table_state::TableState;
pub use chart_state::{ChartKind, ChartState, DEFAULT_WINDOW_SIZE};
pub use theme_state::ThemeState;
