//! UI panel rendering subsystem
//!
//! - Header panel (file controls, sample data, theme selector)
//! - Controls panel (chart selection and chart options)
//! - Chart panel (the selected chart with a pointer readout)
//! - Status bar (memory, rows, date range, source)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod controls_panel;
pub mod chart_panel;
pub mod status_bar;
pub mod panel_manager;
