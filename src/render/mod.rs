//! Chart rendering
//!
//! - Coordinate transforms and plot-area layout
//! - Tick placement for numeric and date axes
//! - Painting a chart with an egui painter
//! - Blocking native windows for one or more charts

pub mod transform;
pub mod ticks;
pub mod chart_renderer;
pub mod window;

pub use chart_renderer::paint_chart;
pub use transform::{PlotLayout, PlotTransform};
pub use window::{show, show_all};
