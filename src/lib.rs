pub mod error;
pub mod table;
pub mod rolling;
pub mod histogram;
pub mod chart;
pub mod plots;
pub mod render;
pub mod theme;
pub mod reader;
pub mod writer;
pub mod synthetic;

// Export the table model
pub use error::{TableError, TableResult};
pub use table::{Column, DailyTable, PlotColumns};

// Export the computations behind the charts
pub use rolling::{add_rolling_average, rolling_mean, ROLLING_AVERAGE_COLUMN};
pub use histogram::{Histogram, DISTRIBUTION_BINS};

// Export chart building and the four plotting operations
pub use chart::{AxisKind, BarEdge, Bounds, Chart, FigureSize, Series, SeriesColor};
pub use plots::{
    distribution, rolling_average, scatter_sentiment_vs_returns, time_series,
    plot_distribution, plot_rolling_average, plot_scatter_sentiment_vs_returns, plot_time_series,
};

// Export rendering
pub use render::{paint_chart, show, show_all, PlotLayout, PlotTransform};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, adjust_brightness, with_alpha};

// Export table file I/O
pub use reader::{parse_table_file, read_table, TableFile};
pub use writer::TableWriter;

pub use synthetic::SyntheticTable;
