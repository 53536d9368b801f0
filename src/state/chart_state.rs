//! Chart selection and options.
//!
//! Holds which of the four charts is shown, the parameters that feed it, and
//! the last built chart. The chart is rebuilt only when `is_dirty` is set.

use sentiplot::{
    distribution, rolling_average, scatter_sentiment_vs_returns, time_series, Chart, DailyTable,
    PlotColumns, TableResult,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WINDOW_SIZE: usize = 7;

/// The four charts the viewer can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartKind {
    #[default]
    TimeSeries,
    Scatter,
    Distribution,
    RollingAverage,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::TimeSeries,
        ChartKind::Scatter,
        ChartKind::Distribution,
        ChartKind::RollingAverage,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::TimeSeries => "Time Series",
            ChartKind::Scatter => "Sentiment vs Returns",
            ChartKind::Distribution => "Distribution",
            ChartKind::RollingAverage => "Rolling Average",
        }
    }
}

/// State behind the chart panel.
#[derive(Debug, Clone)]
pub struct ChartState {
    kind: ChartKind,
    window_size: usize,
    columns: PlotColumns,
    distribution_column: String,
    distribution_title: String,
    chart: Option<Result<Chart, String>>,
    dirty: bool,
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartState {
    pub fn new() -> Self {
        let columns = PlotColumns::default();
        Self {
            kind: ChartKind::default(),
            window_size: DEFAULT_WINDOW_SIZE,
            distribution_column: columns.sentiment.clone(),
            distribution_title: "Distribution of Sentiment Scores".to_string(),
            columns,
            chart: None,
            dirty: true,
        }
    }

    /// Creates chart state with persisted preferences.
    pub fn with_preferences(kind: ChartKind, window_size: usize) -> Self {
        Self {
            kind,
            window_size: window_size.max(1),
            ..Self::new()
        }
    }

    // ===== Queries =====

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn columns(&self) -> &PlotColumns {
        &self.columns
    }

    pub fn distribution_column(&self) -> &str {
        &self.distribution_column
    }

    pub fn distribution_title(&self) -> &str {
        &self.distribution_title
    }

    /// The last built chart, or the error that prevented building it.
    pub fn chart(&self) -> Option<&Result<Chart, String>> {
        self.chart.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // ===== Mutations =====
    // Every setter that changes an input marks the chart for rebuilding.

    pub fn set_kind(&mut self, kind: ChartKind) {
        if self.kind != kind {
            self.kind = kind;
            self.dirty = true;
        }
    }

    pub fn set_window_size(&mut self, window_size: usize) {
        if self.window_size != window_size {
            self.window_size = window_size;
            self.dirty = true;
        }
    }

    pub fn set_date_column(&mut self, name: String) {
        if self.columns.date != name {
            self.columns.date = name;
            self.dirty = true;
        }
    }

    pub fn set_sentiment_column(&mut self, name: String) {
        if self.columns.sentiment != name {
            self.columns.sentiment = name;
            self.dirty = true;
        }
    }

    pub fn set_return_column(&mut self, name: String) {
        if self.columns.daily_return != name {
            self.columns.daily_return = name;
            self.dirty = true;
        }
    }

    pub fn set_distribution_column(&mut self, name: String) {
        if self.distribution_column != name {
            self.distribution_column = name;
            self.dirty = true;
        }
    }

    pub fn set_distribution_title(&mut self, title: String) {
        if self.distribution_title != title {
            self.distribution_title = title;
            self.dirty = true;
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Drops the built chart, e.g. when the table goes away.
    pub fn clear(&mut self) {
        self.chart = None;
        self.dirty = true;
    }

    /// Builds the selected chart from `table` and caches the outcome.
    ///
    /// The returns sequence is the table's return column. The rolling-average
    /// chart adds its column to `table`.
    pub fn rebuild(&mut self, table: &mut DailyTable) {
        self.chart = Some(self.build(table).map_err(|e| e.to_string()));
        self.dirty = false;
    }

    fn build(&self, table: &mut DailyTable) -> TableResult<Chart> {
        match self.kind {
            ChartKind::TimeSeries => {
                let returns = table.numbers(&self.columns.daily_return)?;
                time_series(table, returns, &self.columns)
            }
            ChartKind::Scatter => {
                let returns = table.numbers(&self.columns.daily_return)?;
                scatter_sentiment_vs_returns(table, returns, &self.columns)
            }
            ChartKind::Distribution => {
                distribution(table, &self.distribution_column, &self.distribution_title)
            }
            ChartKind::RollingAverage => rolling_average(table, self.window_size, &self.columns),
        }
    }
}
