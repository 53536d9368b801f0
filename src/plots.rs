//! The four sentiment/return charts.
//!
//! Each builder reads the named columns from a [`DailyTable`] and returns a
//! [`Chart`]; the `plot_*` forms build and then open the chart in a window.
//! Table errors are handed back unchanged.

use chrono::{Datelike, NaiveDate};

use crate::chart::{AxisKind, BarEdge, Chart, FigureSize, Series, SeriesColor};
use crate::error::{TableError, TableResult};
use crate::histogram::{Histogram, DISTRIBUTION_BINS};
use crate::render::show;
use crate::rolling::add_rolling_average;
use crate::table::{DailyTable, PlotColumns};

/// Alpha applied to the return series and to histogram bars.
const SECONDARY_ALPHA: f32 = 0.7;

/// Day number used for date x values.
pub fn date_to_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Checks that `returns` lines up row-for-row with `table`.
fn check_returns_len(table: &DailyTable, returns: &[Option<f64>], name: &str) -> TableResult<()> {
    if returns.len() != table.len() {
        return Err(TableError::LengthMismatch {
            name: name.to_string(),
            expected: table.len(),
            found: returns.len(),
        });
    }
    Ok(())
}

fn dated_points(dates: &[NaiveDate], values: &[Option<f64>]) -> Vec<Option<[f64; 2]>> {
    dates
        .iter()
        .zip(values)
        .map(|(&d, v)| v.map(|y| [date_to_x(d), y]))
        .collect()
}

/// Daily sentiment and daily return as two lines over a shared date axis.
pub fn time_series(
    table: &DailyTable,
    returns: &[Option<f64>],
    columns: &PlotColumns,
) -> TableResult<Chart> {
    let dates = table.dates(&columns.date)?;
    let sentiment = table.numbers(&columns.sentiment)?;
    check_returns_len(table, returns, &columns.daily_return)?;

    Ok(Chart::new(
        "Time Series of Daily Sentiment Scores and Stock Returns",
        FigureSize::WIDE,
    )
    .x_label("Date")
    .y_label("Value")
    .x_axis(AxisKind::Date)
    .legend(true)
    .grid(true)
    .series(Series::Line {
        label: Some("Daily Sentiment Score".to_string()),
        points: dated_points(dates, sentiment),
        alpha: 1.0,
        color: SeriesColor::Cycle(0),
    })
    .series(Series::Line {
        label: Some("Daily Stock Return".to_string()),
        points: dated_points(dates, returns),
        alpha: SECONDARY_ALPHA,
        color: SeriesColor::Cycle(1),
    }))
}

/// One point per day at (sentiment, return). Days missing either value are
/// left out.
pub fn scatter_sentiment_vs_returns(
    table: &DailyTable,
    returns: &[Option<f64>],
    columns: &PlotColumns,
) -> TableResult<Chart> {
    let sentiment = table.numbers(&columns.sentiment)?;
    check_returns_len(table, returns, &columns.daily_return)?;

    let points = sentiment
        .iter()
        .zip(returns)
        .filter_map(|(s, r)| Some([(*s)?, (*r)?]))
        .collect();

    Ok(Chart::new("Scatter Plot of Sentiment Scores vs Stock Returns", FigureSize::SQUARE)
        .x_label("Daily Sentiment Score")
        .y_label("Daily Stock Return")
        .grid(true)
        .series(Series::Scatter {
            label: None,
            points,
            alpha: 1.0,
            color: SeriesColor::Cycle(0),
        }))
}

/// Histogram of one numeric column using [`DISTRIBUTION_BINS`] bins.
pub fn distribution(table: &DailyTable, column: &str, title: &str) -> TableResult<Chart> {
    let values = table.numbers(column)?;
    let histogram = Histogram::compute(values, DISTRIBUTION_BINS)?;

    Ok(Chart::new(title, FigureSize::SQUARE)
        .x_label(column)
        .y_label("Frequency")
        .grid(true)
        .series(Series::Bars {
            label: None,
            histogram,
            alpha: SECONDARY_ALPHA,
            color: SeriesColor::Cycle(0),
            edge: BarEdge::Black,
        }))
}

/// Adds the `rolling_average` column to `table` and charts it over time.
pub fn rolling_average(
    table: &mut DailyTable,
    window: usize,
    columns: &PlotColumns,
) -> TableResult<Chart> {
    // Validate the date column before touching the table
    table.dates(&columns.date)?;
    add_rolling_average(table, &columns.sentiment, window)?;

    let dates = table.dates(&columns.date)?;
    let averaged = table.numbers(crate::rolling::ROLLING_AVERAGE_COLUMN)?;

    Ok(Chart::new(
        format!("{}-Day Rolling Average of Sentiment Scores", window),
        FigureSize::WIDE,
    )
    .x_label("Date")
    .y_label("Rolling Average Sentiment Score")
    .x_axis(AxisKind::Date)
    .legend(true)
    .grid(true)
    .series(Series::Line {
        label: Some(format!("{}-Day Rolling Average", window)),
        points: dated_points(dates, averaged),
        alpha: 1.0,
        color: SeriesColor::Cycle(0),
    }))
}

/// Builds [`time_series`] and shows it in a window.
pub fn plot_time_series(
    table: &DailyTable,
    returns: &[Option<f64>],
    columns: &PlotColumns,
) -> anyhow::Result<()> {
    show(time_series(table, returns, columns)?)
}

/// Builds [`scatter_sentiment_vs_returns`] and shows it in a window.
pub fn plot_scatter_sentiment_vs_returns(
    table: &DailyTable,
    returns: &[Option<f64>],
    columns: &PlotColumns,
) -> anyhow::Result<()> {
    show(scatter_sentiment_vs_returns(table, returns, columns)?)
}

/// Builds [`distribution`] and shows it in a window.
pub fn plot_distribution(table: &DailyTable, column: &str, title: &str) -> anyhow::Result<()> {
    show(distribution(table, column, title)?)
}

/// Builds [`rolling_average`] (mutating `table`) and shows it in a window.
pub fn plot_rolling_average(
    table: &mut DailyTable,
    window: usize,
    columns: &PlotColumns,
) -> anyhow::Result<()> {
    show(rolling_average(table, window, columns)?)
}
