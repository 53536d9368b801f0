//! Application-level coordination and workflow management.
//!
//! Handles file loading, sample data, and error reporting, keeping the
//! chart in step with whatever table is loaded.

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use std::path::PathBuf;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Starts loading a table file in the background.
    ///
    /// Clears the previous table immediately so the loading indicator shows.
    pub fn open_file(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        tracing::info!(path = %path.display(), "opening table");
        state.reset_table_state();
        loader.start_file_load(path, ctx);
    }

    /// Applies a finished background load to the state.
    ///
    /// Called once per frame. Returns true if a load completed (either way).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { data, path } => {
                state.table.load_table(data, path);
                state.error_message = None;
                Self::adopt_table_columns(state);
                state.chart.mark_dirty();
                true
            }
            LoadResult::Error(error_msg) => {
                tracing::warn!(error = %error_msg, "table load failed");
                state.error_message = Some(format!("Error loading table: {}", error_msg));
                state.table.clear();
                true
            }
            LoadResult::None => false,
        }
    }

    /// Generates a sample table in memory and shows it.
    pub fn open_sample_data(state: &mut AppState, loader: &mut AsyncLoader) {
        let data = loader.load_sample_data();
        state.reset_table_state();
        state.table.load_table(data, None);
        Self::adopt_table_columns(state);
        state.chart.mark_dirty();
    }

    /// Points the column pickers at columns the table actually has.
    ///
    /// Chosen names that exist are kept; otherwise the first column of the
    /// right kind is used. Names with no candidate are left alone so the
    /// chart reports the missing column.
    fn adopt_table_columns(state: &mut AppState) {
        let Some(table) = state.table.table() else {
            return;
        };

        let dates: Vec<String> = table.date_column_names().into_iter().map(String::from).collect();
        let numbers: Vec<String> = table.numeric_column_names().into_iter().map(String::from).collect();
        let chart = &mut state.chart;

        let pick = |current: &str, candidates: &[String], skip: usize| -> Option<String> {
            if candidates.iter().any(|c| c == current) {
                return None;
            }
            candidates.get(skip).or_else(|| candidates.first()).cloned()
        };

        if let Some(name) = pick(&chart.columns().date, &dates, 0) {
            chart.set_date_column(name);
        }
        if let Some(name) = pick(&chart.columns().sentiment, &numbers, 0) {
            chart.set_sentiment_column(name);
        }
        if let Some(name) = pick(&chart.columns().daily_return, &numbers, 1) {
            chart.set_return_column(name);
        }
        if let Some(name) = pick(chart.distribution_column(), &numbers, 0) {
            chart.set_distribution_column(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiplot::reader::TableHeader;
    use sentiplot::{Column, DailyTable, TableFile};

    #[test]
    fn test_sample_data_builds_chart() {
        let mut state = AppState::new();
        let mut loader = AsyncLoader::new();
        ApplicationCoordinator::open_sample_data(&mut state, &mut loader);
        state.refresh_chart();
        assert!(matches!(state.chart.chart(), Some(Ok(_))));
        assert_eq!(state.table.source_label(), "Sample data");
    }

    #[test]
    fn test_columns_follow_loaded_table() {
        let day = chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let table = DailyTable::new()
            .with_column("day", Column::Dates(vec![day]))
            .unwrap()
            .with_column("score", Column::from_values([0.2]))
            .unwrap()
            .with_column("ret", Column::from_values([0.01]))
            .unwrap();

        let mut state = AppState::new();
        state.table.load_table(
            TableFile {
                header: TableHeader { version: "1.0".to_string(), metadata: serde_json::Value::Null },
                table,
                declared_rows: None,
            },
            None,
        );
        ApplicationCoordinator::adopt_table_columns(&mut state);

        assert_eq!(state.chart.columns().date, "day");
        assert_eq!(state.chart.columns().sentiment, "score");
        assert_eq!(state.chart.columns().daily_return, "ret");
        assert_eq!(state.chart.distribution_column(), "score");
    }
}
