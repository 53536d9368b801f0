//! Trailing-window rolling mean.

use crate::error::{TableError, TableResult};
use crate::table::{Column, DailyTable};

/// Name of the column added by [`add_rolling_average`].
pub const ROLLING_AVERAGE_COLUMN: &str = "rolling_average";

/// Computes the rolling mean over a trailing window of `window` values.
///
/// The first `window - 1` entries are `None`. Every later entry is the mean
/// of the `window` values ending at (and including) that position, or `None`
/// if any of those values is missing.
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> TableResult<Vec<Option<f64>>> {
    if window == 0 {
        return Err(TableError::InvalidWindow(window));
    }

    let mut out = vec![None; values.len()];
    if values.len() < window {
        return Ok(out);
    }

    for (i, w) in values.windows(window).enumerate() {
        let sum: Option<f64> = w.iter().copied().sum();
        out[i + window - 1] = sum.map(|s| s / window as f64);
    }

    Ok(out)
}

/// Adds (or replaces) the `rolling_average` column of `table`, computed from
/// `column` with the given window, and returns the new values.
pub fn add_rolling_average<'a>(
    table: &'a mut DailyTable,
    column: &str,
    window: usize,
) -> TableResult<&'a [Option<f64>]> {
    let averaged = rolling_mean(table.numbers(column)?, window)?;
    table.insert_column(ROLLING_AVERAGE_COLUMN, Column::Numbers(averaged))?;
    table.numbers(ROLLING_AVERAGE_COLUMN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Option<f64>, b: f64) -> bool {
        matches!(a, Some(v) if (v - b).abs() < 1e-12)
    }

    #[test]
    fn test_leading_entries_undefined() {
        let values: Vec<Option<f64>> = (1..=10).map(|v| Some(v as f64)).collect();
        let out = rolling_mean(&values, 4).unwrap();
        assert_eq!(out.len(), 10);
        assert!(out[..3].iter().all(Option::is_none));
        assert!(out[3..].iter().all(Option::is_some));
    }

    #[test]
    fn test_each_entry_is_trailing_mean() {
        let values = [2.0, 4.0, 9.0, -1.0, 0.5, 3.5, 7.0];
        let input: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
        for window in 1..=values.len() {
            let out = rolling_mean(&input, window).unwrap();
            for i in (window - 1)..values.len() {
                let expected = values[i + 1 - window..=i].iter().sum::<f64>() / window as f64;
                assert!(approx(out[i], expected), "window {} index {}", window, i);
            }
        }
    }

    #[test]
    fn test_window_one_is_identity() {
        let input = [Some(1.5), Some(-2.0), Some(3.0)];
        assert_eq!(rolling_mean(&input, 1).unwrap(), input.to_vec());
    }

    #[test]
    fn test_missing_value_poisons_window() {
        let input = [Some(1.0), None, Some(3.0), Some(5.0), Some(7.0)];
        let out = rolling_mean(&input, 2).unwrap();
        assert_eq!(out[0], None);
        assert_eq!(out[1], None);
        assert_eq!(out[2], None);
        assert!(approx(out[3], 4.0));
        assert!(approx(out[4], 6.0));
    }

    #[test]
    fn test_window_longer_than_series() {
        let input = [Some(1.0), Some(2.0)];
        assert_eq!(rolling_mean(&input, 7).unwrap(), vec![None, None]);
    }

    #[test]
    fn test_zero_window_rejected() {
        assert_eq!(rolling_mean(&[Some(1.0)], 0), Err(TableError::InvalidWindow(0)));
    }

    #[test]
    fn test_add_rolling_average_mutates_table() {
        let mut table = DailyTable::new()
            .with_column("sentiment_score", Column::from_values([1.0, 2.0, 3.0, 4.0]))
            .unwrap();

        let added = add_rolling_average(&mut table, "sentiment_score", 2).unwrap().to_vec();
        assert_eq!(added, vec![None, Some(1.5), Some(2.5), Some(3.5)]);
        assert_eq!(table.numbers(ROLLING_AVERAGE_COLUMN).unwrap(), added.as_slice());

        // A second call replaces rather than duplicates the column
        add_rolling_average(&mut table, "sentiment_score", 3).unwrap();
        assert_eq!(table.column_names().count(), 2);
        assert_eq!(table.numbers(ROLLING_AVERAGE_COLUMN).unwrap()[2], Some(2.0));
    }
}
