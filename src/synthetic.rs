//! Seeded synthetic daily tables for demos and tests.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::table::{Column, DailyTable, PlotColumns};

const DEFAULT_DAYS: usize = 180;
const DEFAULT_SEED: u64 = 42;

/// Persistence of the sentiment series from one day to the next
const SENTIMENT_PERSISTENCE: f64 = 0.8;
/// Return sensitivity to same-day sentiment
const RETURN_BETA: f64 = 0.02;

/// Generates a table shaped like real daily sentiment data: a persistent
/// sentiment score in [-1, 1] and a daily return that partly follows it.
pub struct SyntheticTable {
    days: usize,
    start: NaiveDate,
    seed: u64,
    missing_ratio: f64,
}

impl SyntheticTable {
    pub fn new() -> Self {
        Self {
            days: DEFAULT_DAYS,
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            seed: DEFAULT_SEED,
            missing_ratio: 0.0,
        }
    }

    pub fn with_config(days: usize, start: NaiveDate, seed: u64) -> Self {
        Self {
            days,
            start,
            seed,
            missing_ratio: 0.0,
        }
    }

    /// Fraction of sentiment cells left missing, clamped to [0, 1].
    pub fn with_missing_ratio(mut self, ratio: f64) -> Self {
        self.missing_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Builds the table with the default column names.
    pub fn generate(&self) -> DailyTable {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let columns = PlotColumns::default();

        let dates: Vec<NaiveDate> = (0..self.days)
            .map(|i| self.start + Duration::days(i as i64))
            .collect();

        let mut sentiment = Vec::with_capacity(self.days);
        let mut returns = Vec::with_capacity(self.days);
        let mut level = 0.0f64;

        for _ in 0..self.days {
            let shock: f64 = rng.gen_range(-0.35..0.35);
            level = (SENTIMENT_PERSISTENCE * level + shock).clamp(-1.0, 1.0);

            let noise: f64 = rng.gen_range(-0.015..0.015);
            returns.push(Some(RETURN_BETA * level + noise));

            let missing = self.missing_ratio > 0.0 && rng.gen_bool(self.missing_ratio);
            sentiment.push(if missing { None } else { Some(level) });
        }

        DailyTable::from_equal_columns(vec![
            (columns.date, Column::Dates(dates)),
            (columns.sentiment, Column::Numbers(sentiment)),
            (columns.daily_return, Column::Numbers(returns)),
        ])
    }
}

impl Default for SyntheticTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        let table = SyntheticTable::new().generate();
        assert_eq!(table.len(), DEFAULT_DAYS);
        assert_eq!(
            table.column_names().collect::<Vec<_>>(),
            vec!["date", "sentiment_score", "daily_return"]
        );
        assert!(table
            .numbers("sentiment_score")
            .unwrap()
            .iter()
            .flatten()
            .all(|v| (-1.0..=1.0).contains(v)));
    }

    #[test]
    fn test_same_seed_same_table() {
        let start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let a = SyntheticTable::with_config(30, start, 7).generate();
        let b = SyntheticTable::with_config(30, start, 7).generate();
        let c = SyntheticTable::with_config(30, start, 8).generate();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.dates("date").unwrap()[0], start);
    }

    #[test]
    fn test_missing_ratio() {
        let table = SyntheticTable::new().with_missing_ratio(1.0).generate();
        assert!(table.numbers("sentiment_score").unwrap().iter().all(Option::is_none));
        assert!(table.numbers("daily_return").unwrap().iter().all(Option::is_some));
    }

    #[test]
    fn test_columns_share_row_count() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let mut table = SyntheticTable::with_config(12, start, 3).generate();
        for name in ["date", "sentiment_score", "daily_return"] {
            assert_eq!(table.column(name).unwrap().len(), 12);
        }
        assert!(table.insert_column("extra", Column::from_values([0.0; 12])).is_ok());

        let empty = SyntheticTable::with_config(0, start, 3).generate();
        assert!(empty.is_empty());
        assert_eq!(empty.column_names().count(), 3);
    }
}
