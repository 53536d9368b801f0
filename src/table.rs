//! Column-oriented daily table.
//!
//! A `DailyTable` is the already-aggregated input the plotting operations
//! work from: one row per day, columns addressed by name. Numeric cells are
//! `Option<f64>` so that missing days survive loading and rolling windows.

use chrono::NaiveDate;

use crate::error::{TableError, TableResult};

pub const DEFAULT_DATE_COLUMN: &str = "date";
pub const DEFAULT_SENTIMENT_COLUMN: &str = "sentiment_score";
pub const DEFAULT_RETURN_COLUMN: &str = "daily_return";

/// A single named column of a table.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Dates(Vec<NaiveDate>),
    Numbers(Vec<Option<f64>>),
}

impl Column {
    /// Builds a numeric column where every value is present.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        Column::Numbers(values.into_iter().map(Some).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Dates(d) => d.len(),
            Column::Numbers(n) => n.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Column::Dates(_) => "dates",
            Column::Numbers(_) => "numbers",
        }
    }
}

/// Names of the columns the plotting operations read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotColumns {
    pub date: String,
    pub sentiment: String,
    /// Only consulted when the returns live in the same table, see
    /// [`DailyTable::numbers`].
    pub daily_return: String,
}

impl Default for PlotColumns {
    fn default() -> Self {
        Self {
            date: DEFAULT_DATE_COLUMN.to_string(),
            sentiment: DEFAULT_SENTIMENT_COLUMN.to_string(),
            daily_return: DEFAULT_RETURN_COLUMN.to_string(),
        }
    }
}

/// Ordered collection of equal-length named columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyTable {
    columns: Vec<(String, Column)>,
}

impl DailyTable {
    pub fn new() -> Self {
        Self { columns: Vec::new() }
    }

    /// Builds a table from columns the caller has already sized alike.
    pub(crate) fn from_equal_columns(columns: Vec<(String, Column)>) -> Self {
        debug_assert!(columns.windows(2).all(|w| w[0].1.len() == w[1].1.len()));
        Self { columns }
    }

    /// Builder form of [`insert_column`](Self::insert_column).
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> TableResult<Self> {
        self.insert_column(name, column)?;
        Ok(self)
    }

    /// Adds a column, replacing any existing column with the same name.
    ///
    /// The first column fixes the row count; every later column must match it.
    pub fn insert_column(&mut self, name: impl Into<String>, column: Column) -> TableResult<()> {
        let name = name.into();
        let replacing_only_column = self.columns.len() == 1 && self.columns[0].0 == name;

        if !self.columns.is_empty() && !replacing_only_column && column.len() != self.len() {
            return Err(TableError::LengthMismatch {
                name,
                expected: self.len(),
                found: column.len(),
            });
        }

        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = column,
            None => self.columns.push((name, column)),
        }
        Ok(())
    }

    /// Number of rows (zero for a table without columns).
    pub fn len(&self) -> usize {
        self.columns.first().map(|(_, c)| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// Names of the numeric columns, in table order.
    pub fn numeric_column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|(_, c)| matches!(c, Column::Numbers(_)))
            .map(|(n, _)| n.as_str())
            .collect()
    }

    /// Names of the date columns, in table order.
    pub fn date_column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|(_, c)| matches!(c, Column::Dates(_)))
            .map(|(n, _)| n.as_str())
            .collect()
    }

    pub fn column(&self, name: &str) -> TableResult<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))
    }

    pub fn numbers(&self, name: &str) -> TableResult<&[Option<f64>]> {
        match self.column(name)? {
            Column::Numbers(values) => Ok(values),
            other => Err(TableError::WrongColumnKind {
                name: name.to_string(),
                expected: "numbers",
                found: other.kind_name(),
            }),
        }
    }

    pub fn dates(&self, name: &str) -> TableResult<&[NaiveDate]> {
        match self.column(name)? {
            Column::Dates(dates) => Ok(dates),
            other => Err(TableError::WrongColumnKind {
                name: name.to_string(),
                expected: "dates",
                found: other.kind_name(),
            }),
        }
    }

    /// First and last date of a date column, if it has any rows.
    pub fn date_range(&self, name: &str) -> TableResult<Option<(NaiveDate, NaiveDate)>> {
        let dates = self.dates(name)?;
        Ok(dates.iter().min().copied().zip(dates.iter().max().copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn sample() -> DailyTable {
        DailyTable::new()
            .with_column("date", Column::Dates(vec![day(1), day(2), day(3)]))
            .unwrap()
            .with_column("sentiment_score", Column::from_values([0.1, -0.2, 0.3]))
            .unwrap()
    }

    #[test]
    fn test_column_lookup() {
        let table = sample();
        assert_eq!(table.len(), 3);
        assert_eq!(table.numbers("sentiment_score").unwrap()[1], Some(-0.2));
        assert_eq!(table.dates("date").unwrap()[2], day(3));
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["date", "sentiment_score"]);
    }

    #[test]
    fn test_missing_and_wrong_kind() {
        let table = sample();
        assert_eq!(
            table.numbers("volume"),
            Err(TableError::MissingColumn("volume".to_string()))
        );
        assert!(matches!(
            table.numbers("date"),
            Err(TableError::WrongColumnKind { expected: "numbers", found: "dates", .. })
        ));
    }

    #[test]
    fn test_insert_rejects_length_mismatch() {
        let mut table = sample();
        let err = table
            .insert_column("daily_return", Column::from_values([0.01, 0.02]))
            .unwrap_err();
        assert_eq!(
            err,
            TableError::LengthMismatch { name: "daily_return".to_string(), expected: 3, found: 2 }
        );
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut table = sample();
        table
            .insert_column("sentiment_score", Column::from_values([1.0, 2.0, 3.0]))
            .unwrap();
        assert_eq!(table.numeric_column_names(), vec!["sentiment_score"]);
        assert_eq!(table.numbers("sentiment_score").unwrap()[0], Some(1.0));
    }

    #[test]
    fn test_date_range() {
        let table = sample();
        assert_eq!(table.date_range("date").unwrap(), Some((day(1), day(3))));
        assert_eq!(DailyTable::new().len(), 0);
    }
}
