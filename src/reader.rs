use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};

use anyhow::{anyhow, Context, Result};
use brotli::Decompressor;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::table::{Column, DailyTable, DEFAULT_DATE_COLUMN};

static EMPTY_METADATA: Lazy<serde_json::Value> = Lazy::new(|| serde_json::json!({}));

/// Format of the `date` field of every row.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Header line of a table file.
#[derive(Debug, Clone)]
pub struct TableHeader {
    pub version: String,
    pub metadata: serde_json::Value,
}

/// A parsed table file: the header plus the table itself.
#[derive(Debug, Clone)]
pub struct TableFile {
    pub header: TableHeader,
    pub table: DailyTable,
    /// Row count claimed by the footer, if the file had one.
    pub declared_rows: Option<usize>,
}

impl TableFile {
    pub fn metadata(&self) -> &serde_json::Value {
        if self.header.metadata.is_null() {
            &EMPTY_METADATA
        } else {
            &self.header.metadata
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum TableLine {
    #[serde(rename = "header")]
    Header {
        version: String,
        #[serde(default)]
        metadata: serde_json::Value,
    },
    #[serde(rename = "row")]
    Row {
        date: String,
        #[serde(default)]
        values: serde_json::Map<String, serde_json::Value>,
    },
    #[serde(rename = "footer")]
    Footer {
        total_rows: Option<usize>,
    },
}

/// Reads a table file from disk, returning just the table.
///
/// See [`parse_table_file`] for the format.
pub fn read_table(file_path: &str) -> Result<DailyTable> {
    parse_table_file(file_path).map(|file| file.table)
}

/// Parses a table file from disk.
///
/// The file is JSON Lines: a header line, one `row` line per day and an
/// optional footer. Files ending in `.br` are Brotli-compressed.
///
/// ```text
/// {"type":"header","version":"1.0","metadata":{"source":"sentiplot-datagen"}}
/// {"type":"row","date":"2024-01-02","values":{"sentiment_score":0.12,"daily_return":-0.004}}
/// {"type":"footer","total_rows":1}
/// ```
///
/// Value columns are taken from the keys of the first row. `null` or absent
/// values become missing cells; keys not seen in the first row are an error.
pub fn parse_table_file(file_path: &str) -> Result<TableFile> {
    let file = File::open(file_path)
        .with_context(|| format!("Failed to open file: {}", file_path))?;

    let reader: Box<dyn Read> = if file_path.ends_with(".br") {
        Box::new(Decompressor::new(file, 4096))
    } else {
        Box::new(file)
    };

    let parsed = parse_table(BufReader::new(reader))
        .with_context(|| format!("Failed to parse table file: {}", file_path))?;

    tracing::info!(
        path = file_path,
        rows = parsed.table.len(),
        columns = parsed.table.column_names().count(),
        "loaded table"
    );
    Ok(parsed)
}

/// Parses table lines from any buffered reader.
pub fn parse_table<R: BufRead>(reader: R) -> Result<TableFile> {
    let mut header: Option<TableHeader> = None;
    let mut declared_rows = None;

    let mut dates: Vec<NaiveDate> = Vec::new();
    let mut value_names: Vec<String> = Vec::new();
    let mut value_index: HashMap<String, usize> = HashMap::new();
    let mut values: Vec<Vec<Option<f64>>> = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result
            .with_context(|| format!("Failed to read line {}", line_num + 1))?;

        if line.trim().is_empty() {
            continue;
        }

        let table_line: TableLine = serde_json::from_str(&line)
            .with_context(|| format!("Failed to parse JSON at line {}", line_num + 1))?;

        match table_line {
            TableLine::Header { version, metadata } => {
                if header.is_some() || !dates.is_empty() {
                    return Err(anyhow!("Header must be first line (found at line {})", line_num + 1));
                }
                header = Some(TableHeader { version, metadata });
            }

            TableLine::Row { date, values: row } => {
                if header.is_none() {
                    return Err(anyhow!("Row before header at line {}", line_num + 1));
                }

                let date = NaiveDate::parse_from_str(&date, DATE_FORMAT)
                    .with_context(|| format!("Invalid date '{}' at line {}", date, line_num + 1))?;

                // The first row fixes the value columns
                if dates.is_empty() {
                    for name in row.keys() {
                        value_index.insert(name.clone(), value_names.len());
                        value_names.push(name.clone());
                        values.push(Vec::new());
                    }
                }

                let mut cells = vec![None; value_names.len()];
                for (name, value) in row {
                    let idx = *value_index.get(&name).ok_or_else(|| {
                        anyhow!("Unknown column '{}' at line {}", name, line_num + 1)
                    })?;
                    cells[idx] = match value {
                        serde_json::Value::Null => None,
                        serde_json::Value::Number(n) => n.as_f64(),
                        other => {
                            return Err(anyhow!(
                                "Column '{}' at line {} is not a number: {}",
                                name,
                                line_num + 1,
                                other
                            ))
                        }
                    };
                }

                dates.push(date);
                for (column, cell) in values.iter_mut().zip(cells) {
                    column.push(cell);
                }
            }

            TableLine::Footer { total_rows } => {
                declared_rows = total_rows;
            }
        }
    }

    let header = header.ok_or_else(|| anyhow!("Missing header line"))?;

    if let Some(expected) = declared_rows {
        if expected != dates.len() {
            tracing::warn!(expected, found = dates.len(), "footer row count does not match rows read");
        }
    }

    let mut table = DailyTable::new();
    table.insert_column(DEFAULT_DATE_COLUMN, Column::Dates(dates))?;
    for (name, column) in value_names.into_iter().zip(values) {
        if name == DEFAULT_DATE_COLUMN {
            return Err(anyhow!("Value column may not be named '{}'", DEFAULT_DATE_COLUMN));
        }
        table.insert_column(name, Column::Numbers(column))?;
    }

    Ok(TableFile { header, table, declared_rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<TableFile> {
        parse_table(Cursor::new(text.as_bytes()))
    }

    #[test]
    fn test_parse_basic() {
        let file = parse(concat!(
            "{\"type\":\"header\",\"version\":\"1.0\",\"metadata\":{\"ticker\":\"ACME\"}}\n",
            "{\"type\":\"row\",\"date\":\"2024-01-02\",\"values\":{\"sentiment_score\":0.5,\"daily_return\":0.01}}\n",
            "\n",
            "{\"type\":\"row\",\"date\":\"2024-01-03\",\"values\":{\"sentiment_score\":null}}\n",
            "{\"type\":\"footer\",\"total_rows\":2}\n",
        ))
        .unwrap();

        assert_eq!(file.header.version, "1.0");
        assert_eq!(file.metadata()["ticker"], "ACME");
        assert_eq!(file.declared_rows, Some(2));

        let table = &file.table;
        assert_eq!(table.len(), 2);
        assert_eq!(table.numbers("sentiment_score").unwrap(), &[Some(0.5), None]);
        assert_eq!(table.numbers("daily_return").unwrap(), &[Some(0.01), None]);
        assert_eq!(
            table.dates("date").unwrap()[1],
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
        );
    }

    #[test]
    fn test_missing_header() {
        let err = parse("{\"type\":\"row\",\"date\":\"2024-01-02\",\"values\":{}}\n").unwrap_err();
        assert!(err.to_string().contains("Row before header"));
    }

    #[test]
    fn test_bad_date_reports_line() {
        let err = parse(concat!(
            "{\"type\":\"header\",\"version\":\"1.0\"}\n",
            "{\"type\":\"row\",\"date\":\"02/01/2024\",\"values\":{}}\n",
        ))
        .unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_unknown_column_rejected() {
        let err = parse(concat!(
            "{\"type\":\"header\",\"version\":\"1.0\"}\n",
            "{\"type\":\"row\",\"date\":\"2024-01-02\",\"values\":{\"a\":1}}\n",
            "{\"type\":\"row\",\"date\":\"2024-01-03\",\"values\":{\"b\":1}}\n",
        ))
        .unwrap_err();
        assert!(err.to_string().contains("Unknown column 'b'"));
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let file = parse("{\"type\":\"header\",\"version\":\"1.0\"}\n").unwrap();
        assert!(file.table.is_empty());
        assert!(file.metadata().as_object().map(|m| m.is_empty()).unwrap_or(false));
    }
}
