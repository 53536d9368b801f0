use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use anyhow::{Result, Context};
use brotli::enc::BrotliEncoderParams;
use brotli::CompressorWriter;
use chrono::NaiveDate;

use crate::reader::DATE_FORMAT;
use crate::table::DailyTable;

/// Version string written into the header line.
pub const TABLE_FORMAT_VERSION: &str = "1.0";

/// Streams a daily table to a JSON Lines table file.
pub struct TableWriter {
    writer: Box<dyn Write>,
    row_count: usize,
}

impl TableWriter {
    /// Creates a writer for `file_path`.
    ///
    /// Paths ending in `.br` (e.g. `sentiment.jsonl.br`) are written
    /// Brotli-compressed at quality 6.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use sentiplot::TableWriter;
    /// # fn main() -> anyhow::Result<()> {
    /// let mut writer = TableWriter::new("sentiment.jsonl")?;
    /// writer.write_header(serde_json::json!({"ticker": "ACME"}))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(file_path: &str) -> Result<Self> {
        let file = File::create(file_path)
            .with_context(|| format!("Failed to create file: {}", file_path))?;

        let writer: Box<dyn Write> = if file_path.ends_with(".br") {
            let buf_writer = BufWriter::new(file);
            let params = BrotliEncoderParams {
                quality: 6,
                lgwin: 22,
                ..Default::default()
            };
            Box::new(CompressorWriter::with_params(buf_writer, 4096, &params))
        } else {
            Box::new(BufWriter::new(file))
        };

        Ok(TableWriter {
            writer,
            row_count: 0,
        })
    }

    pub fn write_header(&mut self, metadata: serde_json::Value) -> Result<()> {
        let header = serde_json::json!({
            "type": "header",
            "version": TABLE_FORMAT_VERSION,
            "metadata": metadata
        });

        self.write_line(&header)
    }

    /// Writes one day. `None` values are written as `null`.
    pub fn write_row(&mut self, date: NaiveDate, values: &[(&str, Option<f64>)]) -> Result<()> {
        let mut cells = serde_json::Map::new();
        for &(name, value) in values {
            let cell = value
                .and_then(serde_json::Number::from_f64)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null);
            cells.insert(name.to_string(), cell);
        }

        let mut map = serde_json::Map::new();
        map.insert("type".to_string(), serde_json::Value::String("row".to_string()));
        map.insert("date".to_string(), serde_json::Value::String(date.format(DATE_FORMAT).to_string()));
        map.insert("values".to_string(), serde_json::Value::Object(cells));

        self.write_line(&serde_json::Value::Object(map))?;
        self.row_count += 1;
        Ok(())
    }

    pub fn write_footer(&mut self) -> Result<()> {
        let footer = serde_json::json!({
            "type": "footer",
            "total_rows": self.row_count
        });

        self.write_line(&footer)
    }

    /// Writes a whole table: header, every row, footer.
    ///
    /// `date_column` supplies the row dates; every numeric column is written.
    pub fn write_table(&mut self, table: &DailyTable, date_column: &str, metadata: serde_json::Value) -> Result<()> {
        let dates = table.dates(date_column)?;
        let names = table.numeric_column_names();
        let columns = names
            .iter()
            .map(|name| table.numbers(name))
            .collect::<Result<Vec<_>, _>>()?;

        self.write_header(metadata)?;
        for (row, &date) in dates.iter().enumerate() {
            let values: Vec<(&str, Option<f64>)> = names
                .iter()
                .zip(&columns)
                .map(|(name, column)| (*name, column[row]))
                .collect();
            self.write_row(date, &values)?;
        }
        self.write_footer()?;

        tracing::debug!(rows = self.row_count, "table written");
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.row_count
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)
            .context("Failed to serialize to JSON")?;

        writeln!(self.writer, "{}", json)
            .context("Failed to write line")?;

        self.writer.flush()
            .context("Failed to flush writer")?;

        Ok(())
    }
}

impl Drop for TableWriter {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
