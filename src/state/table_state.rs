//! Loaded table and its source.

use sentiplot::{DailyTable, TableFile};
use std::path::PathBuf;

/// State related to the loaded table.
///
/// Responsibilities:
/// - Owning the table (the rolling-average chart mutates it in place)
/// - Tracking where it came from (file path, or generated sample)
/// - Keeping the header metadata for the status bar
#[derive(Default)]
pub struct TableState {
    /// The currently loaded table (if any)
    table: Option<DailyTable>,
    /// Header metadata of the loaded file
    metadata: serde_json::Value,
    /// Path to the loaded file (None for sample data)
    file_path: Option<PathBuf>,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current table with a freshly loaded one.
    pub fn load_table(&mut self, file: TableFile, path: Option<PathBuf>) {
        self.metadata = file.metadata().clone();
        self.table = Some(file.table);
        self.file_path = path;
    }

    pub fn clear(&mut self) {
        self.table = None;
        self.metadata = serde_json::Value::Null;
        self.file_path = None;
    }

    pub fn table(&self) -> Option<&DailyTable> {
        self.table.as_ref()
    }

    pub fn table_mut(&mut self) -> Option<&mut DailyTable> {
        self.table.as_mut()
    }

    pub fn metadata(&self) -> &serde_json::Value {
        &self.metadata
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Short description of where the table came from.
    pub fn source_label(&self) -> String {
        match &self.file_path {
            Some(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            None if self.table.is_some() => "Sample data".to_string(),
            None => "No table loaded".to_string(),
        }
    }
}
