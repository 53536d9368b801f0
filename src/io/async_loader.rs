//! Asynchronous table file loading.
//!
//! Reads table files in a background thread so the window keeps painting
//! while a large (or Brotli-compressed) file is decoded.

use crate::io::LoadingState;
use eframe::egui;
use sentiplot::{parse_table_file, SyntheticTable, TableFile};
use sentiplot::reader::TableHeader;
use sentiplot::writer::TABLE_FORMAT_VERSION;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

/// Result of a completed table load.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        /// The parsed table file
        data: TableFile,
        /// Path to the file that was loaded (None for sample data)
        path: Option<PathBuf>,
    },
    /// Loading failed with an error
    Error(String),
    /// Nothing finished since the last check
    None,
}

/// Manages background loading of table files.
pub struct AsyncLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<TableFile, String>>>,

    /// Path of the file currently being loaded
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    /// Checks if a load is currently in progress.
    pub fn is_loading(&self) -> bool {
        self.loading_state
            .lock()
            .map(|state| state.in_progress)
            .unwrap_or(false)
    }

    /// Starts reading `path` in a background thread.
    ///
    /// Call `check_completion()` once per frame to pick up the result. The
    /// context is used to request a repaint when the thread finishes.
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);
        set_in_progress(&self.loading_state, true);
        self.pending_load_path = Some(path.clone());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let path_string = path.to_string_lossy().into_owned();
            let result = parse_table_file(&path_string).map_err(|e| format!("{:#}", e));

            let _ = sender.send(result);
            set_in_progress(&loading_state, false);
            ctx_handle.request_repaint();
        });
    }

    /// Generates the sample table in memory.
    ///
    /// Synchronous: generation is fast enough to run on the GUI thread.
    pub fn load_sample_data(&mut self) -> TableFile {
        let generator = SyntheticTable::new();
        let table = generator.generate();
        tracing::info!(rows = table.len(), seed = generator.seed(), "generated sample table");
        TableFile {
            header: TableHeader {
                version: TABLE_FORMAT_VERSION.to_string(),
                metadata: serde_json::json!({
                    "source": "synthetic",
                    "seed": generator.seed(),
                }),
            },
            declared_rows: Some(table.len()),
            table,
        }
    }

    /// Returns the background result if one arrived since the last call.
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };
        let Ok(result) = receiver.try_recv() else {
            return LoadResult::None;
        };

        self.loading_receiver = None;
        match result {
            Ok(data) => LoadResult::Success {
                data,
                path: self.pending_load_path.take(),
            },
            Err(error_msg) => {
                self.pending_load_path = None;
                LoadResult::Error(error_msg)
            }
        }
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn set_in_progress(state: &Mutex<LoadingState>, in_progress: bool) {
    if let Ok(mut state) = state.lock() {
        state.in_progress = in_progress;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiplot::TableWriter;
    use std::time::{Duration, Instant};

    fn wait_for_result(loader: &mut AsyncLoader) -> LoadResult {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            match loader.check_completion() {
                LoadResult::None if Instant::now() < deadline => {
                    thread::sleep(Duration::from_millis(5));
                }
                result => return result,
            }
        }
    }

    #[test]
    fn test_async_loader_creation() {
        let loader = AsyncLoader::new();
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_sample_data_metadata() {
        let mut loader = AsyncLoader::new();
        let file = loader.load_sample_data();
        assert_eq!(file.metadata()["source"], "synthetic");
        assert_eq!(file.declared_rows, Some(file.table.len()));
        assert!(!file.table.is_empty());
    }

    #[test]
    fn test_check_completion_when_idle() {
        let mut loader = AsyncLoader::new();
        assert!(matches!(loader.check_completion(), LoadResult::None));
    }

    #[test]
    fn test_background_load_of_written_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daily.jsonl");
        let table = SyntheticTable::new().generate();
        {
            let mut writer = TableWriter::new(path.to_str().unwrap()).unwrap();
            writer
                .write_table(&table, "date", serde_json::json!({"source": "test"}))
                .unwrap();
        }

        let mut loader = AsyncLoader::new();
        loader.start_file_load(path.clone(), &egui::Context::default());
        match wait_for_result(&mut loader) {
            LoadResult::Success { data, path: loaded } => {
                assert_eq!(data.table.len(), table.len());
                assert_eq!(loaded, Some(path));
            }
            LoadResult::Error(e) => panic!("load failed: {}", e),
            LoadResult::None => panic!("load timed out"),
        }
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_background_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut loader = AsyncLoader::new();
        loader.start_file_load(dir.path().join("absent.jsonl"), &egui::Context::default());
        assert!(matches!(wait_for_result(&mut loader), LoadResult::Error(_)));
    }
}
