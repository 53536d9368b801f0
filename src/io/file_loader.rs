//! Asynchronous table loading state.

/// Holds the state of an async table load.
///
/// Only the in_progress flag is shared; results come through a channel.
/// Wrapped in an `Arc<Mutex<>>` so the loading thread can clear it.
#[derive(Debug, Default)]
pub struct LoadingState {
    /// True while a table file is being read
    pub in_progress: bool,
}

impl LoadingState {
    pub fn new() -> Self {
        Self::default()
    }
}
