//! Utility modules for the sentiplot viewer.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_count, format_date_range, format_memory_mb, get_current_memory_mb};
