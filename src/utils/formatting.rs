//! Text formatting utilities for the status bar.

use chrono::NaiveDate;
use sentiplot::render::ticks::format_date;
use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

/// Formats a count with thousands separators.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_count(1000), "1,000");
/// assert_eq!(format_count(1234567), "1,234,567");
/// ```
pub fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// Formats an inclusive date range, e.g. `2024-01-01 .. 2024-06-28 (180 days)`.
pub fn format_date_range(first: NaiveDate, last: NaiveDate) -> String {
    let days = (last - first).num_days() + 1;
    format!("{} .. {} ({} days)", format_date(first), format_date(last), days)
}

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory())
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    if let Some(process) = sys.process(Pid::from_u32(std::process::id())) {
        process.memory() as f64 / (1024.0 * 1024.0)
    } else {
        0.0
    }
}

/// Formats memory usage in MB as a human-readable string.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_memory_mb(512.5), "Memory: 512.5 MB");
/// assert_eq!(format_memory_mb(2048.0), "Memory: 2.00 GB");
/// ```
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_format_date_range() {
        let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(format_date_range(first, last), "2024-01-01 .. 2024-01-31 (31 days)");
        assert_eq!(format_date_range(first, first), "2024-01-01 .. 2024-01-01 (1 days)");
    }

    #[test]
    fn test_format_memory_mb() {
        assert_eq!(format_memory_mb(512.5), "Memory: 512.5 MB");
        assert_eq!(format_memory_mb(2048.0), "Memory: 2.00 GB");
    }
}
