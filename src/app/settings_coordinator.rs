//! Settings persistence coordination.
//!
//! Stores chart preferences as JSON strings in eframe's storage, next to the
//! theme handled by `ThemeCoordinator`.

use crate::state::{ChartKind, DEFAULT_WINDOW_SIZE};
use serde::{Deserialize, Serialize};

pub const CHART_KIND_KEY: &str = "chart_kind";
pub const ROLLING_WINDOW_KEY: &str = "rolling_window";

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, falling back to `T::default()` when the key is
    /// missing or does not deserialize.
    ///
    /// # Examples
    /// ```ignore
    /// let kind: ChartKind = SettingsCoordinator::load_setting(storage, CHART_KIND_KEY);
    /// ```
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        Self::try_load_setting(storage, key).unwrap_or_default()
    }

    /// Loads a setting with a caller-supplied default.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Returns None if the key is missing or its value is not valid JSON for `T`.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(key, error = %e, "ignoring unreadable setting");
                None
            }
        }
    }

    /// Saves a setting as JSON and flushes the storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }

    /// Selected chart and rolling window from the last session.
    pub fn load_chart_preferences(storage: Option<&dyn eframe::Storage>) -> (ChartKind, usize) {
        let kind = Self::load_setting(storage, CHART_KIND_KEY);
        let window = Self::load_setting_or(storage, ROLLING_WINDOW_KEY, DEFAULT_WINDOW_SIZE);
        (kind, window.max(1))
    }

    pub fn save_chart_preferences(storage: &mut dyn eframe::Storage, kind: ChartKind, window_size: usize) {
        Self::save_setting(storage, CHART_KIND_KEY, &kind);
        Self::save_setting(storage, ROLLING_WINDOW_KEY, &window_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_chart_preferences_round_trip() {
        let mut storage = MockStorage::new();
        SettingsCoordinator::save_chart_preferences(&mut storage, ChartKind::RollingAverage, 21);

        let (kind, window) = SettingsCoordinator::load_chart_preferences(Some(&storage));
        assert_eq!(kind, ChartKind::RollingAverage);
        assert_eq!(window, 21);
    }

    #[test]
    fn test_chart_preferences_defaults() {
        let (kind, window) = SettingsCoordinator::load_chart_preferences(None);
        assert_eq!(kind, ChartKind::TimeSeries);
        assert_eq!(window, DEFAULT_WINDOW_SIZE);
    }

    #[test]
    fn test_zero_window_is_raised() {
        let mut storage = MockStorage::new();
        SettingsCoordinator::save_setting(&mut storage, ROLLING_WINDOW_KEY, &0usize);
        let (_, window) = SettingsCoordinator::load_chart_preferences(Some(&storage));
        assert_eq!(window, 1);
    }

    #[test]
    fn test_unreadable_value_falls_back() {
        let mut storage = MockStorage::new();
        eframe::Storage::set_string(&mut storage, CHART_KIND_KEY, "\"Pie\"".to_string());

        let kind: Option<ChartKind> = SettingsCoordinator::try_load_setting(Some(&storage), CHART_KIND_KEY);
        assert_eq!(kind, None);
        let kind: ChartKind = SettingsCoordinator::load_setting(Some(&storage), CHART_KIND_KEY);
        assert_eq!(kind, ChartKind::TimeSeries);
    }
}
