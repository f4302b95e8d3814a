//! Monitor configuration loaded from TOML.

use crate::core::InitialEvent;
use crate::error::{GeofenceError, Result};
use crate::registry::Fence;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete monitor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    #[serde(default)]
    pub fences: Vec<Fence>,
    /// Consecutive agreeing samples before a transition commits
    #[serde(default = "default_debounce_samples")]
    pub debounce_samples: u32,
    #[serde(default)]
    pub initial_event: InitialEvent,
    /// Handed to the position source unchanged; the monitor ignores it
    #[serde(default)]
    pub source: SourceOptions,
}

fn default_debounce_samples() -> u32 {
    1
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            fences: Vec::new(),
            debounce_samples: default_debounce_samples(),
            initial_event: InitialEvent::default(),
            source: SourceOptions::default(),
        }
    }
}

impl MonitorConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| GeofenceError::Config(e.to_string()))
    }
}

/// Location watch options for the position source adapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceOptions {
    #[serde(default)]
    pub high_accuracy: bool,
    /// Minimum movement before the source reports a new fix
    #[serde(default = "default_distance_filter")]
    pub distance_filter_meters: f64,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    #[serde(default = "default_fastest_interval_ms")]
    pub fastest_interval_ms: u64,
}

fn default_distance_filter() -> f64 {
    100.0
}

fn default_interval_ms() -> u64 {
    10_000
}

fn default_fastest_interval_ms() -> u64 {
    5_000
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            high_accuracy: false,
            distance_filter_meters: default_distance_filter(),
            interval_ms: default_interval_ms(),
            fastest_interval_ms: default_fastest_interval_ms(),
        }
    }
}

/// Load configuration from TOML file
pub fn load_config(path: impl AsRef<Path>) -> Result<MonitorConfig> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| GeofenceError::Config(format!("{}: {e}", path.display())))?;
    MonitorConfig::from_toml(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MonitorConfig::default();
        assert!(config.fences.is_empty());
        assert_eq!(config.debounce_samples, 1);
        assert_eq!(config.initial_event, InitialEvent::Suppress);
        assert!(!config.source.high_accuracy);
        assert_eq!(config.source.distance_filter_meters, 100.0);
        assert_eq!(config.source.interval_ms, 10_000);
        assert_eq!(config.source.fastest_interval_ms, 5_000);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = MonitorConfig::from_toml("").unwrap();
        assert_eq!(config, MonitorConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let toml_str = r#"
            debounce_samples = 3
            initial_event = "emit"

            [source]
            high_accuracy = true
            interval_ms = 2000

            [[fences]]
            id = "1"
            center = { latitude = 6.605874, longitude = 3.349149 }
            radius_meters = 100.0

            [[fences]]
            id = "2"
            center = { latitude = 6.623205, longitude = -122.084 }
            radius_meters = 250.0
        "#;

        let config = MonitorConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.debounce_samples, 3);
        assert_eq!(config.initial_event, InitialEvent::Emit);
        assert!(config.source.high_accuracy);
        assert_eq!(config.source.interval_ms, 2000);
        assert_eq!(config.source.fastest_interval_ms, 5_000);
        assert_eq!(config.fences.len(), 2);
        assert_eq!(config.fences[1].id, "2");
        assert_eq!(config.fences[1].radius_meters, 250.0);
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let result = MonitorConfig::from_toml("debounce_samples = \"many\"");
        assert!(matches!(result, Err(GeofenceError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = load_config("/nonexistent/geofences.toml");
        assert!(matches!(result, Err(GeofenceError::Config(_))));
    }
}
