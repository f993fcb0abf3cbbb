//! Configuration for the harness

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound on the worker pool size
pub const MAX_WORKERS: usize = 256;

/// Configuration for a harness run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Directory fixture identifiers are resolved against
    #[serde(default = "default_fixture_root")]
    pub fixture_root: PathBuf,

    /// Number of entries evaluated at once (0 or 1 runs sequentially)
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Log every entry outcome at info level instead of debug
    #[serde(default)]
    pub log_entries: bool,
}

fn default_fixture_root() -> PathBuf {
    PathBuf::from("test-files/comparison")
}

fn default_workers() -> usize {
    1
}

impl HarnessConfig {
    /// Whether entries should be spread over a worker pool
    pub fn is_concurrent(&self) -> bool {
        self.workers > 1
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.fixture_root.as_os_str().is_empty() {
            return Err("fixture_root must not be empty".to_string());
        }
        if self.workers > MAX_WORKERS {
            return Err(format!("workers cannot exceed {}", MAX_WORKERS));
        }
        Ok(())
    }

    /// Parallel preset: one worker per available core
    pub fn parallel() -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .min(MAX_WORKERS);
        Self {
            workers,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for HarnessConfig {
    /// Sequential run over `test-files/comparison`
    fn default() -> Self {
        Self {
            fixture_root: default_fixture_root(),
            workers: default_workers(),
            log_entries: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = HarnessConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.is_concurrent());
    }

    #[test]
    fn test_parallel_config_is_valid() {
        let config = HarnessConfig::parallel();
        assert!(config.validate().is_ok());
        assert!(config.workers >= 1);
    }

    #[test]
    fn test_invalid_fixture_root() {
        let mut config = HarnessConfig::default();
        config.fixture_root = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_worker_count() {
        let mut config = HarnessConfig::default();
        config.workers = MAX_WORKERS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = HarnessConfig::from_toml("workers = 4").unwrap();
        assert_eq!(config.workers, 4);
        assert_eq!(config.fixture_root, PathBuf::from("test-files/comparison"));
        assert!(!config.log_entries);
        assert!(config.is_concurrent());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = HarnessConfig::default();
        config.fixture_root = PathBuf::from("/data/fixtures");
        config.log_entries = true;

        let toml_str = config.to_toml().unwrap();
        let parsed = HarnessConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.fixture_root, parsed.fixture_root);
        assert_eq!(config.workers, parsed.workers);
        assert_eq!(config.log_entries, parsed.log_entries);
    }
}
