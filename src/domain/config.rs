//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_YEAR};
use crate::domain::filter::{FilterState, RecordType};
use crate::domain::statistic::Year;

/// Environment variable that overrides `api.base_url`
pub const API_URL_ENV: &str = "VITAL_STATS_API_URL";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Statistics API connection
    pub api: ApiConfig,
    /// Dashboard defaults
    pub dashboard: DashboardConfig,
    /// Logging
    pub log: LogConfig,
}

impl AppConfig {
    /// Apply environment overrides on top of the file values
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api.base_url = url;
            }
        }
        self
    }

    /// Filters the dashboard starts with
    pub fn initial_filters(&self) -> FilterState {
        FilterState::default()
            .with_year(self.dashboard.default_year)
            .with_record_type(self.dashboard.default_record_type)
    }
}

/// Statistics API configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL, without trailing slash (e.g., "http://localhost:5000")
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Dashboard defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Year selected on startup
    pub default_year: Year,
    /// Record type selected on startup
    pub default_record_type: RecordType,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_year: DEFAULT_YEAR,
            default_record_type: RecordType::All,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Also write a daily rolling log file in the data directory
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [api]
            base_url = "http://stats.internal:8080"

            [dashboard]
            default_record_type = "obitos"
            "#,
        )
        .expect("parse");

        assert_eq!(config.api.base_url, "http://stats.internal:8080");
        assert_eq!(config.api.timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert_eq!(config.dashboard.default_year, DEFAULT_YEAR);
        assert_eq!(config.dashboard.default_record_type, RecordType::Deaths);
        assert!(config.log.file);
    }

    #[test]
    fn test_initial_filters_follow_config() {
        let mut config = AppConfig::default();
        config.dashboard.default_year = 2020;
        let filters = config.initial_filters();
        assert_eq!(filters.year, 2020);
        assert_eq!(filters.record_type, RecordType::All);
        assert_eq!(filters.region, None);
    }
}
