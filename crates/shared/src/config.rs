//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Report configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    /// JSON dataset to read fiscal years and orders from.
    ///
    /// When unset the built-in sample dataset is used.
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,
    /// Reference year of the three-year window.
    ///
    /// When unset the current open fiscal year is used.
    #[serde(default)]
    pub reference_year: Option<i32>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Default `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON log lines instead of the human-readable format.
    #[serde(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_log_filter() -> String {
    "gfc=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest precedence first: `config/default`, `config/{RUN_MODE}`,
    /// then `GFC__`-prefixed environment variables (`GFC__REPORT__REFERENCE_YEAR`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("GFC").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 4] = [
        "GFC__REPORT__REFERENCE_YEAR",
        "GFC__REPORT__DATASET_PATH",
        "GFC__LOG__FILTER",
        "RUN_MODE",
    ];

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars_unset(VARS, || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.report.reference_year, None);
            assert_eq!(config.report.dataset_path, None);
            assert_eq!(config.log.filter, "gfc=info");
            assert!(!config.log.json);
        });
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("GFC__REPORT__REFERENCE_YEAR", Some("2022")),
                ("GFC__REPORT__DATASET_PATH", Some("/tmp/orders.json")),
                ("GFC__LOG__FILTER", Some("gfc=debug")),
                ("RUN_MODE", None),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.report.reference_year, Some(2022));
                assert_eq!(
                    config.report.dataset_path,
                    Some(PathBuf::from("/tmp/orders.json"))
                );
                assert_eq!(config.log.filter, "gfc=debug");
            },
        );
    }

    #[test]
    fn test_invalid_reference_year_is_rejected() {
        temp_env::with_vars(
            [
                ("GFC__REPORT__REFERENCE_YEAR", Some("last-year")),
                ("RUN_MODE", None),
            ],
            || {
                assert!(AppConfig::load().is_err());
            },
        );
    }
}
