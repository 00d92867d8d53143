use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Json, Serialized, Yaml};
use figment::Figment;
use serde::Serialize;
use thiserror::Error;

use crate::domain::models::config::MonitorConfig;

/// Environment variable prefix for overrides, e.g.
/// `SUSTAIN_MONITOR_SAFETY_MARGINS__CO2_MARGIN=0.2`.
pub const ENV_PREFIX: &str = "SUSTAIN_MONITOR_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported config file extension: {}. Expected .json, .yaml or .yml", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] Box<figment::Error>),

    #[error("Invalid monitoring_interval_ms: {0}. Must be positive")]
    InvalidInterval(u64),

    #[error("Invalid {name}: {value}. Must be in [0, 1)")]
    InvalidMargin { name: &'static str, value: f64 },

    #[error("Invalid worker count: {0}. Must be at least 1")]
    InvalidWorkers(usize),

    #[error("Invalid task_timeout_ms: {0}. Must be positive")]
    InvalidTaskTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfigSource {
    /// Defaults plus environment overrides, no file requested
    Environment,
    /// Defaults merged with this file and environment overrides
    File { path: PathBuf },
    /// Loading failed; the complete default set is in effect
    Defaults { reason: String },
}

impl ConfigSource {
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Defaults { .. })
    }
}

/// Result of [`ConfigLoader::load`].
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: MonitorConfig,
    pub source: ConfigSource,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration, falling back to defaults on any failure.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. The given file, JSON or YAML by extension
    /// 3. Environment variables (`SUSTAIN_MONITOR_*`, `__` nests)
    ///
    /// Nothing is logged here since logging is configured from the
    /// result; callers report `source` once the subscriber is up.
    pub fn load(path: Option<&Path>) -> LoadedConfig {
        match Self::try_load(path) {
            Ok(config) => LoadedConfig {
                config,
                source: path.map_or(ConfigSource::Environment, |path| ConfigSource::File {
                    path: path.to_path_buf(),
                }),
            },
            Err(err) => LoadedConfig {
                config: MonitorConfig::default(),
                source: ConfigSource::Defaults {
                    reason: err.to_string(),
                },
            },
        }
    }

    /// Load and validate without the defaults fallback.
    pub fn try_load(path: Option<&Path>) -> Result<MonitorConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(MonitorConfig::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("json") => figment.merge(Json::file(path)),
                Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
                _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
            };
        }

        let config: MonitorConfig = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &MonitorConfig) -> Result<(), ConfigError> {
        if config.monitoring_interval_ms == 0 {
            return Err(ConfigError::InvalidInterval(config.monitoring_interval_ms));
        }

        let margins = [
            ("co2_margin", config.safety_margins.co2_margin),
            ("resource_margin", config.safety_margins.resource_margin),
        ];
        for (name, value) in margins {
            if !(0.0..1.0).contains(&value) {
                return Err(ConfigError::InvalidMargin { name, value });
            }
        }

        if config.worker_pool.workers == 0 {
            return Err(ConfigError::InvalidWorkers(config.worker_pool.workers));
        }
        if config.worker_pool.task_timeout_ms == 0 {
            return Err(ConfigError::InvalidTaskTimeout(
                config.worker_pool.task_timeout_ms,
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}
