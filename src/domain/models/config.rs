use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure for the sustainability monitor
///
/// Loaded once at startup and shared read-only (behind an `Arc`) for the
/// lifetime of the process. Every field has a default so a partial
/// document, or no document at all, still yields a complete config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MonitorConfig {
    /// Interval between monitoring ticks in milliseconds
    #[serde(default = "default_monitoring_interval_ms")]
    pub monitoring_interval_ms: u64,

    /// How far ahead trend predictions look, in hours
    #[serde(default = "default_prediction_horizon_hours")]
    pub prediction_horizon_hours: u32,

    /// Window the resource optimizer plans over, in hours
    #[serde(default = "default_optimization_window_hours")]
    pub optimization_window_hours: u32,

    /// Fractional safety buffers applied to fixed thresholds
    #[serde(default)]
    pub safety_margins: SafetyMargins,

    /// Pause after a failed tick in milliseconds
    #[serde(default = "default_error_backoff_ms")]
    pub error_backoff_ms: u64,

    /// Upper bound on draining in-flight work at shutdown, in milliseconds
    #[serde(default = "default_shutdown_timeout_ms")]
    pub shutdown_timeout_ms: u64,

    /// Offload pool configuration
    #[serde(default)]
    pub worker_pool: WorkerPoolConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

const fn default_monitoring_interval_ms() -> u64 {
    100
}

const fn default_prediction_horizon_hours() -> u32 {
    24
}

const fn default_optimization_window_hours() -> u32 {
    4
}

const fn default_error_backoff_ms() -> u64 {
    1000
}

const fn default_shutdown_timeout_ms() -> u64 {
    5000
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            monitoring_interval_ms: default_monitoring_interval_ms(),
            prediction_horizon_hours: default_prediction_horizon_hours(),
            optimization_window_hours: default_optimization_window_hours(),
            safety_margins: SafetyMargins::default(),
            error_backoff_ms: default_error_backoff_ms(),
            shutdown_timeout_ms: default_shutdown_timeout_ms(),
            worker_pool: WorkerPoolConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl MonitorConfig {
    pub const fn monitoring_interval(&self) -> Duration {
        Duration::from_millis(self.monitoring_interval_ms)
    }

    pub const fn error_backoff(&self) -> Duration {
        Duration::from_millis(self.error_backoff_ms)
    }

    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.shutdown_timeout_ms)
    }
}

/// Safety margins, as fractions of the raw threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SafetyMargins {
    /// Tightens the emissions ceiling: `ceiling * (1 - co2_margin)`
    #[serde(default = "default_co2_margin")]
    pub co2_margin: f64,

    /// Relaxes the criticality threshold: `threshold * (1 + resource_margin)`
    #[serde(default = "default_resource_margin")]
    pub resource_margin: f64,
}

const fn default_co2_margin() -> f64 {
    0.1
}

const fn default_resource_margin() -> f64 {
    0.15
}

impl Default for SafetyMargins {
    fn default() -> Self {
        Self {
            co2_margin: default_co2_margin(),
            resource_margin: default_resource_margin(),
        }
    }
}

/// Worker pool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WorkerPoolConfig {
    /// Number of concurrent offloaded computations
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Per-task timeout in milliseconds
    #[serde(default = "default_task_timeout_ms")]
    pub task_timeout_ms: u64,
}

const fn default_workers() -> usize {
    4
}

const fn default_task_timeout_ms() -> u64 {
    5000
}

impl Default for WorkerPoolConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            task_timeout_ms: default_task_timeout_ms(),
        }
    }
}

impl WorkerPoolConfig {
    pub const fn task_timeout(&self) -> Duration {
        Duration::from_millis(self.task_timeout_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default)]
    pub format: LogFormat,

    /// Directory for rotated JSON log files (stdout only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Rotation policy for file output
    #[serde(default)]
    pub rotation: RotationPolicy,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            log_dir: None,
            rotation: RotationPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    #[default]
    Daily,
    Hourly,
    Never,
}
