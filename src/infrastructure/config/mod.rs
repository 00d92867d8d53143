//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - JSON or YAML file loading
//! - Environment variable overrides
//! - Configuration validation with a defaults fallback

pub mod loader;

pub use loader::{ConfigError, ConfigLoader, ConfigSource, LoadedConfig, ENV_PREFIX};
