//! Infrastructure layer module
//!
//! Adapters around the monitor core:
//! - Configuration management (figment)
//! - Logging bootstrap (tracing)
//! - Result sinks
//! - Document-name validation and front-matter templates

pub mod config;
pub mod logging;
pub mod sinks;
pub mod templates;
pub mod validators;
