//! Domain layer for the sustainability monitor
//!
//! Typed telemetry records, derived results, errors, and the ports that
//! pluggable models and I/O collaborators implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{MonitorError, MonitorResult, WorkerError};
