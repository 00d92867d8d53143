//! Domain errors for the sustainability monitor.

use std::time::Duration;
use thiserror::Error;

/// Errors raised while initializing or running the monitor.
///
/// Only `ModelInit` is fatal. Everything raised inside a tick is caught at
/// the orchestrator boundary, logged, and followed by a backoff.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Failed to initialize {model} model: {reason}")]
    ModelInit { model: &'static str, reason: String },

    #[error("Tick {tick} failed: {reason}")]
    Tick { tick: u64, reason: String },

    #[error("Model evaluation failed: {0}")]
    Model(String),

    #[error("Metric source error: {0}")]
    Source(String),

    #[error("Result sink error: {0}")]
    Sink(String),

    #[error("Worker pool error: {0}")]
    Worker(#[from] WorkerError),
}

impl MonitorError {
    pub fn model_init(model: &'static str, reason: impl Into<String>) -> Self {
        Self::ModelInit {
            model,
            reason: reason.into(),
        }
    }

    /// Fatal errors abort startup; all others are absorbed by the run loop.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::ModelInit { .. })
    }
}

pub type MonitorResult<T> = Result<T, MonitorError>;

/// Failures of offloaded work.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkerError {
    #[error("Offloaded task exceeded {0:?}")]
    Timeout(Duration),

    #[error("Offloaded task panicked: {0}")]
    Panicked(String),

    #[error("Worker pool is closed")]
    Closed,
}

impl From<serde_json::Error> for MonitorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Sink(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_model_init_is_fatal() {
        assert!(MonitorError::model_init("trend", "weights missing").is_fatal());
        assert!(!MonitorError::Source("offline".to_string()).is_fatal());
        assert!(!MonitorError::Model("diverged".to_string()).is_fatal());
        assert!(!MonitorError::Worker(WorkerError::Closed).is_fatal());
    }

    #[test]
    fn test_error_messages() {
        let err = MonitorError::model_init("trend", "weights missing");
        assert_eq!(
            err.to_string(),
            "Failed to initialize trend model: weights missing"
        );

        let err = MonitorError::Tick {
            tick: 7,
            reason: "sink closed".to_string(),
        };
        assert_eq!(err.to_string(), "Tick 7 failed: sink closed");
    }
}
