//! In-memory result sink.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::ResultSink;
use crate::domain::errors::{MonitorError, MonitorResult};
use crate::domain::models::ResultBundle;

/// Keeps every emitted bundle in memory, optionally rejecting some.
#[derive(Debug, Default)]
pub struct CollectingSink {
    bundles: Mutex<Vec<ResultBundle>>,
    reject_remaining: Mutex<u32>,
    reject_attempt: Option<usize>,
    attempts: AtomicUsize,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the next `count` emissions with a sink error.
    pub fn rejecting(count: u32) -> Self {
        Self {
            bundles: Mutex::new(Vec::new()),
            reject_remaining: Mutex::new(count),
            ..Self::default()
        }
    }

    /// Reject only the `attempt`-th emission (1-based).
    pub fn rejecting_attempt(attempt: usize) -> Self {
        Self {
            reject_attempt: Some(attempt),
            ..Self::default()
        }
    }

    pub async fn bundles(&self) -> Vec<ResultBundle> {
        self.bundles.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.bundles.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.bundles.lock().await.is_empty()
    }
}

#[async_trait]
impl ResultSink for CollectingSink {
    async fn emit(&self, bundle: &ResultBundle) -> MonitorResult<()> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if self.reject_attempt == Some(attempt) {
            return Err(MonitorError::Sink(format!("sink rejected bundle {attempt}")));
        }
        {
            let mut remaining = self.reject_remaining.lock().await;
            if *remaining > 0 {
                *remaining -= 1;
                return Err(MonitorError::Sink("sink rejected bundle".to_string()));
            }
        }
        self.bundles.lock().await.push(bundle.clone());
        Ok(())
    }
}
