//! Bounded offload pool for CPU-bound model work.
//!
//! Jobs run on tokio's blocking thread pool, but at most `workers` of them
//! at a time: each job holds an owned semaphore permit until it finishes,
//! including jobs whose caller already gave up on them after a timeout.
//! Draining the pool therefore means acquiring every permit.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::domain::errors::WorkerError;
use crate::domain::models::WorkerPoolConfig;

const MAX_WORKERS: usize = 256;

#[derive(Debug, Clone)]
pub struct WorkerPool {
    permits: Arc<Semaphore>,
    workers: usize,
    task_timeout: Duration,
}

impl WorkerPool {
    pub fn new(config: &WorkerPoolConfig) -> Self {
        Self::with_limits(config.workers, config.task_timeout())
    }

    /// Create a pool with `workers` slots (clamped to 1..=256).
    pub fn with_limits(workers: usize, task_timeout: Duration) -> Self {
        let workers = workers.clamp(1, MAX_WORKERS);
        Self {
            permits: Arc::new(Semaphore::new(workers)),
            workers,
            task_timeout,
        }
    }

    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// Slots not currently held by a running job.
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Run `job` off the async scheduler and await its result.
    ///
    /// Waits for a free slot first. The wait for the result is bounded by the
    /// task timeout; a timed-out job keeps its slot until it actually returns.
    pub async fn submit<F, R>(&self, job: F) -> Result<R, WorkerError>
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| WorkerError::Closed)?;

        let handle = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            job()
        });

        match tokio::time::timeout(self.task_timeout, handle).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(join_err)) => Err(WorkerError::Panicked(join_err.to_string())),
            Err(_) => {
                warn!(
                    timeout_ms = self.task_timeout.as_millis(),
                    "Offloaded task timed out"
                );
                Err(WorkerError::Timeout(self.task_timeout))
            }
        }
    }

    /// Wait for all in-flight jobs to finish, then close the pool.
    ///
    /// Later submissions fail with [`WorkerError::Closed`]. Returns
    /// [`WorkerError::Timeout`] if jobs are still running after `timeout`;
    /// the pool is closed either way.
    pub async fn drain(&self, timeout: Duration) -> Result<(), WorkerError> {
        let all = u32::try_from(self.workers).unwrap_or(u32::MAX);
        let result = tokio::time::timeout(timeout, self.permits.acquire_many(all)).await;
        self.permits.close();

        match result {
            Ok(Ok(_permits)) => {
                debug!(workers = self.workers, "Worker pool drained");
                Ok(())
            }
            Ok(Err(_)) => Err(WorkerError::Closed),
            Err(_) => Err(WorkerError::Timeout(timeout)),
        }
    }
}
