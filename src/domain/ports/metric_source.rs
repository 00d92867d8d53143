//! Metric source port - where tick samples come from.

use async_trait::async_trait;

use crate::domain::errors::MonitorResult;
use crate::domain::models::MetricSample;

/// Supplies one sample per monitoring tick.
///
/// An error fails only the current tick; the monitor keeps polling.
#[async_trait]
pub trait MetricSource: Send + Sync {
    /// Source name for logs.
    fn name(&self) -> &str;

    async fn next_sample(&mut self) -> MonitorResult<MetricSample>;
}
