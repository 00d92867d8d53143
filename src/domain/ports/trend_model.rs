//! Trend model port - pluggable emissions forecasting.

use crate::domain::errors::MonitorResult;
use crate::domain::models::{EmissionMetric, Forecast};

/// Forecasting strategy behind the trend predictor.
///
/// Implementations are CPU-bound and synchronous; the orchestrator runs
/// them on the worker pool. The window is a copied snapshot of recent
/// history, oldest first, and always holds at least the predictor's
/// minimum history when the model is invoked.
pub trait TrendModel: Send + Sync {
    /// Model name for logs.
    fn name(&self) -> &str;

    /// Forecast absolute emissions `horizon_hours` ahead.
    fn forecast(&self, window: &[EmissionMetric], horizon_hours: u32) -> MonitorResult<Forecast>;
}
