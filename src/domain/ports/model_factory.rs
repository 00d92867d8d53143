//! Model factory port.

use std::sync::Arc;

use super::{OptimizationModel, TrendModel};
use crate::domain::errors::MonitorResult;

/// Builds the pluggable models at monitor startup.
///
/// A construction error is fatal: the monitor refuses to start.
pub trait ModelFactory: Send + Sync {
    fn create_trend_model(&self) -> MonitorResult<Arc<dyn TrendModel>>;

    fn create_optimization_model(&self) -> MonitorResult<Arc<dyn OptimizationModel>>;
}
