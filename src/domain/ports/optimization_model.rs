//! Optimization model port - pluggable resource allocation.

use crate::domain::errors::MonitorResult;
use crate::domain::models::{OptimizationConstraints, OptimizationFactor, ResourceMetric};

/// Allocation strategy behind the resource optimizer.
///
/// Returns named factors in a stable order. The optimizer derives
/// improvement estimates and action priority from them, so models only
/// decide magnitudes.
pub trait OptimizationModel: Send + Sync {
    /// Model name for logs.
    fn name(&self) -> &str;

    fn optimize_allocation(
        &self,
        metric: &ResourceMetric,
        constraints: &OptimizationConstraints,
    ) -> MonitorResult<Vec<OptimizationFactor>>;
}
