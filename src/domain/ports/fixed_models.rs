//! Deterministic model doubles.
//!
//! Used by tests and dry runs where reproducible output matters more than
//! forecasting quality.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::{ModelFactory, OptimizationModel, TrendModel};
use crate::domain::errors::{MonitorError, MonitorResult};
use crate::domain::models::{
    EmissionMetric, Forecast, OptimizationConstraints, OptimizationFactor, ResourceMetric,
};

/// Trend model that always returns the same forecast (or error).
#[derive(Debug)]
pub struct FixedTrendModel {
    outcome: Result<Forecast, String>,
    calls: AtomicUsize,
}

impl FixedTrendModel {
    pub fn new(predicted_emissions: f64, confidence: f64) -> Self {
        Self {
            outcome: Ok(Forecast {
                predicted_emissions,
                confidence,
            }),
            calls: AtomicUsize::new(0),
        }
    }

    /// A model whose every forecast fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `forecast` has been invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Acquire)
    }
}

impl TrendModel for FixedTrendModel {
    fn name(&self) -> &str {
        "fixed-trend"
    }

    fn forecast(&self, _window: &[EmissionMetric], _horizon_hours: u32) -> MonitorResult<Forecast> {
        self.calls.fetch_add(1, Ordering::AcqRel);
        self.outcome.clone().map_err(MonitorError::Model)
    }
}

/// Optimization model that always returns the same factors.
#[derive(Debug, Clone)]
pub struct FixedOptimizationModel {
    factors: Vec<OptimizationFactor>,
}

impl FixedOptimizationModel {
    pub fn new(factors: Vec<OptimizationFactor>) -> Self {
        Self { factors }
    }
}

impl OptimizationModel for FixedOptimizationModel {
    fn name(&self) -> &str {
        "fixed-optimization"
    }

    fn optimize_allocation(
        &self,
        _metric: &ResourceMetric,
        _constraints: &OptimizationConstraints,
    ) -> MonitorResult<Vec<OptimizationFactor>> {
        Ok(self.factors.clone())
    }
}

/// Factory handing out shared fixed models, or refusing to build any.
#[derive(Debug, Clone)]
pub struct FixedModelFactory {
    trend: Arc<FixedTrendModel>,
    optimization: Arc<FixedOptimizationModel>,
    failure: Option<String>,
}

impl FixedModelFactory {
    pub fn new(trend: Arc<FixedTrendModel>, optimization: Arc<FixedOptimizationModel>) -> Self {
        Self {
            trend,
            optimization,
            failure: None,
        }
    }

    /// A factory whose trend model construction fails.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            trend: Arc::new(FixedTrendModel::new(0.0, 0.0)),
            optimization: Arc::new(FixedOptimizationModel::new(Vec::new())),
            failure: Some(reason.into()),
        }
    }
}

impl ModelFactory for FixedModelFactory {
    fn create_trend_model(&self) -> MonitorResult<Arc<dyn TrendModel>> {
        if let Some(reason) = &self.failure {
            return Err(MonitorError::model_init("trend", reason.clone()));
        }
        Ok(self.trend.clone())
    }

    fn create_optimization_model(&self) -> MonitorResult<Arc<dyn OptimizationModel>> {
        Ok(self.optimization.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_trend_counts_calls() {
        let model = FixedTrendModel::new(48.0, 0.9);
        assert_eq!(model.calls(), 0);

        let forecast = model.forecast(&[], 24).unwrap();
        assert!((forecast.predicted_emissions - 48.0).abs() < f64::EPSILON);
        assert_eq!(model.calls(), 1);
    }

    #[test]
    fn test_failing_trend_model() {
        let model = FixedTrendModel::failing("diverged");
        let err = model.forecast(&[], 24).unwrap_err();
        assert!(matches!(err, MonitorError::Model(reason) if reason == "diverged"));
    }

    #[test]
    fn test_failing_factory_reports_model_init() {
        let factory = FixedModelFactory::failing("no weights");
        let err = factory.create_trend_model().err().expect("should fail");
        assert!(err.is_fatal());
    }
}
