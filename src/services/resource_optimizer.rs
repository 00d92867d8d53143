//! Resource allocation optimization.
//!
//! Wraps a pluggable [`OptimizationModel`] and derives improvement
//! estimates and action priority from whatever factors it returns.

use std::fmt;
use std::sync::Arc;

use crate::domain::errors::{MonitorError, MonitorResult};
use crate::domain::models::{
    ImprovementEstimate, OptimizationConstraints, OptimizationFactor, OptimizationPlan,
    OptimizationResult, ResourceMetric,
};
use crate::domain::ports::OptimizationModel;

/// Percentage CO2 reduction per unit of factor sum.
const CO2_REDUCTION_SCALE: f64 = 10.0;
/// Percentage cost reduction per unit of factor sum.
const COST_REDUCTION_SCALE: f64 = 5.0;
/// Percentage risk reduction per unit of factor sum.
const RISK_REDUCTION_SCALE: f64 = 15.0;

pub const MATERIAL_SUBSTITUTION: &str = "material_substitution_factor";
pub const CIRCULARITY_IMPROVEMENT: &str = "circularity_improvement";
pub const SUPPLY_RISK_MITIGATION: &str = "supply_risk_mitigation";

#[derive(Clone)]
pub struct ResourceOptimizer {
    model: Option<Arc<dyn OptimizationModel>>,
    constraints: OptimizationConstraints,
    window_hours: u32,
}

impl fmt::Debug for ResourceOptimizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceOptimizer")
            .field("model", &self.model.as_ref().map(|m| m.name().to_string()))
            .field("constraints", &self.constraints)
            .field("window_hours", &self.window_hours)
            .finish()
    }
}

impl ResourceOptimizer {
    pub fn new(model: Arc<dyn OptimizationModel>, window_hours: u32) -> Self {
        Self {
            model: Some(model),
            constraints: OptimizationConstraints::default(),
            window_hours,
        }
    }

    /// An optimizer with no model; every result is `ModelNotAvailable`.
    pub fn unavailable(window_hours: u32) -> Self {
        Self {
            model: None,
            constraints: OptimizationConstraints::default(),
            window_hours,
        }
    }

    pub fn with_constraints(mut self, constraints: OptimizationConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn constraints(&self) -> &OptimizationConstraints {
        &self.constraints
    }

    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }

    pub fn optimize(&self, metric: &ResourceMetric) -> MonitorResult<OptimizationResult> {
        let Some(model) = &self.model else {
            return Ok(OptimizationResult::ModelNotAvailable);
        };

        let factors = model.optimize_allocation(metric, &self.constraints)?;
        if let Some(bad) = factors.iter().find(|f| !f.magnitude.is_finite()) {
            return Err(MonitorError::Model(format!(
                "{} produced a non-finite {}",
                model.name(),
                bad.name
            )));
        }

        Ok(OptimizationResult::Optimized(OptimizationPlan {
            estimated_improvement: estimate_improvement(&factors),
            implementation_priority: prioritize_actions(&factors),
            optimization_factors: factors,
            window_hours: self.window_hours,
        }))
    }
}

/// Fixed linear scales of the factor sum.
pub fn estimate_improvement(factors: &[OptimizationFactor]) -> ImprovementEstimate {
    let total: f64 = factors.iter().map(|f| f.magnitude).sum();
    ImprovementEstimate {
        co2_reduction_percentage: total * CO2_REDUCTION_SCALE,
        cost_reduction_percentage: total * COST_REDUCTION_SCALE,
        risk_reduction_percentage: total * RISK_REDUCTION_SCALE,
    }
}

/// Factor names by descending magnitude; equal magnitudes keep the
/// order the model produced them in.
pub fn prioritize_actions(factors: &[OptimizationFactor]) -> Vec<String> {
    let mut ranked: Vec<&OptimizationFactor> = factors.iter().collect();
    // sort_by is stable, which gives the first-seen tie-break
    ranked.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    ranked.into_iter().map(|f| f.name.clone()).collect()
}

/// Reference heuristic allocation.
///
/// - material substitution: `1 - material_intensity`, floored at 0.1
/// - circularity improvement: half the circularity gap, capped at 0.3
/// - supply risk mitigation: `supply_risk / 100 * 0.2`, floored at 0
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAllocationModel;

impl HeuristicAllocationModel {
    pub fn new() -> Self {
        Self
    }
}

impl OptimizationModel for HeuristicAllocationModel {
    fn name(&self) -> &str {
        "heuristic-allocation"
    }

    fn optimize_allocation(
        &self,
        metric: &ResourceMetric,
        _constraints: &OptimizationConstraints,
    ) -> MonitorResult<Vec<OptimizationFactor>> {
        Ok(vec![
            OptimizationFactor::new(
                MATERIAL_SUBSTITUTION,
                (1.0 - metric.material_intensity).max(0.1),
            ),
            OptimizationFactor::new(
                CIRCULARITY_IMPROVEMENT,
                ((1.0 - metric.circularity) * 0.5).min(0.3),
            ),
            OptimizationFactor::new(
                SUPPLY_RISK_MITIGATION,
                (metric.supply_risk / 100.0 * 0.2).max(0.0),
            ),
        ])
    }
}
