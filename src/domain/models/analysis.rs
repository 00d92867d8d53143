//! Results of prediction, optimization and phase progression analysis.
//!
//! All of these are produced fresh for every evaluation and never stored.

use serde::{Deserialize, Serialize};

use super::thresholds::{CRITICALITY_THRESHOLD, MIN_CIRCULARITY, SUPPLY_RISK_LIMIT};

/// Raw output of a trend model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Predicted absolute emissions at the end of the horizon
    pub predicted_emissions: f64,

    /// Model confidence, clamped to [0, 1] by the predictor
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
}

/// Why a prediction does or does not carry a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionStatus {
    Forecast,
    InsufficientHistory,
    ModelNotAvailable,
}

/// Emissions trend prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub status: PredictionStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_emissions: Option<f64>,

    pub horizon_hours: u32,

    /// Predicted minus current emissions; 0.0 for neutral results
    pub trend: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_direction: Option<TrendDirection>,

    pub confidence: f64,
}

impl PredictionResult {
    /// Neutral result: no trend, no confidence, no direction.
    pub fn neutral(status: PredictionStatus, horizon_hours: u32) -> Self {
        Self {
            status,
            predicted_emissions: None,
            horizon_hours,
            trend: 0.0,
            trend_direction: None,
            confidence: 0.0,
        }
    }

    pub fn is_increasing(&self) -> bool {
        self.trend_direction == Some(TrendDirection::Increasing)
    }
}

/// Limits handed to optimization models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationConstraints {
    pub max_material_intensity: f64,
    pub min_circularity: f64,
    pub max_supply_risk: f64,
}

impl Default for OptimizationConstraints {
    fn default() -> Self {
        Self {
            max_material_intensity: CRITICALITY_THRESHOLD,
            min_circularity: MIN_CIRCULARITY,
            max_supply_risk: SUPPLY_RISK_LIMIT,
        }
    }
}

/// Named optimization lever and its magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationFactor {
    pub name: String,
    pub magnitude: f64,
}

impl OptimizationFactor {
    pub fn new(name: impl Into<String>, magnitude: f64) -> Self {
        Self {
            name: name.into(),
            magnitude,
        }
    }
}

/// Estimated percentage improvements derived from the factor sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImprovementEstimate {
    pub co2_reduction_percentage: f64,
    pub cost_reduction_percentage: f64,
    pub risk_reduction_percentage: f64,
}

/// A successful optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationPlan {
    /// Factors in the order the model produced them
    pub optimization_factors: Vec<OptimizationFactor>,

    pub estimated_improvement: ImprovementEstimate,

    /// Factor names, largest magnitude first
    pub implementation_priority: Vec<String>,

    pub window_hours: u32,
}

/// Resource optimization outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OptimizationResult {
    Optimized(OptimizationPlan),
    ModelNotAvailable,
}

impl OptimizationResult {
    pub fn plan(&self) -> Option<&OptimizationPlan> {
        match self {
            Self::Optimized(plan) => Some(plan),
            Self::ModelNotAvailable => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhaseCompletion {
    Passed,
    Failed,
}

/// Lifecycle gate evaluation for a phase record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionAnalysis {
    pub phase_completion_status: PhaseCompletion,
    pub trl_advancement: u32,
    pub verification_completeness: f64,
    pub next_phase_readiness: bool,
}

/// Lifecycle stage selected from a technology-readiness level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStage {
    /// TRL 3 and below
    Concept,
    /// TRL 4-6
    Design,
    /// TRL 7-9
    Certification,
    /// Above TRL 9
    Operational,
}

impl LifecycleStage {
    /// Tiers are checked in ascending order; the first match wins.
    pub fn from_trl(trl: u32) -> Self {
        if trl <= 3 {
            Self::Concept
        } else if trl <= 6 {
            Self::Design
        } else if trl <= 9 {
            Self::Certification
        } else {
            Self::Operational
        }
    }
}
