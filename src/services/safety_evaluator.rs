//! Emissions safety evaluation.

use crate::domain::models::thresholds::CO2_CEILING;
use crate::domain::models::{EmissionMetric, SafetyMargins, SafetyStatus, Severity};

/// Checks emissions against the operational ceiling.
///
/// `within_limits` uses the margin-tightened threshold while `severity`
/// uses the raw ceiling, so a reading between the two is out of limits
/// yet still NORMAL severity.
#[derive(Debug, Clone, Copy)]
pub struct SafetyEvaluator {
    ceiling: f64,
    margin: f64,
}

impl SafetyEvaluator {
    pub fn new(margins: &SafetyMargins) -> Self {
        Self::with_ceiling(CO2_CEILING, margins.co2_margin)
    }

    pub fn with_ceiling(ceiling: f64, margin: f64) -> Self {
        Self { ceiling, margin }
    }

    pub fn threshold_with_margin(&self) -> f64 {
        self.ceiling * (1.0 - self.margin)
    }

    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    pub fn evaluate(&self, metric: &EmissionMetric) -> SafetyStatus {
        let threshold = self.threshold_with_margin();
        let severity = if metric.absolute_emissions > self.ceiling {
            Severity::High
        } else {
            Severity::Normal
        };

        SafetyStatus {
            within_limits: metric.absolute_emissions <= threshold,
            current_value: metric.absolute_emissions,
            threshold,
            margin_percentage: self.margin * 100.0,
            severity,
        }
    }
}
