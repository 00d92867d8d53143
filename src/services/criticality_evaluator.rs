//! Resource criticality evaluation.

use crate::domain::models::thresholds::{
    CRITICALITY_THRESHOLD, MIN_CIRCULARITY, RISK_WEIGHT_CIRCULARITY, RISK_WEIGHT_MATERIAL,
    RISK_WEIGHT_SUPPLY, SUPPLY_RISK_LIMIT,
};
use crate::domain::models::{
    CriticalityFlag, CriticalityLevel, CriticalityStatus, ResourceMetric, SafetyMargins,
};

/// Flags critical-material, supply-chain and circularity risks.
#[derive(Debug, Clone, Copy)]
pub struct CriticalityEvaluator {
    threshold: f64,
    margin: f64,
}

impl CriticalityEvaluator {
    pub fn new(margins: &SafetyMargins) -> Self {
        Self {
            threshold: CRITICALITY_THRESHOLD,
            margin: margins.resource_margin,
        }
    }

    /// Material-intensity threshold relaxed by the resource margin.
    pub fn threshold_with_margin(&self) -> f64 {
        self.threshold * (1.0 + self.margin)
    }

    pub fn evaluate(&self, metric: &ResourceMetric) -> CriticalityStatus {
        let mut critical_indicators = Vec::with_capacity(3);

        if metric.material_intensity > self.threshold_with_margin() {
            critical_indicators.push(CriticalityFlag::HighMaterialIntensity);
        }
        if metric.supply_risk > SUPPLY_RISK_LIMIT {
            critical_indicators.push(CriticalityFlag::SupplyChainRisk);
        }
        if metric.circularity < MIN_CIRCULARITY {
            critical_indicators.push(CriticalityFlag::LowCircularity);
        }

        let overall_status = if critical_indicators.is_empty() {
            CriticalityLevel::Normal
        } else {
            CriticalityLevel::Critical
        };

        CriticalityStatus {
            critical_indicators,
            overall_status,
            risk_score: risk_score(metric),
        }
    }
}

/// Weighted risk score clamped to [0, 1].
///
/// Non-finite inputs score as maximum risk.
pub fn risk_score(metric: &ResourceMetric) -> f64 {
    let score = RISK_WEIGHT_MATERIAL * metric.material_intensity
        + RISK_WEIGHT_SUPPLY * (metric.supply_risk / 100.0)
        + RISK_WEIGHT_CIRCULARITY * (1.0 - metric.circularity);

    if score.is_nan() {
        return 1.0;
    }
    score.clamp(0.0, 1.0)
}
