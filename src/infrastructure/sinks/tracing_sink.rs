use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::errors::MonitorResult;
use crate::domain::models::ResultBundle;
use crate::domain::ports::ResultSink;

/// Logs a summary of each bundle at info and the full document at debug.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResultSink for TracingSink {
    async fn emit(&self, bundle: &ResultBundle) -> MonitorResult<()> {
        match bundle {
            ResultBundle::Emissions(report) => info!(
                stream = bundle.stream(),
                severity = bundle.status_label(),
                within_limits = report.safety_status.within_limits,
                absolute_emissions = report.metrics.absolute_emissions,
                prediction = ?report.prediction.status,
                recommendations = report.recommendations.len(),
                "Emissions evaluated"
            ),
            ResultBundle::Resources(report) => info!(
                stream = bundle.stream(),
                status = bundle.status_label(),
                risk_score = report.criticality_status.risk_score,
                indicators = report.criticality_status.critical_indicators.len(),
                optimized = report.optimization.plan().is_some(),
                "Resources evaluated"
            ),
            ResultBundle::Phase(report) => info!(
                stream = bundle.stream(),
                phase_id = %report.phase_data.phase_id,
                trl = report.phase_data.trl,
                readiness = bundle.status_label(),
                "Phase evaluated"
            ),
        }

        debug!(bundle = %serde_json::to_string(bundle)?, "Result bundle");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{
        EmissionMetric, EmissionReport, PredictionResult, PredictionStatus, SafetyStatus, Severity,
    };

    #[tokio::test]
    async fn test_emit_never_fails_for_valid_bundles() {
        let bundle = ResultBundle::Emissions(EmissionReport {
            metrics: EmissionMetric {
                absolute_emissions: 45.2,
                emission_intensity: 89.5,
                well_to_wake_intensity: 42.1,
                abatement_potential: 12.3,
                timestamp_utc: 0,
            },
            safety_status: SafetyStatus {
                within_limits: false,
                current_value: 45.2,
                threshold: 45.0,
                margin_percentage: 10.0,
                severity: Severity::High,
            },
            prediction: PredictionResult::neutral(PredictionStatus::InsufficientHistory, 24),
            recommendations: Vec::new(),
            processing_timestamp: 0,
        });

        assert!(TracingSink::new().emit(&bundle).await.is_ok());
    }
}
