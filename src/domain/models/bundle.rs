//! Result bundles handed to output collaborators.

use serde::{Deserialize, Serialize};

use super::analysis::{OptimizationResult, PredictionResult, ProgressionAnalysis};
use super::metrics::{EmissionMetric, PhaseRecord, ResourceMetric};
use super::status::{CriticalityStatus, SafetyStatus};

/// Processed emissions sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionReport {
    pub metrics: EmissionMetric,
    pub safety_status: SafetyStatus,
    pub prediction: PredictionResult,
    pub recommendations: Vec<String>,
    pub processing_timestamp: i64,
}

/// Processed resource sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceReport {
    pub metrics: ResourceMetric,
    pub criticality_status: CriticalityStatus,
    pub optimization: OptimizationResult,
    pub processing_timestamp: i64,
}

/// Processed lifecycle phase record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseReport {
    pub phase_data: PhaseRecord,
    pub progression_analysis: ProgressionAnalysis,
    pub recommendations: Vec<String>,
    pub processing_timestamp: i64,
}

/// One emitted record per processed metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stream", rename_all = "snake_case")]
pub enum ResultBundle {
    Emissions(EmissionReport),
    Resources(ResourceReport),
    Phase(PhaseReport),
}

impl ResultBundle {
    pub fn stream(&self) -> &'static str {
        match self {
            Self::Emissions(_) => "emissions",
            Self::Resources(_) => "resources",
            Self::Phase(_) => "phase",
        }
    }

    pub fn processing_timestamp(&self) -> i64 {
        match self {
            Self::Emissions(report) => report.processing_timestamp,
            Self::Resources(report) => report.processing_timestamp,
            Self::Phase(report) => report.processing_timestamp,
        }
    }

    /// Short status label: severity, criticality, or phase completion.
    pub fn status_label(&self) -> &'static str {
        match self {
            Self::Emissions(report) => report.safety_status.severity.as_str(),
            Self::Resources(report) => report.criticality_status.overall_status.as_str(),
            Self::Phase(report) => {
                if report.progression_analysis.next_phase_readiness {
                    "READY"
                } else {
                    "NOT_READY"
                }
            }
        }
    }
}
