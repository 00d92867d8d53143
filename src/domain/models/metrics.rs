//! Telemetry records ingested by the monitor.
//!
//! All three record types are plain values: they are created once by a
//! metric source and never mutated afterwards. Buffers hand out clones.

use serde::{Deserialize, Serialize};

/// Emissions reading for one monitoring interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionMetric {
    /// Absolute emissions (tCO2 per interval)
    pub absolute_emissions: f64,

    /// Emission intensity (gCO2 per revenue-passenger-km)
    pub emission_intensity: f64,

    /// Well-to-wake intensity (gCO2e per MJ)
    pub well_to_wake_intensity: f64,

    /// Abatement potential (percentage)
    pub abatement_potential: f64,

    /// Capture time, epoch seconds
    pub timestamp_utc: i64,
}

impl EmissionMetric {
    /// Number of model features extracted per sample.
    pub const FEATURES: usize = 3;

    /// Feature vector consumed by trend models.
    pub fn features(&self) -> [f64; Self::FEATURES] {
        [
            self.absolute_emissions,
            self.emission_intensity,
            self.well_to_wake_intensity,
        ]
    }
}

/// Resource-criticality reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceMetric {
    /// Critical-material intensity (weighted kg per functional unit)
    pub material_intensity: f64,

    /// Circularity indicator, 0.0-1.0
    pub circularity: f64,

    /// Supply-chain risk index, 0-100
    pub supply_risk: f64,

    /// Resource efficiency index (percentage)
    pub efficiency_index: f64,

    /// Capture time, epoch seconds
    pub timestamp_utc: i64,
}

/// Result of a lifecycle-phase verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseRecord {
    /// Lifecycle phase identifier
    pub phase_id: String,

    /// Technology-readiness level (1-9, higher for operational phases)
    pub trl: u32,

    /// How the phase was verified (test, analysis, inspection, ...)
    pub verification_method: String,

    /// Reference to the validation report
    pub validation_report: String,

    /// Whether verification passed
    pub passed: bool,

    /// Validation coverage percentage, 0-100
    pub coverage_percentage: Option<f64>,

    /// Capture time, epoch seconds
    pub timestamp_utc: i64,
}

impl PhaseRecord {
    /// Coverage with an absent value treated as zero.
    pub fn coverage_or_zero(&self) -> f64 {
        self.coverage_percentage.unwrap_or(0.0)
    }
}

/// One tick's worth of telemetry. Any stream may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub emission: Option<EmissionMetric>,
    pub resource: Option<ResourceMetric>,
    pub phase: Option<PhaseRecord>,
}

impl MetricSample {
    /// True when the sample carries no readings at all.
    pub fn is_empty(&self) -> bool {
        self.emission.is_none() && self.resource.is_none() && self.phase.is_none()
    }
}
