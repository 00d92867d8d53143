//! Simulated telemetry source.

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::MonitorResult;
use crate::domain::models::{EmissionMetric, MetricSample, PhaseRecord, ResourceMetric};
use crate::domain::ports::MetricSource;

/// Produces baseline readings stamped with the current time.
///
/// Emission and resource readings are produced every tick. A phase record
/// is added every `phase_every` ticks when configured.
#[derive(Debug, Clone)]
pub struct SimulatedSource {
    emission: EmissionMetric,
    resource: ResourceMetric,
    phase: Option<(u64, PhaseRecord)>,
    ticks: u64,
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedSource {
    pub fn new() -> Self {
        Self {
            emission: EmissionMetric {
                absolute_emissions: 45.2,
                emission_intensity: 89.5,
                well_to_wake_intensity: 42.1,
                abatement_potential: 12.3,
                timestamp_utc: 0,
            },
            resource: ResourceMetric {
                material_intensity: 0.65,
                circularity: 0.42,
                supply_risk: 35.8,
                efficiency_index: 78.2,
                timestamp_utc: 0,
            },
            phase: None,
            ticks: 0,
        }
    }

    /// Emit `record` on every `every`-th tick (ignored when `every` is 0).
    pub fn with_phase_every(mut self, every: u64, record: PhaseRecord) -> Self {
        self.phase = (every > 0).then_some((every, record));
        self
    }

    pub fn with_emission(mut self, emission: EmissionMetric) -> Self {
        self.emission = emission;
        self
    }

    pub fn with_resource(mut self, resource: ResourceMetric) -> Self {
        self.resource = resource;
        self
    }
}

#[async_trait]
impl MetricSource for SimulatedSource {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn next_sample(&mut self) -> MonitorResult<MetricSample> {
        self.ticks += 1;
        let now = Utc::now().timestamp();

        let phase = self
            .phase
            .as_ref()
            .filter(|(every, _)| self.ticks % every == 0)
            .map(|(_, record)| PhaseRecord {
                timestamp_utc: now,
                ..record.clone()
            });

        Ok(MetricSample {
            emission: Some(EmissionMetric {
                timestamp_utc: now,
                ..self.emission
            }),
            resource: Some(ResourceMetric {
                timestamp_utc: now,
                ..self.resource
            }),
            phase,
        })
    }
}
