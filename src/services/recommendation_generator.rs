//! Rule-based recommendations.
//!
//! Output depends only on the inputs; the same metric and prediction
//! always produce the same list in the same order.

use crate::domain::models::thresholds::{CO2_CEILING, CO2_URGENT_FRACTION, WELL_TO_WAKE_LIMIT};
use crate::domain::models::{EmissionMetric, LifecycleStage, PhaseRecord, PredictionResult};

pub const URGENT_REDUCTION: &str = "URGENT: Implement immediate CO2 reduction measures";
pub const REVERSE_TREND: &str = "Proactive measures needed to reverse CO2 trend";
pub const SUPPLY_CHAIN_EFFICIENCY: &str = "Optimize fuel/energy supply chain efficiency";

/// Always issued, after any conditional recommendations.
pub const STANDING_EMISSION_RECOMMENDATIONS: [&str; 3] = [
    "Consider sustainable aviation fuel (SAF) adoption",
    "Implement operational efficiency improvements",
    "Explore hydrogen propulsion for future fleet",
];

const CONCEPT_GUIDANCE: [&str; 3] = [
    "Integrate sustainability metrics into concept definition",
    "Establish baseline CO2 and resource criticality targets",
    "Identify sustainable material alternatives early",
];

const DESIGN_GUIDANCE: [&str; 3] = [
    "Optimize design for material efficiency",
    "Implement circular economy principles",
    "Validate sustainability models with prototypes",
];

const CERTIFICATION_GUIDANCE: [&str; 3] = [
    "Monitor real-world sustainability performance",
    "Implement adaptive optimization algorithms",
    "Prepare for operational sustainability monitoring",
];

const OPERATIONAL_GUIDANCE: [&str; 3] = [
    "Continuous sustainability optimization",
    "Fleet-wide performance monitoring",
    "End-of-life planning and circular economy implementation",
];

/// Emissions recommendations: conditional items first, then the standing three.
pub fn emission_recommendations(
    metric: &EmissionMetric,
    prediction: &PredictionResult,
) -> Vec<String> {
    let mut recommendations = Vec::with_capacity(6);

    if metric.absolute_emissions > CO2_CEILING * CO2_URGENT_FRACTION {
        recommendations.push(URGENT_REDUCTION.to_string());
    }
    if prediction.is_increasing() {
        recommendations.push(REVERSE_TREND.to_string());
    }
    if metric.well_to_wake_intensity > WELL_TO_WAKE_LIMIT {
        recommendations.push(SUPPLY_CHAIN_EFFICIENCY.to_string());
    }

    recommendations.extend(STANDING_EMISSION_RECOMMENDATIONS.iter().map(|s| (*s).to_string()));
    recommendations
}

/// Fixed guidance for a lifecycle stage.
pub fn stage_guidance(stage: LifecycleStage) -> &'static [&'static str] {
    match stage {
        LifecycleStage::Concept => &CONCEPT_GUIDANCE,
        LifecycleStage::Design => &DESIGN_GUIDANCE,
        LifecycleStage::Certification => &CERTIFICATION_GUIDANCE,
        LifecycleStage::Operational => &OPERATIONAL_GUIDANCE,
    }
}

/// Phase recommendations for the record's technology-readiness tier.
pub fn phase_recommendations(record: &PhaseRecord) -> Vec<String> {
    stage_guidance(LifecycleStage::from_trl(record.trl))
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}
