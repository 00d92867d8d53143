//! Service layer
//!
//! Buffers, evaluators, the pluggable-model wrappers and recommendation
//! rules. Everything here is synchronous and free of I/O apart from the
//! simulated metric source.

pub mod criticality_evaluator;
pub mod metric_buffer;
pub mod progression_analyzer;
pub mod recommendation_generator;
pub mod reference_models;
pub mod resource_optimizer;
pub mod safety_evaluator;
pub mod simulated_source;
pub mod trend_predictor;

pub use criticality_evaluator::{risk_score, CriticalityEvaluator};
pub use metric_buffer::MetricBuffer;
pub use progression_analyzer::analyze_progression;
pub use recommendation_generator::{emission_recommendations, phase_recommendations};
pub use reference_models::ReferenceModelFactory;
pub use resource_optimizer::{
    estimate_improvement, prioritize_actions, HeuristicAllocationModel, ResourceOptimizer,
};
pub use safety_evaluator::SafetyEvaluator;
pub use simulated_source::SimulatedSource;
pub use trend_predictor::{RandomProjectionModel, TrendPredictor, MIN_HISTORY};
