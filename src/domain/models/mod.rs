pub mod analysis;
pub mod bundle;
pub mod config;
pub mod metrics;
pub mod status;
pub mod thresholds;

pub use analysis::{
    Forecast, ImprovementEstimate, LifecycleStage, OptimizationConstraints, OptimizationFactor,
    OptimizationPlan, OptimizationResult, PhaseCompletion, PredictionResult, PredictionStatus,
    ProgressionAnalysis, TrendDirection,
};
pub use bundle::{EmissionReport, PhaseReport, ResourceReport, ResultBundle};
pub use config::{
    LogFormat, LoggingConfig, MonitorConfig, RotationPolicy, SafetyMargins, WorkerPoolConfig,
};
pub use metrics::{EmissionMetric, MetricSample, PhaseRecord, ResourceMetric};
pub use status::{CriticalityFlag, CriticalityLevel, CriticalityStatus, SafetyStatus, Severity};
