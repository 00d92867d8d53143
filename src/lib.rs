//! Sustainability Monitor - real-time sustainability telemetry evaluation
//!
//! Periodically ingests emissions, resource and lifecycle-phase telemetry,
//! checks it against fixed thresholds with safety margins, forecasts
//! emission trends and resource allocations through pluggable models, and
//! hands structured result bundles to an output collaborator.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Metric records, results, errors and ports
//! - **Service Layer** (`services`): Buffers, evaluators, model wrappers, rules
//! - **Application Layer** (`application`): Worker pool and monitor orchestrator
//! - **Infrastructure Layer** (`infrastructure`): Config, logging, sinks, document tools
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use sustainability_monitor::{
//!     MonitorConfig, ReferenceModelFactory, RunOptions, SimulatedSource,
//!     SustainabilityMonitor, TracingSink,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let monitor = SustainabilityMonitor::initialize(
//!         Arc::new(MonitorConfig::default()),
//!         &ReferenceModelFactory::new(),
//!         Box::new(SimulatedSource::new()),
//!         Arc::new(TracingSink::new()),
//!     )?;
//!     let (tx, _rx) = tokio::sync::mpsc::channel(16);
//!     monitor.run(RunOptions::with_max_ticks(10), tx).await;
//!     Ok(())
//! }
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use application::{
    MonitorEvent, MonitorHandle, MonitorState, MonitorStatus, RunOptions, StopReason,
    SustainabilityMonitor, WorkerPool,
};
pub use domain::models::{
    EmissionMetric, MetricSample, MonitorConfig, PhaseRecord, ResourceMetric, ResultBundle,
};
pub use domain::ports::{MetricSource, ModelFactory, OptimizationModel, ResultSink, TrendModel};
pub use domain::{MonitorError, MonitorResult, WorkerError};
pub use infrastructure::config::{ConfigError, ConfigLoader, ConfigSource};
pub use infrastructure::sinks::{JsonLinesSink, TracingSink};
pub use services::{ReferenceModelFactory, SimulatedSource};
