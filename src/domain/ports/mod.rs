//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the seams where the monitor plugs in external behavior:
//! - TrendModel: emissions forecasting strategy
//! - OptimizationModel: resource allocation strategy
//! - ModelFactory: builds both models at startup
//! - MetricSource: supplies one sample per tick
//! - ResultSink: receives result bundles
//!
//! Deterministic doubles for each live beside the traits.

pub mod collecting_sink;
pub mod fixed_models;
pub mod metric_source;
pub mod model_factory;
pub mod optimization_model;
pub mod result_sink;
pub mod scripted_source;
pub mod trend_model;

pub use collecting_sink::CollectingSink;
pub use fixed_models::{FixedModelFactory, FixedOptimizationModel, FixedTrendModel};
pub use metric_source::MetricSource;
pub use model_factory::ModelFactory;
pub use optimization_model::OptimizationModel;
pub use result_sink::ResultSink;
pub use scripted_source::ScriptedSource;
pub use trend_model::TrendModel;
