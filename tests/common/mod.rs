//! Common test utilities for integration tests
//!
//! Provides shared fixtures, helpers, and test utilities used across
//! multiple integration test files.

#![allow(dead_code)]

use std::sync::Arc;

use sustainability_monitor::domain::models::{
    EmissionMetric, MetricSample, MonitorConfig, OptimizationFactor, PhaseRecord, ResourceMetric,
};
use sustainability_monitor::domain::ports::{
    FixedModelFactory, FixedOptimizationModel, FixedTrendModel,
};
use tempfile::TempDir;

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Wait for an async condition to become true with timeout
///
/// Polls every 10ms until the predicate returns true or the timeout passes.
pub async fn wait_for<F, Fut>(mut predicate: F, timeout_ms: u64) -> bool
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    let start = std::time::Instant::now();
    let timeout = std::time::Duration::from_millis(timeout_ms);

    while start.elapsed() < timeout {
        if predicate().await {
            return true;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }

    false
}

/// Config with short intervals so loop tests finish quickly
pub fn fast_config() -> Arc<MonitorConfig> {
    Arc::new(MonitorConfig {
        monitoring_interval_ms: 5,
        error_backoff_ms: 5,
        shutdown_timeout_ms: 1000,
        ..MonitorConfig::default()
    })
}

pub fn emission(absolute_emissions: f64) -> EmissionMetric {
    EmissionMetric {
        absolute_emissions,
        emission_intensity: 89.5,
        well_to_wake_intensity: 42.1,
        abatement_potential: 12.3,
        timestamp_utc: 1_700_000_000,
    }
}

pub fn resource(material_intensity: f64, circularity: f64, supply_risk: f64) -> ResourceMetric {
    ResourceMetric {
        material_intensity,
        circularity,
        supply_risk,
        efficiency_index: 78.2,
        timestamp_utc: 1_700_000_000,
    }
}

pub fn phase(trl: u32, passed: bool, coverage: Option<f64>) -> PhaseRecord {
    PhaseRecord {
        phase_id: format!("PHASE-TRL{trl}"),
        trl,
        verification_method: "test".to_string(),
        validation_report: "VR-001".to_string(),
        passed,
        coverage_percentage: coverage,
        timestamp_utc: 1_700_000_000,
    }
}

/// Emission plus resource sample with baseline values
pub fn full_sample() -> MetricSample {
    MetricSample {
        emission: Some(emission(45.2)),
        resource: Some(resource(0.65, 0.42, 35.8)),
        phase: None,
    }
}

/// Fixed models predicting `predicted` with confidence 0.9
pub fn fixed_factory(predicted: f64) -> (Arc<FixedTrendModel>, FixedModelFactory) {
    let trend = Arc::new(FixedTrendModel::new(predicted, 0.9));
    let optimization = Arc::new(FixedOptimizationModel::new(vec![
        OptimizationFactor::new("material_substitution_factor", 0.2),
        OptimizationFactor::new("circularity_improvement", 0.3),
    ]));
    (trend.clone(), FixedModelFactory::new(trend, optimization))
}
