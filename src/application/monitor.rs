//! Sustainability monitor orchestrator.
//!
//! One owned monitor instance drives the whole pipeline:
//!
//! ```text
//! Initializing -> Running -> (per tick: Evaluating -> Offloading -> Aggregating) -> Running
//!                 Running -> ShuttingDown -> Terminated
//! ```
//!
//! Ticks never overlap. Within a tick the trend prediction and resource
//! optimization run in parallel on the worker pool and are awaited before
//! any bundle is emitted, so every bundle of tick N reaches the sink before
//! tick N+1 starts. A failed tick is logged and followed by a backoff; it
//! never stops the loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, mpsc, RwLock};
use tokio::time::{interval, sleep, MissedTickBehavior};
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::worker_pool::WorkerPool;
use crate::domain::errors::{MonitorError, MonitorResult};
use crate::domain::models::{
    EmissionMetric, EmissionReport, MetricSample, MonitorConfig, OptimizationResult, PhaseRecord,
    PhaseReport, PredictionResult, ResourceMetric, ResourceReport, ResultBundle,
};
use crate::domain::ports::{MetricSource, ModelFactory, ResultSink};
use crate::infrastructure::config::ConfigLoader;
use crate::services::{
    analyze_progression, emission_recommendations, phase_recommendations, CriticalityEvaluator,
    MetricBuffer, ResourceOptimizer, SafetyEvaluator, TrendPredictor, MIN_HISTORY,
};

/// Lifecycle state of the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorState {
    Initializing,
    Running,
    Evaluating,
    Offloading,
    Aggregating,
    ShuttingDown,
    Terminated,
}

/// Snapshot of monitor progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorStatus {
    pub run_id: Uuid,
    pub state: MonitorState,
    pub ticks_completed: u64,
    pub ticks_failed: u64,
    pub bundles_emitted: u64,
    pub last_tick_at: Option<DateTime<Utc>>,
}

impl MonitorStatus {
    fn new(run_id: Uuid) -> Self {
        Self {
            run_id,
            state: MonitorState::Initializing,
            ticks_completed: 0,
            ticks_failed: 0,
            bundles_emitted: 0,
            last_tick_at: None,
        }
    }
}

/// Why the run loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Shutdown was requested through a [`MonitorHandle`].
    Requested,
    /// The configured tick limit was reached.
    TickLimit,
}

/// Progress events published while the monitor runs.
#[derive(Debug, Clone)]
pub enum MonitorEvent {
    Started { run_id: Uuid },
    TickCompleted { tick: u64, bundles: usize },
    TickFailed { tick: u64, error: String },
    Stopped { reason: StopReason },
}

/// Options for a single run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Stop after this many ticks (successful or failed).
    pub max_ticks: Option<u64>,
}

impl RunOptions {
    pub fn with_max_ticks(max_ticks: u64) -> Self {
        Self {
            max_ticks: Some(max_ticks),
        }
    }
}

/// Handle to control a running monitor.
#[derive(Debug, Clone)]
pub struct MonitorHandle {
    stop_flag: Arc<AtomicBool>,
    shutdown_tx: broadcast::Sender<()>,
    status: Arc<RwLock<MonitorStatus>>,
}

impl MonitorHandle {
    /// Request graceful shutdown. In-flight work completes before exit.
    pub fn shutdown(&self) {
        self.stop_flag.store(true, Ordering::Release);
        let _ = self.shutdown_tx.send(());
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.stop_flag.load(Ordering::Acquire)
    }

    pub async fn status(&self) -> MonitorStatus {
        self.status.read().await.clone()
    }

    pub async fn state(&self) -> MonitorState {
        self.status.read().await.state
    }
}

/// Real-time sustainability monitor.
pub struct SustainabilityMonitor {
    config: Arc<MonitorConfig>,
    source: Box<dyn MetricSource>,
    sink: Arc<dyn ResultSink>,
    safety: SafetyEvaluator,
    criticality: CriticalityEvaluator,
    predictor: TrendPredictor,
    optimizer: ResourceOptimizer,
    pool: WorkerPool,
    emissions: MetricBuffer<EmissionMetric>,
    resources: MetricBuffer<ResourceMetric>,
    phases: MetricBuffer<PhaseRecord>,
    status: Arc<RwLock<MonitorStatus>>,
    stop_flag: Arc<AtomicBool>,
    shutdown_tx: broadcast::Sender<()>,
    shutdown_rx: broadcast::Receiver<()>,
}

impl SustainabilityMonitor {
    /// Build the monitor and its models.
    ///
    /// Model construction failure is fatal and returned as
    /// [`MonitorError::ModelInit`]. An invalid config is replaced by the
    /// defaults.
    pub fn initialize(
        config: Arc<MonitorConfig>,
        models: &dyn ModelFactory,
        source: Box<dyn MetricSource>,
        sink: Arc<dyn ResultSink>,
    ) -> MonitorResult<Self> {
        let run_id = Uuid::new_v4();

        let config = match ConfigLoader::validate(&config) {
            Ok(()) => config,
            Err(err) => {
                warn!(error = %err, "Invalid monitor config, using defaults");
                Arc::new(MonitorConfig::default())
            }
        };

        let trend_model = models.create_trend_model().inspect_err(|err| {
            error!(error = %err, "Trend model initialization failed");
        })?;
        let optimization_model = models.create_optimization_model().inspect_err(|err| {
            error!(error = %err, "Optimization model initialization failed");
        })?;

        info!(
            %run_id,
            trend_model = trend_model.name(),
            optimization_model = optimization_model.name(),
            source = source.name(),
            "Models initialized"
        );

        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);

        Ok(Self {
            safety: SafetyEvaluator::new(&config.safety_margins),
            criticality: CriticalityEvaluator::new(&config.safety_margins),
            predictor: TrendPredictor::new(trend_model, config.prediction_horizon_hours),
            optimizer: ResourceOptimizer::new(
                optimization_model,
                config.optimization_window_hours,
            ),
            pool: WorkerPool::new(&config.worker_pool),
            emissions: MetricBuffer::new(),
            resources: MetricBuffer::new(),
            phases: MetricBuffer::new(),
            status: Arc::new(RwLock::new(MonitorStatus::new(run_id))),
            stop_flag: Arc::new(AtomicBool::new(false)),
            shutdown_tx,
            shutdown_rx,
            config,
            source,
            sink,
        })
    }

    pub fn handle(&self) -> MonitorHandle {
        MonitorHandle {
            stop_flag: self.stop_flag.clone(),
            shutdown_tx: self.shutdown_tx.clone(),
            status: self.status.clone(),
        }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn emission_history(&self) -> &MetricBuffer<EmissionMetric> {
        &self.emissions
    }

    pub fn resource_history(&self) -> &MetricBuffer<ResourceMetric> {
        &self.resources
    }

    pub fn phase_log(&self) -> &MetricBuffer<PhaseRecord> {
        &self.phases
    }

    /// Run until shutdown is requested or the tick limit is reached.
    ///
    /// Returns the final status once offloaded work has drained.
    pub async fn run(
        mut self,
        options: RunOptions,
        events: mpsc::Sender<MonitorEvent>,
    ) -> MonitorStatus {
        let run_id = self.status.read().await.run_id;
        let span = info_span!("monitor", %run_id);

        async move {
            self.set_state(MonitorState::Running).await;
            info!(
                interval_ms = self.config.monitoring_interval_ms,
                workers = self.pool.workers(),
                "Sustainability monitor started"
            );
            let _ = events.send(MonitorEvent::Started { run_id }).await;

            let reason = self.run_loop(options, &events).await;
            self.shut_down(reason, &events).await
        }
        .instrument(span)
        .await
    }

    async fn run_loop(
        &mut self,
        options: RunOptions,
        events: &mpsc::Sender<MonitorEvent>,
    ) -> StopReason {
        let mut ticker = interval(self.config.monitoring_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut tick = 0u64;

        loop {
            if self.stop_flag.load(Ordering::Acquire) {
                return StopReason::Requested;
            }
            if options.max_ticks.is_some_and(|max| tick >= max) {
                return StopReason::TickLimit;
            }

            tokio::select! {
                biased;
                _ = self.shutdown_rx.recv() => return StopReason::Requested,
                _ = ticker.tick() => {}
            }

            tick += 1;
            match self.run_tick(tick).await {
                Ok(bundles) => {
                    {
                        let mut status = self.status.write().await;
                        status.ticks_completed += 1;
                        status.last_tick_at = Some(Utc::now());
                        status.state = MonitorState::Running;
                    }
                    debug!(tick, bundles, "Tick completed");
                    let _ = events
                        .send(MonitorEvent::TickCompleted { tick, bundles })
                        .await;
                }
                Err(err) => {
                    let err = MonitorError::Tick {
                        tick,
                        reason: err.to_string(),
                    };
                    error!(
                        tick,
                        error = %err,
                        backoff_ms = self.config.error_backoff_ms,
                        "Tick failed, backing off"
                    );
                    {
                        let mut status = self.status.write().await;
                        status.ticks_failed += 1;
                        status.state = MonitorState::Running;
                    }
                    let _ = events
                        .send(MonitorEvent::TickFailed {
                            tick,
                            error: err.to_string(),
                        })
                        .await;

                    tokio::select! {
                        biased;
                        _ = self.shutdown_rx.recv() => return StopReason::Requested,
                        () = sleep(self.config.error_backoff()) => {}
                    }
                }
            }
        }
    }

    /// Fetch one sample, process it, and hand every bundle to the sink.
    ///
    /// Returns the number of bundles emitted. Each delivered bundle is
    /// counted as it is emitted, even if a later one is rejected.
    async fn run_tick(&mut self, tick: u64) -> MonitorResult<usize> {
        let sample = self.source.next_sample().await?;
        if sample.is_empty() {
            debug!(tick, "Empty sample");
        }

        let bundles = self.process_sample(sample).await?;
        for bundle in &bundles {
            self.sink.emit(bundle).await?;
            self.status.write().await.bundles_emitted += 1;
        }
        Ok(bundles.len())
    }

    /// Evaluate one sample through the full pipeline without emitting.
    ///
    /// Bundles come back in stream order: emissions, resources, phase.
    pub async fn process_sample(&mut self, sample: MetricSample) -> MonitorResult<Vec<ResultBundle>> {
        self.set_state(MonitorState::Evaluating).await;

        // Synchronous evaluation on the orchestrator task. History windows are
        // copied here so offloaded work never touches the buffers.
        let emission_stage = sample.emission.map(|metric| {
            self.emissions.append(metric);
            let safety = self.safety.evaluate(&metric);
            let window = self.emissions.recent_window(MIN_HISTORY);
            (metric, safety, window)
        });
        let resource_stage = sample.resource.map(|metric| {
            self.resources.append(metric);
            (metric, self.criticality.evaluate(&metric))
        });
        let phase_report = sample.phase.map(|record| self.process_phase(record));

        self.set_state(MonitorState::Offloading).await;
        let (prediction, optimization) = tokio::join!(
            offload_prediction(
                &self.pool,
                &self.predictor,
                emission_stage
                    .as_ref()
                    .map(|(metric, _, window)| (*metric, window.clone())),
            ),
            offload_optimization(
                &self.pool,
                &self.optimizer,
                resource_stage.as_ref().map(|(metric, _)| *metric),
            ),
        );
        let prediction = prediction?;
        let optimization = optimization?;

        self.set_state(MonitorState::Aggregating).await;
        let processing_timestamp = Utc::now().timestamp();
        let mut bundles = Vec::with_capacity(3);

        if let (Some((metrics, safety_status, _)), Some(prediction)) = (emission_stage, prediction) {
            bundles.push(ResultBundle::Emissions(EmissionReport {
                recommendations: emission_recommendations(&metrics, &prediction),
                metrics,
                safety_status,
                prediction,
                processing_timestamp,
            }));
        }
        if let (Some((metrics, criticality_status)), Some(optimization)) =
            (resource_stage, optimization)
        {
            bundles.push(ResultBundle::Resources(ResourceReport {
                metrics,
                criticality_status,
                optimization,
                processing_timestamp,
            }));
        }
        if let Some(mut report) = phase_report {
            report.processing_timestamp = processing_timestamp;
            bundles.push(ResultBundle::Phase(report));
        }

        Ok(bundles)
    }

    fn process_phase(&mut self, record: PhaseRecord) -> PhaseReport {
        self.phases.append(record.clone());
        PhaseReport {
            progression_analysis: analyze_progression(&record),
            recommendations: phase_recommendations(&record),
            phase_data: record,
            processing_timestamp: Utc::now().timestamp(),
        }
    }

    async fn shut_down(
        &self,
        reason: StopReason,
        events: &mpsc::Sender<MonitorEvent>,
    ) -> MonitorStatus {
        self.set_state(MonitorState::ShuttingDown).await;
        info!(?reason, "Sustainability monitor shutting down");

        if let Err(err) = self.pool.drain(self.config.shutdown_timeout()).await {
            warn!(error = %err, "Offloaded work did not drain cleanly");
        }

        self.set_state(MonitorState::Terminated).await;
        let _ = events.send(MonitorEvent::Stopped { reason }).await;

        let status = self.status.read().await.clone();
        info!(
            ticks_completed = status.ticks_completed,
            ticks_failed = status.ticks_failed,
            bundles_emitted = status.bundles_emitted,
            "Sustainability monitor stopped"
        );
        status
    }

    async fn set_state(&self, state: MonitorState) {
        self.status.write().await.state = state;
    }
}

async fn offload_prediction(
    pool: &WorkerPool,
    predictor: &TrendPredictor,
    input: Option<(EmissionMetric, Vec<EmissionMetric>)>,
) -> MonitorResult<Option<PredictionResult>> {
    let Some((current, window)) = input else {
        return Ok(None);
    };
    let predictor = predictor.clone();
    let prediction = pool
        .submit(move || predictor.predict(&window, &current))
        .await??;
    Ok(Some(prediction))
}

async fn offload_optimization(
    pool: &WorkerPool,
    optimizer: &ResourceOptimizer,
    input: Option<ResourceMetric>,
) -> MonitorResult<Option<OptimizationResult>> {
    let Some(metric) = input else {
        return Ok(None);
    };
    let optimizer = optimizer.clone();
    let optimization = pool.submit(move || optimizer.optimize(&metric)).await??;
    Ok(Some(optimization))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        CollectingSink, FixedModelFactory, FixedOptimizationModel, FixedTrendModel,
        ScriptedSource,
    };
    use crate::domain::models::{OptimizationFactor, PredictionStatus, Severity};

    fn emission(absolute: f64) -> EmissionMetric {
        EmissionMetric {
            absolute_emissions: absolute,
            emission_intensity: 89.5,
            well_to_wake_intensity: 42.1,
            abatement_potential: 12.3,
            timestamp_utc: 1_700_000_000,
        }
    }

    fn factory(predicted: f64) -> FixedModelFactory {
        FixedModelFactory::new(
            Arc::new(FixedTrendModel::new(predicted, 0.9)),
            Arc::new(FixedOptimizationModel::new(vec![OptimizationFactor::new(
                "x", 0.5,
            )])),
        )
    }

    fn monitor(factory: &FixedModelFactory) -> SustainabilityMonitor {
        SustainabilityMonitor::initialize(
            Arc::new(MonitorConfig::default()),
            factory,
            Box::new(ScriptedSource::new()),
            Arc::new(CollectingSink::new()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_initial_state() {
        let monitor = monitor(&factory(50.0));
        let handle = monitor.handle();
        assert_eq!(handle.state().await, MonitorState::Initializing);
        assert!(!handle.is_shutdown_requested());
    }

    #[tokio::test]
    async fn test_model_init_failure_is_fatal() {
        let result = SustainabilityMonitor::initialize(
            Arc::new(MonitorConfig::default()),
            &FixedModelFactory::failing("weights unavailable"),
            Box::new(ScriptedSource::new()),
            Arc::new(CollectingSink::new()),
        );
        assert!(matches!(result, Err(MonitorError::ModelInit { .. })));
    }

    #[tokio::test]
    async fn test_invalid_config_replaced_by_defaults() {
        let config = MonitorConfig {
            monitoring_interval_ms: 0,
            ..MonitorConfig::default()
        };
        let monitor = SustainabilityMonitor::initialize(
            Arc::new(config),
            &factory(50.0),
            Box::new(ScriptedSource::new()),
            Arc::new(CollectingSink::new()),
        )
        .unwrap();
        assert_eq!(monitor.config(), &MonitorConfig::default());
    }

    #[tokio::test]
    async fn test_prediction_gated_by_history() {
        let mut monitor = monitor(&factory(60.0));

        for i in 0..MIN_HISTORY {
            let bundles = monitor
                .process_sample(MetricSample {
                    emission: Some(emission(40.0)),
                    ..Default::default()
                })
                .await
                .unwrap();
            let ResultBundle::Emissions(report) = &bundles[0] else {
                panic!("expected emissions bundle");
            };
            let expected = if i + 1 < MIN_HISTORY {
                PredictionStatus::InsufficientHistory
            } else {
                PredictionStatus::Forecast
            };
            assert_eq!(report.prediction.status, expected);
        }
        assert_eq!(monitor.emission_history().len(), MIN_HISTORY);
    }

    #[tokio::test]
    async fn test_bundle_order_and_shapes() {
        let mut monitor = monitor(&factory(60.0));
        let sample = MetricSample {
            emission: Some(emission(55.0)),
            resource: Some(ResourceMetric {
                material_intensity: 0.65,
                circularity: 0.42,
                supply_risk: 35.8,
                efficiency_index: 78.2,
                timestamp_utc: 1_700_000_000,
            }),
            phase: Some(PhaseRecord {
                phase_id: "CDR".to_string(),
                trl: 7,
                verification_method: "test".to_string(),
                validation_report: "VR-7".to_string(),
                passed: true,
                coverage_percentage: Some(85.0),
                timestamp_utc: 1_700_000_000,
            }),
        };

        let bundles = monitor.process_sample(sample).await.unwrap();
        let streams: Vec<_> = bundles.iter().map(ResultBundle::stream).collect();
        assert_eq!(streams, vec!["emissions", "resources", "phase"]);

        let ResultBundle::Emissions(report) = &bundles[0] else {
            panic!("expected emissions bundle");
        };
        assert_eq!(report.safety_status.severity, Severity::High);
        assert_eq!(monitor.phase_log().len(), 1);
        assert_eq!(monitor.resource_history().len(), 1);
    }
}
