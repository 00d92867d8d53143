//! Integration tests for the monitor run loop.

mod common;

use std::sync::Arc;

use common::{fast_config, fixed_factory, full_sample, phase, setup_test_logging, wait_for};
use sustainability_monitor::domain::models::{
    MetricSample, MonitorConfig, OptimizationResult, ResultBundle,
};
use sustainability_monitor::domain::ports::{
    CollectingSink, FixedModelFactory, FixedOptimizationModel, FixedTrendModel, ScriptedSource,
};
use sustainability_monitor::{
    MonitorError, MonitorEvent, MonitorState, RunOptions, StopReason, SustainabilityMonitor,
};
use tokio::sync::mpsc;

fn monitor_with(
    source: ScriptedSource,
    sink: Arc<CollectingSink>,
    factory: &FixedModelFactory,
) -> SustainabilityMonitor {
    SustainabilityMonitor::initialize(fast_config(), factory, Box::new(source), sink)
        .expect("monitor should initialize")
}

async fn collect_events(mut rx: mpsc::Receiver<MonitorEvent>) -> Vec<MonitorEvent> {
    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn test_runs_until_tick_limit() {
    setup_test_logging();
    let (_, factory) = fixed_factory(50.0);
    let sink = Arc::new(CollectingSink::new());
    let source = ScriptedSource::new()
        .with_sample(full_sample())
        .with_sample(full_sample())
        .with_sample(full_sample());
    let monitor = monitor_with(source, sink.clone(), &factory);

    let (tx, rx) = mpsc::channel(64);
    let status = monitor.run(RunOptions::with_max_ticks(3), tx).await;

    assert_eq!(status.state, MonitorState::Terminated);
    assert_eq!(status.ticks_completed, 3);
    assert_eq!(status.ticks_failed, 0);
    assert_eq!(status.bundles_emitted, 6);
    assert!(status.last_tick_at.is_some());

    let events = collect_events(rx).await;
    assert!(matches!(events.first(), Some(MonitorEvent::Started { .. })));
    assert!(matches!(
        events.last(),
        Some(MonitorEvent::Stopped {
            reason: StopReason::TickLimit
        })
    ));
}

#[tokio::test]
async fn test_bundles_arrive_in_tick_order() {
    let (_, factory) = fixed_factory(50.0);
    let sink = Arc::new(CollectingSink::new());
    let mut with_phase = full_sample();
    with_phase.phase = Some(phase(5, true, Some(90.0)));
    let source = ScriptedSource::new()
        .with_sample(full_sample())
        .with_sample(with_phase);
    let monitor = monitor_with(source, sink.clone(), &factory);

    let (tx, _rx) = mpsc::channel(64);
    monitor.run(RunOptions::with_max_ticks(2), tx).await;

    let streams: Vec<_> = sink.bundles().await.iter().map(ResultBundle::stream).collect();
    assert_eq!(
        streams,
        vec!["emissions", "resources", "emissions", "resources", "phase"]
    );

    let bundles = sink.bundles().await;
    let ResultBundle::Resources(report) = &bundles[1] else {
        panic!("expected resources bundle");
    };
    let OptimizationResult::Optimized(plan) = &report.optimization else {
        panic!("expected an optimization plan");
    };
    assert_eq!(
        plan.implementation_priority,
        vec!["circularity_improvement", "material_substitution_factor"]
    );
    assert_eq!(plan.window_hours, 4);
}

#[tokio::test]
async fn test_source_failure_does_not_stop_loop() {
    let (_, factory) = fixed_factory(50.0);
    let sink = Arc::new(CollectingSink::new());
    let source = ScriptedSource::new()
        .with_failure("telemetry link down")
        .with_sample(full_sample());
    let monitor = monitor_with(source, sink.clone(), &factory);

    let (tx, rx) = mpsc::channel(64);
    let status = monitor.run(RunOptions::with_max_ticks(3), tx).await;

    assert_eq!(status.ticks_failed, 1);
    assert_eq!(status.ticks_completed, 2);
    assert_eq!(sink.len().await, 2);

    let events = collect_events(rx).await;
    let failure = events.iter().find_map(|event| match event {
        MonitorEvent::TickFailed { tick, error } => Some((*tick, error.clone())),
        _ => None,
    });
    let (tick, error) = failure.expect("a TickFailed event");
    assert_eq!(tick, 1);
    assert!(error.contains("telemetry link down"));
}

#[tokio::test]
async fn test_sink_rejection_is_a_tick_failure() {
    let (_, factory) = fixed_factory(50.0);
    let sink = Arc::new(CollectingSink::rejecting(1));
    let source = ScriptedSource::new()
        .with_sample(full_sample())
        .with_sample(full_sample());
    let monitor = monitor_with(source, sink.clone(), &factory);

    let (tx, _rx) = mpsc::channel(64);
    let status = monitor.run(RunOptions::with_max_ticks(2), tx).await;

    assert_eq!(status.ticks_failed, 1);
    assert_eq!(status.ticks_completed, 1);
    assert_eq!(sink.len().await, 2);
}

#[tokio::test]
async fn test_partially_delivered_tick_counts_delivered_bundles() {
    let (_, factory) = fixed_factory(50.0);
    let sink = Arc::new(CollectingSink::rejecting_attempt(2));
    let source = ScriptedSource::new().with_sample(full_sample());
    let monitor = monitor_with(source, sink.clone(), &factory);

    let (tx, _rx) = mpsc::channel(64);
    let status = monitor.run(RunOptions::with_max_ticks(1), tx).await;

    assert_eq!(status.ticks_failed, 1);
    assert_eq!(status.ticks_completed, 0);
    assert_eq!(sink.len().await, 1);
    assert_eq!(status.bundles_emitted, 1);
}

#[tokio::test]
async fn test_zero_interval_config_still_runs() {
    let (_, factory) = fixed_factory(50.0);
    let sink = Arc::new(CollectingSink::new());
    let config = MonitorConfig {
        monitoring_interval_ms: 0,
        ..MonitorConfig::default()
    };
    let monitor = SustainabilityMonitor::initialize(
        Arc::new(config),
        &factory,
        Box::new(ScriptedSource::new().with_sample(full_sample())),
        sink.clone(),
    )
    .expect("monitor should initialize");
    assert_eq!(monitor.config(), &MonitorConfig::default());

    let (tx, _rx) = mpsc::channel(64);
    let status = monitor.run(RunOptions::with_max_ticks(1), tx).await;

    assert_eq!(status.state, MonitorState::Terminated);
    assert_eq!(status.ticks_completed, 1);
    assert_eq!(sink.len().await, 2);
}

#[tokio::test]
async fn test_model_failure_is_absorbed() {
    let factory = FixedModelFactory::new(
        Arc::new(FixedTrendModel::failing("diverged")),
        Arc::new(FixedOptimizationModel::new(Vec::new())),
    );
    let sink = Arc::new(CollectingSink::new());
    let mut source = ScriptedSource::new();
    for _ in 0..11 {
        source = source.with_sample(MetricSample {
            emission: full_sample().emission,
            ..Default::default()
        });
    }
    let monitor = monitor_with(source, sink.clone(), &factory);

    let (tx, _rx) = mpsc::channel(64);
    let status = monitor.run(RunOptions::with_max_ticks(11), tx).await;

    // the model is only consulted from the tenth sample on
    assert_eq!(status.ticks_completed, 9);
    assert_eq!(status.ticks_failed, 2);
    assert_eq!(status.state, MonitorState::Terminated);
}

#[tokio::test]
async fn test_model_init_failure_is_fatal() {
    let result = SustainabilityMonitor::initialize(
        fast_config(),
        &FixedModelFactory::failing("weights missing"),
        Box::new(ScriptedSource::new()),
        Arc::new(CollectingSink::new()),
    );

    match result {
        Err(err @ MonitorError::ModelInit { .. }) => assert!(err.is_fatal()),
        Err(other) => panic!("Expected ModelInit, got {other}"),
        Ok(_) => panic!("Expected initialization to fail"),
    }
}

#[tokio::test]
async fn test_shutdown_through_handle() {
    let (_, factory) = fixed_factory(50.0);
    let sink = Arc::new(CollectingSink::new());
    let monitor = monitor_with(ScriptedSource::new(), sink, &factory);
    let handle = monitor.handle();

    let (tx, rx) = mpsc::channel(16);
    let collector = tokio::spawn(collect_events(rx));
    let run = tokio::spawn(monitor.run(RunOptions::default(), tx));

    let progressed = wait_for(
        || {
            let handle = handle.clone();
            async move { handle.status().await.ticks_completed >= 2 }
        },
        2000,
    )
    .await;
    assert!(progressed, "monitor should complete ticks");

    handle.shutdown();
    let status = run.await.unwrap();

    assert_eq!(status.state, MonitorState::Terminated);
    assert_eq!(handle.state().await, MonitorState::Terminated);
    assert!(handle.is_shutdown_requested());

    let events = collector.await.unwrap();
    assert!(matches!(
        events.last(),
        Some(MonitorEvent::Stopped {
            reason: StopReason::Requested
        })
    ));
}
