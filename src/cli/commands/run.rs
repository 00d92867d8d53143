//! `run` command: drive the monitor until Ctrl-C or a tick limit.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::application::{MonitorEvent, RunOptions, SustainabilityMonitor};
use crate::cli::output::{output, RunSummary};
use crate::domain::models::{MonitorConfig, PhaseRecord};
use crate::domain::ports::ResultSink;
use crate::infrastructure::sinks::{JsonLinesSink, TracingSink};
use crate::services::{ReferenceModelFactory, SimulatedSource};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Stop after this many ticks
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Emit a simulated phase record every N ticks (0 disables)
    #[arg(long, default_value = "10")]
    pub phase_every: u64,

    /// Seed for the reference trend model weights
    #[arg(long)]
    pub seed: Option<u64>,
}

pub async fn execute(args: RunArgs, config: MonitorConfig, json_mode: bool) -> Result<ExitCode> {
    let config = Arc::new(config);

    let sink: Arc<dyn ResultSink> = if json_mode {
        Arc::new(JsonLinesSink::stdout())
    } else {
        Arc::new(TracingSink::new())
    };
    let source = SimulatedSource::new().with_phase_every(args.phase_every, simulated_phase());
    let models = args
        .seed
        .map_or_else(ReferenceModelFactory::new, ReferenceModelFactory::with_seed);

    let monitor =
        SustainabilityMonitor::initialize(config.clone(), &models, Box::new(source), sink)
            .context("Failed to initialize sustainability monitor")?;
    let handle = monitor.handle();

    if !json_mode {
        println!("Starting sustainability monitor");
        println!("   Interval: {}ms", config.monitoring_interval_ms);
        println!("   Workers: {}", config.worker_pool.workers);
        if let Some(ticks) = args.ticks {
            println!("   Tick limit: {ticks}");
        }
        println!();
    }

    let shutdown_handle = handle.clone();
    let signal_task = tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl-C received, shutting down");
                shutdown_handle.shutdown();
            }
            Err(err) => warn!(error = %err, "Failed to listen for Ctrl-C"),
        }
    });

    let (event_tx, mut event_rx) = mpsc::channel::<MonitorEvent>(100);
    let event_handler = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if json_mode {
                continue;
            }
            match event {
                MonitorEvent::Started { run_id } => println!("Monitor started: {run_id}"),
                MonitorEvent::TickCompleted { .. } => {}
                MonitorEvent::TickFailed { tick, error } => {
                    println!("Tick {tick} failed: {error}");
                }
                MonitorEvent::Stopped { reason } => {
                    println!("Monitor stopped ({reason:?})");
                    break;
                }
            }
        }
    });

    let options = RunOptions { max_ticks: args.ticks };
    let status = monitor.run(options, event_tx).await;

    signal_task.abort();
    let _ = event_handler.await;

    let summary = RunSummary { status };
    if json_mode {
        info!(
            ticks_completed = summary.status.ticks_completed,
            ticks_failed = summary.status.ticks_failed,
            bundles_emitted = summary.status.bundles_emitted,
            "Run summary"
        );
    } else {
        output(&summary, false);
    }

    Ok(ExitCode::SUCCESS)
}

fn simulated_phase() -> PhaseRecord {
    PhaseRecord {
        phase_id: "PDR".to_string(),
        trl: 5,
        verification_method: "analysis".to_string(),
        validation_report: "VR-PDR-001".to_string(),
        passed: true,
        coverage_percentage: Some(85.0),
        timestamp_utc: Utc::now().timestamp(),
    }
}
