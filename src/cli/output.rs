//! Output formatting utilities for the CLI.

use serde::Serialize;

use crate::application::MonitorStatus;
use crate::domain::models::MonitorConfig;
use crate::infrastructure::config::ConfigSource;
use crate::infrastructure::templates::{FrontMatterOutcome, FrontMatterReport};
use crate::infrastructure::validators::LintReport;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Effective configuration and its origin.
#[derive(Debug, Serialize)]
pub struct ConfigOutput<'a> {
    pub source: &'a ConfigSource,
    pub config: &'a MonitorConfig,
}

impl CommandOutput for ConfigOutput<'_> {
    fn to_human(&self) -> String {
        let source = match self.source {
            ConfigSource::Environment => "defaults + environment".to_string(),
            ConfigSource::File { path } => format!("{} + environment", path.display()),
            ConfigSource::Defaults { reason } => format!("defaults ({reason})"),
        };
        let body = serde_yaml::to_string(self.config).unwrap_or_default();
        format!("# source: {source}\n{body}")
    }
}

#[derive(Debug, Serialize)]
pub struct LintOutput {
    pub results: Vec<LintReport>,
}

impl CommandOutput for LintOutput {
    fn to_human(&self) -> String {
        self.results
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Serialize)]
pub struct FrontMatterOutput {
    pub results: Vec<FrontMatterReport>,
}

impl CommandOutput for FrontMatterOutput {
    fn to_human(&self) -> String {
        self.results
            .iter()
            .map(|report| {
                let outcome = match report.outcome {
                    FrontMatterOutcome::Inserted => "Metadata inserted.",
                    FrontMatterOutcome::AlreadyPresent => "Metadata already present.",
                };
                format!("{}: {outcome}", report.path.display())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Final monitor status after a run.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    #[serde(flatten)]
    pub status: MonitorStatus,
}

impl CommandOutput for RunSummary {
    fn to_human(&self) -> String {
        format!(
            "Monitor stopped (run {})\n   Ticks completed: {}\n   Ticks failed: {}\n   Bundles emitted: {}",
            self.status.run_id,
            self.status.ticks_completed,
            self.status.ticks_failed,
            self.status.bundles_emitted
        )
    }
}
