//! Scripted metric source for deterministic runs.

use std::collections::VecDeque;

use async_trait::async_trait;

use super::MetricSource;
use crate::domain::errors::{MonitorError, MonitorResult};
use crate::domain::models::MetricSample;

/// Replays a fixed script of samples and failures.
///
/// Once the script is exhausted every further tick yields an empty sample.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    script: VecDeque<Result<MetricSample, String>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample(mut self, sample: MetricSample) -> Self {
        self.script.push_back(Ok(sample));
        self
    }

    pub fn with_failure(mut self, reason: impl Into<String>) -> Self {
        self.script.push_back(Err(reason.into()));
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

#[async_trait]
impl MetricSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn next_sample(&mut self) -> MonitorResult<MetricSample> {
        match self.script.pop_front() {
            Some(Ok(sample)) => Ok(sample),
            Some(Err(reason)) => Err(MonitorError::Source(reason)),
            None => Ok(MetricSample::default()),
        }
    }
}
