use std::io::Write;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::errors::{MonitorError, MonitorResult};
use crate::domain::models::ResultBundle;
use crate::domain::ports::ResultSink;

/// Writes each bundle as a single JSON line and flushes.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl JsonLinesSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

#[async_trait]
impl<W: Write + Send> ResultSink for JsonLinesSink<W> {
    async fn emit(&self, bundle: &ResultBundle) -> MonitorResult<()> {
        let line = serde_json::to_string(bundle)?;
        let mut writer = self.writer.lock().await;
        writeln!(writer, "{line}")
            .and_then(|()| writer.flush())
            .map_err(|err| MonitorError::Sink(err.to_string()))
    }
}
