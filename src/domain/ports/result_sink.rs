//! Result sink port - the output collaborator for result bundles.

use async_trait::async_trait;

use crate::domain::errors::MonitorResult;
use crate::domain::models::ResultBundle;

/// Receives every result bundle the monitor produces, in tick order.
#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn emit(&self, bundle: &ResultBundle) -> MonitorResult<()>;
}
