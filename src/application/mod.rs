//! Application layer
//!
//! The monitor orchestrator and the worker pool it offloads model work to.

pub mod monitor;
pub mod worker_pool;

pub use monitor::{
    MonitorEvent, MonitorHandle, MonitorState, MonitorStatus, RunOptions, StopReason,
    SustainabilityMonitor,
};
pub use worker_pool::WorkerPool;
