//! Result sink adapters
//!
//! - `TracingSink`: one structured log event per bundle
//! - `JsonLinesSink`: one JSON document per line on any writer

pub mod json_lines;
pub mod tracing_sink;

pub use json_lines::JsonLinesSink;
pub use tracing_sink::TracingSink;
