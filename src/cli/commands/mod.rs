//! CLI command implementations.

pub mod config;
pub mod front_matter;
pub mod lint;
pub mod run;
