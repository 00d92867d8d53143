//! `config` command: print the effective configuration.

use std::process::ExitCode;

use anyhow::Result;

use crate::cli::output::{output, ConfigOutput};
use crate::infrastructure::config::LoadedConfig;

pub fn execute(loaded: &LoadedConfig, json_mode: bool) -> Result<ExitCode> {
    output(
        &ConfigOutput {
            source: &loaded.source,
            config: &loaded.config,
        },
        json_mode,
    );
    Ok(ExitCode::SUCCESS)
}
