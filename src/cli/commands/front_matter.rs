//! `front-matter` command: insert YAML metadata into markdown files.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::cli::output::{output, FrontMatterOutput};
use crate::infrastructure::templates::FrontMatterInserter;

#[derive(Args, Debug)]
pub struct FrontMatterArgs {
    /// Markdown files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Processes files in order and stops at the first unreadable one.
pub fn execute(args: &FrontMatterArgs, json_mode: bool) -> Result<ExitCode> {
    let inserter = FrontMatterInserter::new();
    let results = args
        .files
        .iter()
        .map(|path| inserter.process_file(path))
        .collect::<Result<Vec<_>, _>>()?;

    output(&FrontMatterOutput { results }, json_mode);
    Ok(ExitCode::SUCCESS)
}
