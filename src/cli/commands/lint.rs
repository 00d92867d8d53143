//! `lint-names` command: check document file names.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::output::{output, LintOutput};
use crate::infrastructure::validators::DocumentNameValidator;

#[derive(Args, Debug)]
pub struct LintArgs {
    /// Files whose base names are checked
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Exit code 0 when every name is valid, 1 otherwise.
pub fn execute(args: &LintArgs, json_mode: bool) -> Result<ExitCode> {
    let validator = DocumentNameValidator::new().context("Failed to compile document name pattern")?;
    let results = validator.check_all(&args.files);
    let all_ok = results.iter().all(|report| report.is_ok());

    output(&LintOutput { results }, json_mode);

    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
