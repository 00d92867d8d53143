//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{front_matter::FrontMatterArgs, lint::LintArgs, run::RunArgs};

#[derive(Parser, Debug)]
#[command(name = "sustain-monitor")]
#[command(about = "Real-time sustainability metrics monitor", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (JSON or YAML)
    #[arg(short, long, global = true, env = "SUSTAIN_MONITOR_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the monitor against the simulated metric source
    Run(RunArgs),

    /// Show the effective configuration and where it came from
    Config,

    /// Validate document file names against the canonical pattern
    LintNames(LintArgs),

    /// Insert YAML front matter into markdown files that lack it
    FrontMatter(FrontMatterArgs),
}
