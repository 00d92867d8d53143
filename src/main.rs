//! Sustainability monitor CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};

use sustainability_monitor::cli::{commands, handle_error, Cli, Commands};
use sustainability_monitor::infrastructure::config::{ConfigLoader, ConfigSource};
use sustainability_monitor::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = ConfigLoader::load(cli.config.as_deref());

    let _logger = match LoggerImpl::init(&loaded.config.logging) {
        Ok(logger) => Some(logger),
        Err(err) => {
            eprintln!("Logging unavailable: {err:#}");
            None
        }
    };

    match &loaded.source {
        ConfigSource::Defaults { reason } => {
            warn!(%reason, "Configuration could not be loaded, using defaults");
        }
        source => info!(?source, "Configuration loaded"),
    }

    let result = match cli.command {
        Commands::Run(args) => commands::run::execute(args, loaded.config, cli.json).await,
        Commands::Config => commands::config::execute(&loaded, cli.json),
        Commands::LintNames(args) => commands::lint::execute(&args, cli.json),
        Commands::FrontMatter(args) => commands::front_matter::execute(&args, cli.json),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            handle_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}
