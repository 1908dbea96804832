use anyhow::{Context, Result};
use clap::Parser;
use helpful_log::{Destination, FileLogger, Level, Logger, Message, StreamLogger};
use tracing_subscriber::prelude::*;

mod cli;
mod config;

use cli::Cli;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = Config::resolve(&cli)?;
    tracing::debug!(level = %config.level, destination = ?config.destination, "Resolved logger config");

    let message = cli.message();
    match &config.destination {
        Some(path) => {
            let logger = FileLogger::new(path, &config.level);
            emit(&logger, cli.severity, message)
                .with_context(|| format!("Failed to log to {}", path.display()))
        }
        None => {
            let logger = StreamLogger::new(&config.level);
            emit(&logger, cli.severity, message).context("Failed to log to console")
        }
    }
}

fn emit<D: Destination>(logger: &Logger<D>, severity: Level, message: Message) -> Result<()> {
    logger.log_at(helpful_log::call_site!(), severity, message)?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("HELPFUL_LOG").unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("helpful={}", level))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
