//! packagist-sync CLI - keep a Packagist package in step with its repository.
//!
//! Meant to run as a CI step after a push: it asks the registry to refresh
//! the package and registers it when the registry does not know it yet.

#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod commands;
mod output;

use clap::Parser;
use commands::{Cli, Commands};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 if cli.quiet => Level::ERROR,
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    output::init(cli.no_ansi, cli.quiet);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            output::error(&format!("Failed to initialize: {e}"));
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run_command(cli.command)) {
        Ok(code) => code,
        Err(e) => {
            output::error(&format!("An error occurred: {e}"));
            ExitCode::FAILURE
        }
    }
}

async fn run_command(command: Commands) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Sync(args) => {
            commands::sync::run(args).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Exists(args) => {
            if commands::exists::run(args).await? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
