//! PitchSync - football data synchronizer
//!
//! Command output (JSON) goes to stdout; logs go to stderr.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use pitchsync_cli::commands::dispatch;
use pitchsync_cli::utils::logging::init_logging;
use pitchsync_cli::{AppContext, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before clap so `env`-backed flags see it
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.global.log_json, cli.global.verbose);

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) => tracing::debug!(error = %err, "no .env loaded"),
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = AppContext::load(cli.global.config.clone()).context("failed to initialise")?;
    let output = dispatch(&ctx, &cli.command)
        .await
        .with_context(|| format!("command `{}` failed", cli.command.name()))?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
