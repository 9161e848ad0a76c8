mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use std::io::Write;
use tracing_subscriber::EnvFilter;
use v6_core::{LoggingConfig, V6Config};

fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => V6Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => V6Config::default(),
    };
    init_tracing(&config.logging);

    let outcomes = commands::run(&cli.command, &config.abbreviation);

    let mut invalid = 0usize;
    let mut out = std::io::stdout().lock();
    for outcome in outcomes {
        match outcome {
            Ok(report) if cli.json => writeln!(out, "{}", serde_json::to_string(&report)?)?,
            Ok(report) => writeln!(out, "{}", report.render())?,
            Err(err) => {
                invalid += 1;
                eprintln!("error: {err}");
            }
        }
    }
    out.flush()?;

    if invalid > 0 {
        tracing::warn!(invalid, "some inputs were not valid IPv6 addresses");
        std::process::exit(1);
    }
    Ok(())
}
