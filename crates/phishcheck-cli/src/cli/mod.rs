//! CLI for the phishcheck URL validator.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use phishcheck_core::config;
use std::time::Duration;

use commands::{run_check, run_interactive};

/// Top-level CLI for phishcheck.
#[derive(Debug, Parser)]
#[command(name = "phishcheck")]
#[command(about = "phishcheck: heuristic URL phishing checker", long_about = None)]
pub struct Cli {
    /// Fetch timeout in seconds (overrides config.toml). Must be at least 1.
    #[arg(
        long,
        global = true,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(config::MIN_TIMEOUT_SECS..)
    )]
    pub timeout: Option<u64>,

    /// Defaults to `interactive` when omitted.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Prompt for URLs one per line until `quit`.
    Interactive,

    /// Check the given URLs once and print a report for each.
    Check {
        /// URLs to check; `http://` is prepended when no scheme is given.
        #[arg(required = true)]
        urls: Vec<String>,

        /// Print a JSON array instead of human-readable reports.
        #[arg(long)]
        json: bool,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let mut opts = cfg.fetch_options();
        if let Some(secs) = cli.timeout {
            opts.timeout = Duration::from_secs(secs);
        }

        match cli.command.unwrap_or(CliCommand::Interactive) {
            CliCommand::Interactive => run_interactive(&cfg.default_scheme, opts).await?,
            CliCommand::Check { urls, json } => {
                run_check(&urls, json, &cfg.default_scheme, opts).await?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
