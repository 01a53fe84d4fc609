//! Command line interface and logging setup

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{fmt, EnvFilter};

/// Call log inspector command-line interface
#[derive(Parser, Debug)]
#[command(name = "cosmic-ext-call-log")]
#[command(about = "Inspect how call log entries render on the contact card", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Set log level (error, warn, info, debug, trace)
    #[arg(short, long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Enable JSON structured logging
    #[arg(long)]
    pub json_logs: bool,

    /// Show timestamps in logs
    #[arg(long)]
    pub timestamps: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a call log row as a contact card entry
    Show {
        /// JSON file holding one call log row ("-" for stdin)
        row: PathBuf,

        /// Print the rendered entry as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the action launched when the entry is tapped
    Intent {
        /// JSON file holding one call log row ("-" for stdin)
        row: PathBuf,
    },

    /// Show the effective configuration
    DumpConfig,
}

/// Initialize logging based on CLI configuration
pub fn init_logging(cli: &Cli) -> Result<()> {
    let log_level = cli.log_level.parse::<Level>().with_context(|| {
        format!(
            "Invalid log level '{}'. Valid levels: error, warn, info, debug, trace",
            cli.log_level
        )
    })?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level.as_str()))
        .context("Failed to create log filter")?;

    // Logs go to stderr so rendered output stays pipeable
    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match (cli.json_logs, cli.timestamps) {
        (true, true) => subscriber.with_timer(ChronoLocal::rfc_3339()).json().init(),
        (true, false) => subscriber.without_time().json().init(),
        (false, true) => subscriber.with_timer(ChronoLocal::rfc_3339()).init(),
        (false, false) => subscriber.without_time().init(),
    }

    info!(
        "Logging initialized: level={}, json={}, timestamps={}",
        log_level, cli.json_logs, cli.timestamps
    );

    Ok(())
}
