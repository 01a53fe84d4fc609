//! Call log inspector
//!
//! Renders call log rows exported from a paired phone the same way the
//! contact card does, for checking labels, icons and callback actions.

mod cli;
mod config;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use cosmic_ext_call_log::{CallLogError, ContactInteraction};
use tracing::debug;

fn main() -> Result<()> {
    let result = run();
    if let Err(e) = &result {
        if let Some(message) = user_message(e) {
            eprintln!("{}", message);
        }
    }
    result
}

/// Friendly explanation for failures that came from call log data
fn user_message(error: &anyhow::Error) -> Option<String> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<CallLogError>())
        .map(CallLogError::user_message)
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(&cli)?;

    let config = Config::load(cli.config.as_deref())?;
    debug!("Using configuration: {:?}", config);

    match cli.command {
        Command::Show { row, json } => {
            let ctx = config.display_context()?;
            let call = render::interaction(render::read_row(&row)?, &config, &ctx)?;
            let rendered = render::render(&call, &ctx);

            if json {
                let out = serde_json::to_string_pretty(&rendered)
                    .context("Failed to serialize rendered entry")?;
                println!("{}", out);
            } else {
                print!("{}", rendered);
            }
        }
        Command::Intent { row } => {
            let ctx = config.display_context()?;
            let call = render::interaction(render::read_row(&row)?, &config, &ctx)?;
            let intent = call.intent(&ctx);

            let out =
                serde_json::to_string_pretty(&intent).context("Failed to serialize intent")?;
            println!("{}", out);
        }
        Command::DumpConfig => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic_ext_call_log::CallLogRow;

    #[test]
    fn test_user_message_from_row_error() {
        let err = CallLogRow::from_json("[]")
            .context("Failed to read row file row.json")
            .unwrap_err();
        let message = user_message(&err).unwrap();
        assert!(message.starts_with("Call log data format error"));
    }

    #[test]
    fn test_no_user_message_for_other_errors() {
        let err = anyhow::anyhow!("Failed to parse config file");
        assert_eq!(user_message(&err), None);
    }
}
