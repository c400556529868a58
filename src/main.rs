//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_probe` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit code policy
//!
//! All probing is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use site_probe::initialization::init_logger_with;
use site_probe::{run_probe, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_probe(&config, std::io::stdout().lock()).await {
        Ok(summary) => {
            let code = summary.exit_code(config.fail_on);
            if code != 0 {
                process::exit(code);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("site_probe error: {:#}", e);
            process::exit(1);
        }
    }
}
