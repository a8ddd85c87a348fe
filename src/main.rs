//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `txtra` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Ctrl-C handling
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::process;
use tokio_util::sync::CancellationToken;

use txtra::app::{cancel_on_interrupt, DomainSource};
use txtra::initialization::init_logger_with;
use txtra::{run_scan_with_cancel, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    // Nothing to check: show usage instead of waiting on a terminal
    if DomainSource::from_config(&config).is_none() {
        let _ = Config::command().print_help();
        process::exit(1);
    }

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format)
        .context("Failed to initialize logger")?;

    let cancel = CancellationToken::new();
    let interrupt = cancel_on_interrupt(cancel.clone());

    let result = run_scan_with_cancel(config, cancel.clone()).await;
    cancel.cancel();
    let _ = interrupt.await;

    match result {
        Ok(report) => {
            if let Some(path) = &report.output {
                eprintln!(
                    "Checked {} domain{} ({} matched record{}), report saved in {}",
                    report.total_domains,
                    if report.total_domains == 1 { "" } else { "s" },
                    report.matched_records,
                    if report.matched_records == 1 { "" } else { "s" },
                    path.display()
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("txtra error: {:#}", e);
            process::exit(1);
        }
    }
}
