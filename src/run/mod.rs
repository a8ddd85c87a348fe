//! Orchestration of one run.
//!
//! Acquire domains, initialize resources, scan every domain with bounded
//! concurrency, then write the report.

mod finalize;
mod init;
mod resources;
mod task;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use tokio_util::sync::CancellationToken;

use crate::app::{read_domains, DomainSource};
use crate::config::Config;
use crate::dns::TxtResolver;
use crate::error_handling::ProcessingStats;
use crate::scan::ScanContext;

pub use init::{init_scan_resources, load_catalog};
pub use resources::ScanResources;
pub use task::{scan_domain, scan_domains};

/// Results of a run.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Number of inputs, invalid ones included
    pub total_domains: usize,
    /// Domains whose TXT records were resolved
    pub resolved: usize,
    /// Invalid inputs plus domains whose lookup failed
    pub failed: usize,
    /// Records that matched at least one signature
    pub matched_records: usize,
    /// Report file (None for stdout)
    pub output: Option<PathBuf>,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs a scan with the provided configuration.
///
/// This is the main entry point for the library. It reads the domains
/// selected by the config, scans them against the signature catalog and
/// writes the chosen report.
///
/// # Errors
///
/// This function will return an error if:
/// - There is no input, or the input cannot be read
/// - The signature catalog cannot be loaded
/// - The DNS resolver cannot be initialized
/// - The report cannot be written
///
/// Per-domain failures are not errors; they are counted in the report.
///
/// # Example
///
/// ```no_run
/// use txtra::{run_scan, Config};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config {
///     domain: Some("example.com".to_string()),
///     json: true,
///     ..Default::default()
/// };
/// let report = run_scan(config).await?;
/// println!("{} matched records", report.matched_records);
/// # Ok(())
/// # }
/// ```
pub async fn run_scan(config: Config) -> Result<ScanReport> {
    run_scan_with_cancel(config, CancellationToken::new()).await
}

/// Like [`run_scan`], stopping in-flight lookups when `cancel` fires.
pub async fn run_scan_with_cancel(config: Config, cancel: CancellationToken) -> Result<ScanReport> {
    let source = DomainSource::from_config(&config)
        .context("No input: use --domain, --file or pipe domains on stdin")?;
    let inputs = read_domains(&source).await?;

    let resources = init_scan_resources(&config, cancel).await?;
    run_scan_with_context(&config, &resources.ctx, &inputs, &resources.stats).await
}

/// Scans `inputs` with an already built context and writes the report.
///
/// Used by [`run_scan`]; also the entry point for callers that bring their
/// own resolver.
pub async fn run_scan_with_context<R: TxtResolver>(
    config: &Config,
    ctx: &ScanContext<R>,
    inputs: &[String],
    stats: &ProcessingStats,
) -> Result<ScanReport> {
    let start_time = Instant::now();
    info!("Checking {} domains", inputs.len());
    if config.no_scan {
        info!("No-scan mode: TXT records are resolved but not matched");
    }

    let results = scan_domains(ctx, inputs, config.no_scan, config.max_concurrency, stats)
        .await
        .context("Scan aborted")?;

    finalize::finalize_scan(
        config,
        inputs.len(),
        &results,
        stats,
        start_time.elapsed().as_secs_f64(),
    )
}
