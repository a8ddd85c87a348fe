//! txtra library: TXT record provider identification
//!
//! This library resolves the DNS TXT records of domains, follows their SPF
//! `include:` chains within the domain's own organization, and matches every
//! value against a catalog of provider signatures (verification tokens, SPF
//! senders, ...).
//!
//! # Example
//!
//! ```no_run
//! use txtra::{run_scan, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: Some(std::path::PathBuf::from("domains.txt")),
//!     csv: true,
//!     max_concurrency: 20,
//!     ..Default::default()
//! };
//!
//! let report = run_scan(config).await?;
//! println!("Checked {} domains: {} resolved, {} failed",
//!          report.total_domains, report.resolved, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! Lower-level building blocks live in [`scan`] ([`scan::RecordSet`]),
//! [`signature`] ([`signature::SignatureCatalog`]) and [`dns`].
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod app;
pub mod config;
pub mod dns;
pub mod domain;
pub mod error_handling;
pub mod export;
pub mod initialization;
mod run;
pub mod scan;
pub mod signature;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use run::{
    init_scan_resources, load_catalog, run_scan, run_scan_with_cancel, run_scan_with_context,
    scan_domain, scan_domains, ScanReport, ScanResources,
};
