//! Report inputs and options.

use std::path::PathBuf;

use crate::config::OutputFormat;
use crate::error_handling::DnsError;
use crate::scan::TxtRecord;

/// Outcome of one root domain, as handed to the reporters.
#[derive(Debug, Clone)]
pub struct DomainResult {
    /// Canonical hostname of the root domain
    pub domain: String,
    /// Records in discovery order (root first, then includes)
    pub records: Vec<TxtRecord>,
    /// Lookup error of the root domain itself
    pub error: Option<DnsError>,
}

impl DomainResult {
    /// Domains whose own lookup failed are left out of every report.
    pub fn is_reportable(&self) -> bool {
        self.error.is_none()
    }
}

/// Options for writing a report.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Report format
    pub format: OutputFormat,
    /// Output file path (stdout if None)
    pub output: Option<PathBuf>,
    /// Records were resolved but not matched
    pub no_scan: bool,
    /// Domains given to the run, invalid ones included
    pub input_domains: usize,
}
