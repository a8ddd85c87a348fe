//! Result reporters.
//!
//! This module renders the records of a run as colored terminal lines, a
//! CSV file or a JSON document. Domains whose own lookup failed are left out
//! of every format.

mod csv;
mod json;
mod stdout;
mod types;
mod writer;

use anyhow::{Context, Result};

use crate::config::OutputFormat;

pub use self::csv::write_csv;
pub use json::{build_json, write_json};
pub use stdout::{format_record, write_text};
pub use types::{DomainResult, ExportOptions};

/// Writes `results` in the format and to the destination of `options`.
///
/// Returns the number of lines (stdout), rows (CSV) or domains (JSON) written.
pub fn write_report(results: &[DomainResult], options: &ExportOptions) -> Result<usize> {
    let mut out = writer::open_output(options.output.as_deref())?;
    let written = match options.format {
        OutputFormat::Stdout => {
            let color = options.output.is_none();
            write_text(&mut out, results, options.input_domains, options.no_scan, color)
        }
        OutputFormat::Csv => write_csv(&mut out, results, options.no_scan),
        OutputFormat::Json => write_json(&mut out, results, options.no_scan),
    }
    .context("Failed to write report")?;

    if let Some(path) = &options.output {
        log::info!("Report written to {}", path.display());
    }
    Ok(written)
}
