//! Run finalization: report and statistics.

use anyhow::Result;

use crate::app::{print_error_statistics, print_simple_summary};
use crate::config::Config;
use crate::error_handling::ProcessingStats;
use crate::export::{write_report, DomainResult, ExportOptions};

use super::ScanReport;

/// Writes the report selected by `config` and builds the [`ScanReport`].
///
/// # Errors
///
/// Returns an error if the report cannot be written.
pub fn finalize_scan(
    config: &Config,
    total_domains: usize,
    results: &[DomainResult],
    stats: &ProcessingStats,
    elapsed_seconds: f64,
) -> Result<ScanReport> {
    let options = ExportOptions {
        format: config.output_format(),
        output: config.output_path(),
        no_scan: config.no_scan,
        input_domains: total_domains,
    };
    write_report(results, &options)?;

    let reported: Vec<&DomainResult> = results.iter().filter(|r| r.is_reportable()).collect();
    let resolved = reported.len();
    let failed = total_domains.saturating_sub(resolved);
    let matched_records = reported
        .iter()
        .flat_map(|result| result.records.iter())
        .filter(|record| record.is_matched())
        .count();

    print_error_statistics(stats);
    print_simple_summary(
        total_domains,
        resolved,
        failed,
        matched_records,
        elapsed_seconds,
    );

    Ok(ScanReport {
        total_domains,
        resolved,
        failed,
        matched_records,
        output: options.output,
        elapsed_seconds,
    })
}
