//! End-of-run statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats};

/// Logs the non-zero error and include-walk counters.
pub fn print_error_statistics(stats: &ProcessingStats) {
    let total_errors = stats.total_errors();
    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    let info_lines: Vec<(InfoType, usize)> = InfoType::iter()
        .map(|info_type| (info_type, stats.get_info_count(info_type)))
        .filter(|(_, count)| *count > 0)
        .collect();
    if !info_lines.is_empty() {
        info!("SPF Include Counts:");
        for (info_type, count) in info_lines {
            info!("   {}: {}", info_type.as_str(), count);
        }
    }
}

/// Logs the one-line summary of a run.
pub fn print_simple_summary(
    total_domains: usize,
    resolved: usize,
    failed: usize,
    matched_records: usize,
    elapsed_seconds: f64,
) {
    info!(
        "Checked {} domain{} ({} resolved, {} failed, {} matched record{}) in {:.1}s",
        total_domains,
        if total_domains == 1 { "" } else { "s" },
        resolved,
        failed,
        matched_records,
        if matched_records == 1 { "" } else { "s" },
        elapsed_seconds
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_statistics_with_counts() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::DnsTxtTimeout);
        stats.add_info(InfoType::IncludeFollowed, 2);
        print_error_statistics(&stats);
        print_simple_summary(3, 2, 1, 4, 0.5);
    }

    #[test]
    fn test_print_statistics_empty() {
        print_error_statistics(&ProcessingStats::new());
    }
}
