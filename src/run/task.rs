//! Per-domain scanning.

use futures::stream::{self, StreamExt, TryStreamExt};
use log::warn;

use crate::dns::TxtResolver;
use crate::domain::DomainName;
use crate::error_handling::{DomainError, ErrorType, InfoType, ProcessingStats};
use crate::export::DomainResult;
use crate::scan::{RecordSet, ScanContext};

/// Scans one raw input.
///
/// Invalid inputs are logged, counted and skipped (`Ok(None)`). Failed
/// lookups are counted and end up in the returned result; only a public
/// suffix outage is an error.
pub async fn scan_domain<R: TxtResolver>(
    ctx: &ScanContext<R>,
    input: &str,
    no_scan: bool,
    stats: &ProcessingStats,
) -> Result<Option<DomainResult>, DomainError> {
    let domain = match DomainName::parse(input) {
        Ok(domain) => domain,
        Err(e) => {
            warn!("Skipping input: {e}");
            stats.increment_error(ErrorType::InvalidDomain);
            return Ok(None);
        }
    };

    let mut record_set = RecordSet::new(&domain);
    if no_scan {
        record_set.resolve(ctx).await;
    } else {
        record_set.scan(ctx, None).await?;
    }

    for failure in record_set.failures() {
        stats.increment_error(ErrorType::from(&failure.error));
    }
    let includes = record_set.include_counts();
    stats.add_info(InfoType::IncludeFollowed, includes.followed);
    stats.add_info(InfoType::IncludeOutOfScope, includes.out_of_scope);
    stats.add_info(InfoType::IncludeAlreadyVisited, includes.already_visited);

    let error = record_set.root_error().cloned();
    Ok(Some(DomainResult {
        domain: domain.hostname().to_string(),
        records: record_set.into_records(),
        error,
    }))
}

/// Scans `inputs` with at most `max_concurrency` domains in flight.
///
/// Results keep the input order; invalid inputs are left out.
pub async fn scan_domains<R: TxtResolver>(
    ctx: &ScanContext<R>,
    inputs: &[String],
    no_scan: bool,
    max_concurrency: usize,
    stats: &ProcessingStats,
) -> Result<Vec<DomainResult>, DomainError> {
    let results: Vec<Option<DomainResult>> = stream::iter(inputs)
        .map(|input| scan_domain(ctx, input, no_scan, stats))
        .buffered(max_concurrency.max(1))
        .try_collect()
        .await?;
    Ok(results.into_iter().flatten().collect())
}
