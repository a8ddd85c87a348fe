//! Resources of a run.

use std::sync::Arc;

use crate::dns::HickoryTxtResolver;
use crate::error_handling::ProcessingStats;
use crate::scan::ScanContext;

/// Everything initialized before the first domain is scanned.
pub struct ScanResources {
    /// Resolver, catalog, public suffix list, settings and cancellation
    pub ctx: ScanContext<HickoryTxtResolver>,
    /// Error and include-walk counters of the run
    pub stats: Arc<ProcessingStats>,
}
