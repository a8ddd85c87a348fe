//! Record sets and the recursive SPF include walk.
//!
//! This module provides:
//! - [`TxtRecord`]: one TXT value with its matches and SPF includes
//! - [`RecordSet`]: resolution and recursive scan of a root domain
//! - [`ScanContext`] / [`ScanSettings`]: collaborators, time bounds, cancellation
//! - [`VisitedDomains`]: the visited set shared by every branch of a walk

mod context;
mod record;
mod record_set;
mod visited;

// Re-export public API
pub use context::{BranchFailure, ScanContext, ScanSettings};
pub use record::TxtRecord;
pub use record_set::{IncludeCounts, RecordSet, RecordSetState};
pub use visited::VisitedDomains;
