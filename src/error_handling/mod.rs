//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (thiserror) for domains, DNS, catalog and initialization
//! - Processing statistics tracking (per-domain errors, include-walk events)

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{
    CatalogError, DnsError, DomainError, ErrorType, InfoType, InitializationError,
};
