//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger (plain or JSON, to stderr)
//! - DNS resolver
//! - Public Suffix List
//!
//! All initialization functions return proper error types for error handling.

mod logger;
mod resolver;

use std::sync::Arc;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Initializes the Public Suffix List extractor.
///
/// The list is compiled into the binary, so this never fails.
pub fn init_extractor() -> Arc<psl::List> {
    Arc::new(psl::List)
}
