//! Main application modules.
//!
//! This module provides domain input handling, interrupt handling and
//! statistics printing used by the main application.

pub mod input;
pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use input::{parse_domain_lines, read_domains, DomainSource};
pub use shutdown::cancel_on_interrupt;
pub use statistics::{print_error_statistics, print_simple_summary};
