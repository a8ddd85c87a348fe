//! DNS TXT resolution and SPF helpers.
//!
//! This module provides:
//! - The [`TxtResolver`] seam and its hickory-backed implementation
//! - [`MockResolver`], an in-memory resolver for tests and offline use
//! - SPF helpers: [`is_spf_record`] and [`extract_spf_includes`]

mod extract;
mod mock;
mod records;

// Re-export public API
pub use extract::{extract_spf_includes, is_spf_record};
pub use mock::MockResolver;
pub use records::{HickoryTxtResolver, TxtResolver};

#[cfg(test)]
mod tests;
