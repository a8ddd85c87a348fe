//! Provider signatures and TXT value matching.
//!
//! This module provides:
//! - `models`: the YAML template format
//! - `matcher`: compiled [`Signature`]s and [`MatchResult`]
//! - `catalog`: the ordered [`SignatureCatalog`] (built-in bundle or files)

mod catalog;
mod matcher;
mod models;

// Re-export public API
pub use catalog::{CatalogOptions, SignatureCatalog};
pub use matcher::{MatchResult, Rule, Signature};
pub use models::{RuleDefinition, SignatureInfo, SignatureTemplate};

#[cfg(test)]
mod tests;
