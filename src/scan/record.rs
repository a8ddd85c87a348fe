//! A single TXT value and what it matched.

use crate::dns::{extract_spf_includes, is_spf_record};
use crate::signature::{MatchResult, SignatureCatalog};

/// One decoded TXT character-string of a domain.
///
/// `source_domain` is the domain whose TXT record held the value; it differs
/// from the root domain for records pulled in through SPF includes.
#[derive(Debug, Clone)]
pub struct TxtRecord {
    value: String,
    source_domain: String,
    is_spf: bool,
    include_domains: Vec<String>,
    matches: Vec<MatchResult>,
}

impl TxtRecord {
    /// Creates an unscanned record. SPF detection and include extraction
    /// happen here.
    pub fn new(value: impl Into<String>, source_domain: impl Into<String>) -> Self {
        let value = value.into();
        let is_spf = is_spf_record(&value);
        let include_domains = if is_spf {
            extract_spf_includes(&value)
        } else {
            Vec::new()
        };
        Self {
            value,
            source_domain: source_domain.into(),
            is_spf,
            include_domains,
            matches: Vec::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn source_domain(&self) -> &str {
        &self.source_domain
    }

    pub fn is_spf(&self) -> bool {
        self.is_spf
    }

    /// `include:` targets in policy order (empty for non-SPF values).
    pub fn include_domains(&self) -> &[String] {
        &self.include_domains
    }

    /// Matches in catalog order.
    pub fn matches(&self) -> &[MatchResult] {
        &self.matches
    }

    /// True once a scan found at least one matching signature.
    pub fn is_matched(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Names of the matched providers, in catalog order.
    pub fn providers(&self) -> Vec<&str> {
        self.matches.iter().map(MatchResult::provider).collect()
    }

    /// Matches the value against every signature of `catalog`.
    ///
    /// Rescanning replaces the previous matches.
    pub fn scan(&mut self, catalog: &SignatureCatalog) -> &[MatchResult] {
        self.matches = catalog.scan_value(&self.value);
        &self.matches
    }
}
