//! Domain normalization and registrable-scope utilities.
//!
//! This module turns raw user input (a URL or a bare hostname) into a
//! canonical hostname and derives its registrable domain (eTLD+1) using the
//! Public Suffix List. The registrable scope bounds the SPF include walk to
//! the organization that owns the root domain.
//!
//! Key items:
//! - [`DomainName`] - canonical hostname plus the raw input it came from
//! - [`PublicSuffixSource`] - the public suffix data collaborator
//! - [`registrable_scope()`] - eTLD+1 of a hostname, falling back to the hostname itself

use std::fmt;
use std::str::FromStr;

use psl::Psl;

use crate::error_handling::DomainError;

/// Source of public suffix data.
///
/// Implemented for [`psl::List`], whose rules are compiled into the binary and
/// therefore always available. Other sources (e.g. a downloaded list) report
/// an outage with [`DomainError::UnresolvableScope`].
pub trait PublicSuffixSource: Send + Sync {
    /// Returns the registrable domain of `host`, or `None` when `host` has no
    /// label beyond a public suffix.
    fn registrable_domain(&self, host: &str) -> Result<Option<String>, DomainError>;
}

impl PublicSuffixSource for psl::List {
    fn registrable_domain(&self, host: &str) -> Result<Option<String>, DomainError> {
        Ok(self
            .domain(host.as_bytes())
            .and_then(|domain| std::str::from_utf8(domain.as_bytes()).ok())
            .map(str::to_string))
    }
}

/// A hostname normalized from user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName {
    raw: String,
    hostname: String,
}

impl DomainName {
    /// Parses a URL or bare hostname.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDomain`] if the input is empty, if a
    /// scheme-prefixed input has no host, or if a bare hostname contains
    /// characters that can never appear in one.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let hostname = normalize(raw)?;
        Ok(Self {
            raw: raw.to_string(),
            hostname,
        })
    }

    /// The input exactly as supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The canonical hostname (lowercase, no trailing dot).
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Registrable scope (eTLD+1) of this hostname.
    pub fn registrable_scope(
        &self,
        source: &dyn PublicSuffixSource,
    ) -> Result<String, DomainError> {
        registrable_scope(source, &self.hostname)
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hostname)
    }
}

/// Normalizes a raw input into a canonical hostname.
///
/// Inputs carrying a URI scheme (`https://...`, `ftp://...`) are parsed as
/// URLs and reduced to their host component. Anything else is taken as a
/// bare hostname. Both are lowercased and stripped of a trailing dot.
///
/// # Errors
///
/// Returns [`DomainError::InvalidDomain`] when no hostname can be derived.
pub fn normalize(raw: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    let invalid = || DomainError::InvalidDomain(raw.to_string());

    let host = if has_uri_scheme(trimmed) {
        let parsed = url::Url::parse(trimmed).map_err(|_| invalid())?;
        parsed.host_str().ok_or_else(invalid)?.to_string()
    } else {
        if trimmed.contains(|c: char| c.is_whitespace() || c == '/') {
            return Err(invalid());
        }
        trimmed.to_string()
    };

    let host = canonical_host(&host);
    if host.is_empty() || host.starts_with('.') || host.contains("..") {
        return Err(invalid());
    }
    Ok(host)
}

/// Computes the registrable scope (eTLD+1) of `host`.
///
/// `sub.example.co.uk` yields `example.co.uk`; a hostname without a label
/// beyond its public suffix yields the hostname itself.
///
/// # Errors
///
/// Returns [`DomainError::UnresolvableScope`] only when the public suffix
/// source itself fails.
pub fn registrable_scope(
    source: &dyn PublicSuffixSource,
    host: &str,
) -> Result<String, DomainError> {
    let host = canonical_host(host);
    Ok(source.registrable_domain(&host)?.unwrap_or(host))
}

/// Lowercases a hostname and strips surrounding whitespace and the root dot.
pub(crate) fn canonical_host(host: &str) -> String {
    host.trim().trim_end_matches('.').to_ascii_lowercase()
}

/// Returns true when `input` starts with `scheme://` (RFC 3986 scheme syntax).
fn has_uri_scheme(input: &str) -> bool {
    match input.split_once("://") {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
