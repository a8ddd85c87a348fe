//! Error type definitions.
//!
//! This module defines all error and info types used throughout the application.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Errors raised while normalizing a domain or computing its registrable scope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The input could not be turned into a hostname.
    #[error("Invalid domain '{0}'")]
    InvalidDomain(String),

    /// The public suffix data source could not answer for this hostname.
    #[error("Cannot compute registrable scope for '{host}': {reason}")]
    UnresolvableScope {
        /// Hostname whose scope was requested
        host: String,
        /// Why the public suffix source failed
        reason: String,
    },
}

/// Outcome of a failed TXT resolution.
///
/// `NoAnswer` and `Timeout` are expected for many domains. None of these
/// abort a scan; a failed branch simply contributes no records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsError {
    /// The name exists without TXT records, or does not exist at all.
    #[error("no TXT records found")]
    NoAnswer,

    /// The query (or the scan deadline) timed out.
    #[error("TXT lookup timed out")]
    Timeout,

    /// The root scan was cancelled while the query was in flight.
    #[error("TXT lookup cancelled")]
    Cancelled,

    /// Any other resolver failure (SERVFAIL, refused, network errors, ...).
    #[error("TXT lookup failed: {0}")]
    Other(String),
}

/// Errors raised while loading the signature catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A signature file or directory could not be read.
    #[error("Failed to read signatures from {path}: {source}")]
    Io {
        /// Offending path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A signature file is not a valid template (or list of templates).
    #[error("Failed to parse signatures from {origin}: {source}")]
    Parse {
        /// File name, or `built-in` for the embedded bundle
        origin: String,
        /// Underlying YAML error
        #[source]
        source: serde_yaml::Error,
    },

    /// A signature uses a rule type other than `regex`.
    #[error("Signature '{name}' uses unsupported rule type '{kind}'")]
    UnsupportedRule {
        /// Signature name
        name: String,
        /// Rule type found in the template
        kind: String,
    },

    /// A regex pattern failed to compile.
    #[error("Signature '{name}' has an invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// Signature name
        name: String,
        /// The pattern as written in the template
        pattern: String,
        /// Compilation error
        #[source]
        source: regex::Error,
    },

    /// No signature was found.
    #[error("No signatures found in {0}")]
    Empty(String),
}

/// Categories of per-domain failures counted during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Input errors
    InvalidDomain,
    // DNS errors
    DnsTxtNoAnswer,
    DnsTxtTimeout,
    DnsTxtLookupError,
    ScanCancelled,
}

/// Notable events of the SPF include walk that are not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    IncludeFollowed,       // include: target resolved as part of the chain
    IncludeOutOfScope,     // include: target outside the root's registrable scope
    IncludeAlreadyVisited, // include: target seen earlier in the chain
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidDomain => "Invalid domain",
            ErrorType::DnsTxtNoAnswer => "DNS TXT no answer",
            ErrorType::DnsTxtTimeout => "DNS TXT timeout",
            ErrorType::DnsTxtLookupError => "DNS TXT lookup error",
            ErrorType::ScanCancelled => "Scan cancelled",
        }
    }
}

impl From<&DnsError> for ErrorType {
    fn from(e: &DnsError) -> Self {
        match e {
            DnsError::NoAnswer => ErrorType::DnsTxtNoAnswer,
            DnsError::Timeout => ErrorType::DnsTxtTimeout,
            DnsError::Cancelled => ErrorType::ScanCancelled,
            DnsError::Other(_) => ErrorType::DnsTxtLookupError,
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::IncludeFollowed => "SPF include followed",
            InfoType::IncludeOutOfScope => "SPF include out of scope",
            InfoType::IncludeAlreadyVisited => "SPF include already visited",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_as_str() {
        assert_eq!(ErrorType::DnsTxtTimeout.as_str(), "DNS TXT timeout");
        assert_eq!(ErrorType::InvalidDomain.as_str(), "Invalid domain");
        assert_eq!(ErrorType::DnsTxtNoAnswer.to_string(), "DNS TXT no answer");
    }

    #[test]
    fn test_dns_error_maps_to_error_type() {
        assert_eq!(ErrorType::from(&DnsError::NoAnswer), ErrorType::DnsTxtNoAnswer);
        assert_eq!(ErrorType::from(&DnsError::Timeout), ErrorType::DnsTxtTimeout);
        assert_eq!(ErrorType::from(&DnsError::Cancelled), ErrorType::ScanCancelled);
        assert_eq!(
            ErrorType::from(&DnsError::Other("SERVFAIL".into())),
            ErrorType::DnsTxtLookupError
        );
    }

    #[test]
    fn test_all_types_have_string_representation() {
        for error_type in ErrorType::iter() {
            assert!(!error_type.as_str().is_empty(), "{:?}", error_type);
        }
        for info_type in InfoType::iter() {
            assert!(!info_type.as_str().is_empty(), "{:?}", info_type);
        }
    }

    #[test]
    fn test_domain_error_messages() {
        let err = DomainError::InvalidDomain("http://".into());
        assert_eq!(err.to_string(), "Invalid domain 'http://'");

        let err = DomainError::UnresolvableScope {
            host: "example.com".into(),
            reason: "list unavailable".into(),
        };
        assert!(err.to_string().contains("example.com"));
        assert!(err.to_string().contains("list unavailable"));
    }
}
