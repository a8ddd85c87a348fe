//! Shared inputs of a scan.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::config::{Config, DNS_TIMEOUT_SECS, SCAN_DEADLINE_SECS};
use crate::dns::TxtResolver;
use crate::domain::PublicSuffixSource;
use crate::error_handling::DnsError;
use crate::signature::SignatureCatalog;

/// Time bounds and walk behavior of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSettings {
    /// Timeout of a single TXT query
    pub query_timeout: Duration,
    /// Overall deadline of one root scan, include branches included
    pub deadline: Duration,
    /// Follow SPF `include:` targets
    pub follow_includes: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            query_timeout: Duration::from_secs(DNS_TIMEOUT_SECS),
            deadline: Duration::from_secs(SCAN_DEADLINE_SECS),
            follow_includes: true,
        }
    }
}

impl From<&Config> for ScanSettings {
    fn from(config: &Config) -> Self {
        Self {
            query_timeout: Duration::from_secs(config.dns_timeout_secs),
            deadline: Duration::from_secs(config.scan_deadline_secs),
            follow_includes: !config.no_follow_includes,
        }
    }
}

/// A domain whose TXT lookup failed during a scan.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchFailure {
    pub domain: String,
    pub error: DnsError,
}

/// Collaborators and settings shared by every branch of a scan.
///
/// One context can serve any number of root scans; each root scan gets its
/// own visited set and deadline.
pub struct ScanContext<R> {
    resolver: R,
    catalog: Arc<SignatureCatalog>,
    suffixes: Arc<dyn PublicSuffixSource>,
    settings: ScanSettings,
    cancel: CancellationToken,
}

impl<R: TxtResolver> ScanContext<R> {
    pub fn new(
        resolver: R,
        catalog: Arc<SignatureCatalog>,
        suffixes: Arc<dyn PublicSuffixSource>,
    ) -> Self {
        Self {
            resolver,
            catalog,
            suffixes,
            settings: ScanSettings::default(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_settings(mut self, settings: ScanSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Uses `token` to cancel in-flight lookups. Cancelled lookups fail with
    /// [`DnsError::Cancelled`].
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn catalog(&self) -> &SignatureCatalog {
        &self.catalog
    }

    pub fn suffixes(&self) -> &dyn PublicSuffixSource {
        self.suffixes.as_ref()
    }

    pub fn settings(&self) -> &ScanSettings {
        &self.settings
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }
}
