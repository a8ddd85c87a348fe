// Shared test helpers for building scan contexts and fixtures.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::sync::Arc;

use txtra::dns::MockResolver;
use txtra::scan::ScanContext;
use txtra::signature::{CatalogOptions, SignatureCatalog};

/// Loads the built-in catalog.
#[allow(dead_code)] // Used by other test files
pub fn builtin_catalog() -> Arc<SignatureCatalog> {
    Arc::new(
        SignatureCatalog::builtin(CatalogOptions::default())
            .expect("Failed to load built-in catalog"),
    )
}

/// Builds a scan context over a clone of `resolver` with the built-in
/// catalog and the compiled Public Suffix List.
#[allow(dead_code)] // Used by other test files
pub fn mock_context(resolver: &MockResolver) -> ScanContext<MockResolver> {
    ScanContext::new(resolver.clone(), builtin_catalog(), Arc::new(psl::List))
}

/// A resolver answering for a small corporate zone:
///
/// - `example.com` verifies Google and Microsoft, includes its own
///   `_spf.example.com` and a third party
/// - `_spf.example.com` includes SendGrid and `_spf2.example.com`
/// - `_spf2.example.com` loops back to `_spf.example.com`
#[allow(dead_code)] // Used by other test files
pub fn corporate_zone() -> MockResolver {
    MockResolver::new()
        .with_txt(
            "example.com",
            &[
                "google-site-verification=abc123",
                "v=spf1 include:_spf.example.com include:spf.protection.outlook.com ~all",
                "MS=ms98765",
            ],
        )
        .with_txt(
            "_spf.example.com",
            &["v=spf1 include:sendgrid.net include:_spf2.example.com -all"],
        )
        .with_txt(
            "_spf2.example.com",
            &["v=spf1 ip4:192.0.2.0/24 include:_spf.example.com -all"],
        )
        .with_txt("spf.protection.outlook.com", &["v=spf1 ip4:40.92.0.0/15 -all"])
        .with_txt("sendgrid.net", &["v=spf1 ip4:167.89.0.0/17 -all"])
}
