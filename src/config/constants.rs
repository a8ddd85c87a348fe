//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including DNS timeouts, concurrency limits and default output paths.

// DNS timeouts
/// Per-query TXT lookup timeout in seconds.
/// Most TXT lookups complete in well under a second; 3s fails fast on dead resolvers.
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Number of attempts hickory makes per query before giving up.
pub const DNS_ATTEMPTS: usize = 2;
/// Overall deadline for one root domain scan, including every SPF include branch.
pub const SCAN_DEADLINE_SECS: u64 = 30;

// Concurrency
/// Number of root domains scanned at once.
pub const DEFAULT_MAX_CONCURRENCY: usize = 10;

// Output
/// Default CSV report path.
pub const DEFAULT_CSV_OUTPUT: &str = "./output.csv";
/// Default JSON report path.
pub const DEFAULT_JSON_OUTPUT: &str = "./output.json";

// SPF
/// Literal prefix that marks a TXT value as an SPF policy.
pub const SPF_PREFIX: &str = "v=spf1";
/// Name of the regex capture group holding a provider token.
pub const TOKEN_GROUP: &str = "token";
