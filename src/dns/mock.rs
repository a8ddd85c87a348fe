//! In-memory TXT resolver.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use super::records::TxtResolver;
use crate::domain::canonical_host;
use crate::error_handling::DnsError;

/// A [`TxtResolver`] answering from a fixed table.
///
/// Unknown names answer [`DnsError::NoAnswer`]. Every query is recorded so
/// tests can assert which names were (or were not) looked up. Clones share
/// the same table and query log.
///
/// ```
/// use txtra::dns::MockResolver;
///
/// let resolver = MockResolver::new()
///     .with_txt("example.com", &["v=spf1 include:_spf.example.com ~all"])
///     .with_txt("_spf.example.com", &["v=spf1 ip4:192.0.2.1 ~all"]);
/// assert!(resolver.queries().is_empty());
/// ```
#[derive(Clone, Default)]
pub struct MockResolver {
    answers: Arc<Mutex<HashMap<String, Result<Vec<String>, DnsError>>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockResolver {
    /// Creates an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `domain` with the given TXT values.
    pub fn with_txt(self, domain: &str, values: &[&str]) -> Self {
        let values = values.iter().map(|v| v.to_string()).collect();
        lock(&self.answers).insert(canonical_host(domain), Ok(values));
        self
    }

    /// Fails every query for `domain` with `error`.
    pub fn with_error(self, domain: &str, error: DnsError) -> Self {
        lock(&self.answers).insert(canonical_host(domain), Err(error));
        self
    }

    /// Delays every answer for `domain`.
    pub fn with_delay(self, domain: &str, delay: Duration) -> Self {
        lock(&self.delays).insert(canonical_host(domain), delay);
        self
    }

    /// Names queried so far, in query order.
    pub fn queries(&self) -> Vec<String> {
        lock(&self.queries).clone()
    }

    /// Number of times `domain` was queried.
    pub fn query_count(&self, domain: &str) -> usize {
        let domain = canonical_host(domain);
        lock(&self.queries).iter().filter(|q| **q == domain).count()
    }
}

impl TxtResolver for MockResolver {
    async fn resolve_txt(&self, host: &str) -> Result<Vec<String>, DnsError> {
        let host = canonical_host(host);
        lock(&self.queries).push(host.clone());

        let delay = lock(&self.delays).get(&host).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let answer = lock(&self.answers).get(&host).cloned();
        answer.unwrap_or(Err(DnsError::NoAnswer))
    }
}
