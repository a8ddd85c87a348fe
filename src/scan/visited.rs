//! Shared visited-domain set of one recursive scan.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

/// Domains already claimed by a scan, shared by every branch of the walk.
///
/// Clones share the same set. [`claim`](Self::claim) is an atomic
/// insert-if-absent, so two branches that discover the same include
/// concurrently never both resolve it.
#[derive(Debug, Clone, Default)]
pub struct VisitedDomains {
    inner: Arc<Mutex<HashSet<String>>>,
}

impl VisitedDomains {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Marks `domain` as visited. Returns false if it already was.
    pub fn claim(&self, domain: &str) -> bool {
        self.lock().insert(domain.to_string())
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.lock().contains(domain)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Visited domains, sorted.
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut domains: Vec<String> = self.lock().iter().cloned().collect();
        domains.sort();
        domains
    }
}
