//! Resolution and recursive SPF include walk of one root domain.

use std::collections::{HashMap, HashSet};

use futures::future::{join_all, BoxFuture};
use log::{debug, warn};
use tokio::time::Instant;

use super::context::{BranchFailure, ScanContext};
use super::record::TxtRecord;
use super::visited::VisitedDomains;
use crate::dns::TxtResolver;
use crate::domain::{registrable_scope, DomainName};
use crate::error_handling::{DnsError, DomainError};

/// Lifecycle of a [`RecordSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSetState {
    /// Nothing resolved yet
    Created,
    /// TXT records fetched (possibly none), not matched
    Resolved,
    /// Records matched and includes followed; terminal
    Scanned,
}

/// TXT answers fetched ahead of the walk, keyed by domain. An entry is
/// consumed by the record set that claims the domain.
type Answers = HashMap<String, Result<Vec<String>, DnsError>>;

/// What happened to the include targets seen during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IncludeCounts {
    /// In scope and scanned as a child record set
    pub followed: usize,
    /// Registrable scope differs from the root's
    pub out_of_scope: usize,
    /// Already claimed by another branch (or a cycle)
    pub already_visited: usize,
}

impl IncludeCounts {
    fn merge(&mut self, other: IncludeCounts) {
        self.followed += other.followed;
        self.out_of_scope += other.out_of_scope;
        self.already_visited += other.already_visited;
    }
}

/// TXT records of a root domain and of the in-scope domains its SPF policy
/// includes, in discovery order.
///
/// Every domain is resolved at most once per root scan: child record sets
/// share the root's [`VisitedDomains`].
///
/// ```no_run
/// use std::sync::Arc;
/// use txtra::dns::MockResolver;
/// use txtra::domain::DomainName;
/// use txtra::scan::{RecordSet, ScanContext};
/// use txtra::signature::{CatalogOptions, SignatureCatalog};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let resolver = MockResolver::new().with_txt("example.com", &["google-site-verification=abc"]);
/// let catalog = Arc::new(SignatureCatalog::builtin(CatalogOptions::default())?);
/// let ctx = ScanContext::new(resolver, catalog, Arc::new(psl::List));
///
/// let mut record_set = RecordSet::new(&DomainName::parse("example.com")?);
/// for record in record_set.scan(&ctx, None).await? {
///     println!("{} {:?}", record.value(), record.providers());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RecordSet {
    root: String,
    records: Vec<TxtRecord>,
    visited: VisitedDomains,
    state: RecordSetState,
    claimed: bool,
    failures: Vec<BranchFailure>,
    includes: IncludeCounts,
}

impl RecordSet {
    /// Creates a record set for a top-level query with a fresh visited set.
    pub fn new(root: &DomainName) -> Self {
        Self::with_visited(root.hostname(), VisitedDomains::new())
    }

    /// Creates a record set sharing an existing visited set.
    ///
    /// If `root` is already in `visited`, the record set resolves nothing.
    pub fn with_visited(root: impl Into<String>, visited: VisitedDomains) -> Self {
        Self {
            root: root.into(),
            records: Vec::new(),
            visited,
            state: RecordSetState::Created,
            claimed: false,
            failures: Vec::new(),
            includes: IncludeCounts::default(),
        }
    }

    /// Child of a walk whose root was already claimed by the parent.
    fn claimed_child(root: String, visited: VisitedDomains) -> Self {
        let mut child = Self::with_visited(root, visited);
        child.claimed = true;
        child
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn state(&self) -> RecordSetState {
        self.state
    }

    /// Records gathered so far, in discovery order.
    pub fn records(&self) -> &[TxtRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TxtRecord> {
        self.records
    }

    pub fn visited(&self) -> &VisitedDomains {
        &self.visited
    }

    /// Lookups that failed, root and include branches alike.
    pub fn failures(&self) -> &[BranchFailure] {
        &self.failures
    }

    /// The lookup error of the root domain itself, if any.
    pub fn root_error(&self) -> Option<&DnsError> {
        self.failures
            .iter()
            .find(|failure| failure.domain == self.root)
            .map(|failure| &failure.error)
    }

    pub fn include_counts(&self) -> IncludeCounts {
        self.includes
    }

    /// Resolves the root's TXT records without matching them.
    ///
    /// A lookup failure leaves the set empty and is reported through
    /// [`failures`](Self::failures). Calling this on a set that is already
    /// resolved does nothing.
    pub async fn resolve<R: TxtResolver>(&mut self, ctx: &ScanContext<R>) -> &[TxtRecord] {
        let deadline = Instant::now() + ctx.settings().deadline;
        self.resolve_root(ctx, deadline, &mut Answers::new()).await;
        &self.records
    }

    /// Resolves, matches and walks the SPF includes of the root domain.
    ///
    /// `base_scope` bounds the walk: include targets whose registrable scope
    /// differs are skipped. `None` uses the root's own registrable scope.
    /// Failed lookups are not errors; they leave their branch empty and are
    /// reported through [`failures`](Self::failures). A scan on a set that is
    /// already scanned returns the existing records.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnresolvableScope`] if the public suffix source
    /// fails.
    pub async fn scan<R: TxtResolver>(
        &mut self,
        ctx: &ScanContext<R>,
        base_scope: Option<String>,
    ) -> Result<&[TxtRecord], DomainError> {
        if self.state != RecordSetState::Scanned {
            let base_scope = match base_scope {
                Some(scope) => scope,
                None => registrable_scope(ctx.suffixes(), &self.root)?,
            };
            let deadline = Instant::now() + ctx.settings().deadline;
            self.walk(ctx, &base_scope, deadline, &mut Answers::new())
                .await?;
        }
        Ok(&self.records)
    }

    /// Depth-first walk. The answers of a set's includes are fetched
    /// concurrently, but each include is claimed only when the walk reaches
    /// it, so the result order does not depend on lookup latency.
    fn walk<'a, R: TxtResolver>(
        &'a mut self,
        ctx: &'a ScanContext<R>,
        base_scope: &'a str,
        deadline: Instant,
        answers: &'a mut Answers,
    ) -> BoxFuture<'a, Result<(), DomainError>> {
        Box::pin(async move {
            self.resolve_root(ctx, deadline, answers).await;

            for record in &mut self.records {
                record.scan(ctx.catalog());
            }

            if ctx.settings().follow_includes {
                let targets = self.in_scope_includes(ctx, base_scope)?;
                self.prefetch(ctx, &targets, deadline, answers).await;

                for target in targets {
                    if !self.visited.claim(&target) {
                        debug!("Skipping include {} of {}: already visited", target, self.root);
                        self.includes.already_visited += 1;
                        continue;
                    }
                    debug!("Following include {} of {}", target, self.root);
                    self.includes.followed += 1;

                    let mut child = RecordSet::claimed_child(target, self.visited.clone());
                    child.walk(ctx, base_scope, deadline, answers).await?;
                    self.records.extend(child.records);
                    self.failures.extend(child.failures);
                    self.includes.merge(child.includes);
                }
            }

            self.state = RecordSetState::Scanned;
            Ok(())
        })
    }

    /// Claims the root and fetches its records, once.
    async fn resolve_root<R: TxtResolver>(
        &mut self,
        ctx: &ScanContext<R>,
        deadline: Instant,
        answers: &mut Answers,
    ) {
        if self.state != RecordSetState::Created {
            return;
        }
        self.state = RecordSetState::Resolved;

        if !self.claimed && !self.visited.claim(&self.root) {
            debug!("{} already visited, nothing to resolve", self.root);
            return;
        }
        self.claimed = true;

        let answer = match answers.remove(&self.root) {
            Some(answer) => answer,
            None => lookup(ctx, &self.root, deadline).await,
        };
        match answer {
            Ok(values) => {
                let root = &self.root;
                self.records = values
                    .into_iter()
                    .map(|value| TxtRecord::new(value, root.as_str()))
                    .collect();
            }
            Err(error) => {
                match &error {
                    DnsError::NoAnswer => debug!("No TXT records for {}", self.root),
                    DnsError::Cancelled => debug!("TXT lookup for {} cancelled", self.root),
                    DnsError::Timeout => warn!("TXT lookup for {} timed out", self.root),
                    DnsError::Other(msg) => warn!("TXT lookup for {} failed: {}", self.root, msg),
                }
                self.failures.push(BranchFailure {
                    domain: self.root.clone(),
                    error,
                });
            }
        }
    }

    /// Include targets of the SPF records that share `base_scope`, in
    /// policy order. Out-of-scope targets are counted and dropped.
    fn in_scope_includes<R: TxtResolver>(
        &mut self,
        ctx: &ScanContext<R>,
        base_scope: &str,
    ) -> Result<Vec<String>, DomainError> {
        let targets: Vec<String> = self
            .records
            .iter()
            .filter(|record| record.is_spf())
            .flat_map(|record| record.include_domains().iter().cloned())
            .collect();

        let mut in_scope = Vec::with_capacity(targets.len());
        for target in targets {
            let scope = registrable_scope(ctx.suffixes(), &target)?;
            if scope != base_scope {
                debug!(
                    "Skipping include {} of {}: scope {} is outside {}",
                    target, self.root, scope, base_scope
                );
                self.includes.out_of_scope += 1;
                continue;
            }
            in_scope.push(target);
        }
        Ok(in_scope)
    }

    /// Looks up every target that is neither visited nor already fetched,
    /// all at once.
    async fn prefetch<R: TxtResolver>(
        &self,
        ctx: &ScanContext<R>,
        targets: &[String],
        deadline: Instant,
        answers: &mut Answers,
    ) {
        let mut seen = HashSet::new();
        let pending: Vec<&String> = targets
            .iter()
            .filter(|target| {
                !self.visited.contains(target.as_str())
                    && !answers.contains_key(target.as_str())
                    && seen.insert(target.as_str())
            })
            .collect();
        if pending.is_empty() {
            return;
        }

        let fetched = join_all(pending.iter().map(|target| lookup(ctx, target, deadline))).await;
        for (target, answer) in pending.into_iter().zip(fetched) {
            answers.insert(target.clone(), answer);
        }
    }
}

/// One TXT lookup bounded by the query timeout, the scan deadline and the
/// cancellation token, whichever comes first.
async fn lookup<R: TxtResolver>(
    ctx: &ScanContext<R>,
    host: &str,
    deadline: Instant,
) -> Result<Vec<String>, DnsError> {
    let now = Instant::now();
    if now >= deadline {
        return Err(DnsError::Timeout);
    }
    let limit = deadline.min(now + ctx.settings().query_timeout);

    tokio::select! {
        biased;
        _ = ctx.cancellation().cancelled() => Err(DnsError::Cancelled),
        result = tokio::time::timeout_at(limit, ctx.resolver().resolve_txt(host)) => match result {
            Ok(answer) => answer,
            Err(_) => Err(DnsError::Timeout),
        },
    }
}
