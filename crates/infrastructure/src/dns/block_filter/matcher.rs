use super::domain_set::DomainSet;
use arc_swap::ArcSwap;
use sieve_dns_application::ports::DomainMatcher;
use sieve_dns_domain::validators::{normalize_domain, validate_domain_name};
use sieve_dns_domain::{BlocklistStats, DomainError};
use std::borrow::Cow;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::SystemTime;
use tracing::{debug, info};

/// Active blocklist.
///
/// Readers take a lock-free snapshot through `ArcSwap`. Writers serialize on
/// `writer` so an `add` can never land in a snapshot that a concurrent
/// `reload` is about to replace. `reload` builds the new set off to the side
/// and publishes it with a single `store`.
pub struct BlocklistMatcher {
    snapshot: ArcSwap<DomainSet>,
    writer: Mutex<Option<SystemTime>>,
}

impl BlocklistMatcher {
    pub fn new() -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(DomainSet::new()),
            writer: Mutex::new(None),
        }
    }

    /// Build a matcher already loaded with `domains`.
    pub fn with_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let matcher = Self::new();
        matcher.reload_from(domains);
        matcher
    }

    pub fn len(&self) -> usize {
        self.snapshot.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The currently published set. Stays valid across later reloads.
    pub fn snapshot(&self) -> Arc<DomainSet> {
        self.snapshot.load_full()
    }

    pub fn matches(&self, domain: &str) -> bool {
        let name = normalized(domain);
        self.snapshot.load().matches(&name)
    }

    /// Replace the active set. Invalid entries are skipped.
    pub fn reload_from<I, S>(&self, domains: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let next = DomainSet::new();
        let mut rejected = 0usize;
        for raw in domains {
            let name = normalize_domain(raw.as_ref());
            if validate_domain_name(&name).is_ok() {
                next.insert(&name);
            } else {
                rejected += 1;
                debug!(domain = %raw.as_ref(), "Skipping invalid blocklist entry");
            }
        }
        let accepted = next.len();

        let mut last_reload = self.lock_writer();
        self.snapshot.store(Arc::new(next));
        *last_reload = Some(SystemTime::now());
        drop(last_reload);

        info!(domains = accepted, rejected, "Blocklist snapshot published");
        accepted
    }

    fn lock_writer(&self) -> MutexGuard<'_, Option<SystemTime>> {
        // The guarded value is a timestamp; a panicked writer cannot leave it torn.
        self.writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for BlocklistMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainMatcher for BlocklistMatcher {
    fn is_blocked(&self, domain: &str) -> Result<bool, DomainError> {
        Ok(self.matches(domain))
    }

    fn add(&self, domain: &str) -> bool {
        let name = normalize_domain(domain);
        if let Err(e) = validate_domain_name(&name) {
            debug!(domain = %domain, error = %e, "Rejected blocklist addition");
            return false;
        }
        let _guard = self.lock_writer();
        self.snapshot.load().insert(&name);
        true
    }

    fn remove(&self, domain: &str) -> bool {
        let name = normalize_domain(domain);
        let _guard = self.lock_writer();
        self.snapshot.load().remove(&name)
    }

    fn reload(&self, domains: Vec<String>) -> usize {
        self.reload_from(domains)
    }

    fn stats(&self) -> BlocklistStats {
        let last_reload = *self.lock_writer();
        BlocklistStats::new(self.len(), last_reload)
    }
}

/// Borrow when the name is already lowercase with no trailing dot.
fn normalized(domain: &str) -> Cow<'_, str> {
    let clean = !domain.ends_with('.')
        && !domain.bytes().any(|b| b.is_ascii_uppercase() || b.is_ascii_whitespace());
    if clean {
        Cow::Borrowed(domain)
    } else {
        Cow::Owned(normalize_domain(domain))
    }
}
