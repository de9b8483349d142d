use sieve_dns_domain::{BlocklistStats, DomainError};

/// Blocked-domain set with subdomain-hierarchy lookup.
///
/// `is_blocked` returns a `Result` so callers handle a faulty matcher
/// explicitly. The resolution pipeline treats `Err` as "not blocked".
pub trait DomainMatcher: Send + Sync {
    /// True when `domain` or any of its parent suffixes is listed.
    fn is_blocked(&self, domain: &str) -> Result<bool, DomainError>;

    /// Insert one domain. Returns false when the name is syntactically invalid.
    fn add(&self, domain: &str) -> bool;

    /// Remove one domain. Returns false when it was not listed.
    fn remove(&self, domain: &str) -> bool;

    /// Replace the whole set atomically. Returns the number of accepted entries.
    fn reload(&self, domains: Vec<String>) -> usize;

    fn stats(&self) -> BlocklistStats;
}
