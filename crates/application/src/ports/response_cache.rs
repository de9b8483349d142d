use super::DnsPayload;
use sieve_dns_domain::{CacheStats, DnsQuery, DomainError};
use std::time::Duration;

/// Bounded TTL + LRU store of upstream responses keyed by (name, type).
///
/// All methods are synchronous: the cache is in-memory and its critical
/// sections are short. `Err` means the cache itself is unusable; the
/// resolution pipeline then behaves as on a miss.
pub trait ResponseCache: Send + Sync {
    /// Fresh entry, promoted to most-recently-used. Expired entries are dropped
    /// and reported as a miss.
    fn get(&self, query: &DnsQuery) -> Result<Option<DnsPayload>, DomainError>;

    /// Insert or replace, then evict least-recently-used entries over capacity.
    fn set(&self, query: &DnsQuery, payload: DnsPayload, ttl: Duration)
        -> Result<(), DomainError>;

    /// Remove every lapsed entry. Returns how many were removed.
    fn sweep_expired(&self) -> Result<usize, DomainError>;

    fn stats(&self) -> Result<CacheStats, DomainError>;

    /// Drop all entries and reset every counter.
    fn clear(&self) -> Result<(), DomainError>;
}
