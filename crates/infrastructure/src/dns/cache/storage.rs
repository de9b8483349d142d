use super::key::CacheKey;
use lru::LruCache;
use rustc_hash::FxBuildHasher;
use sieve_dns_application::ports::{DnsPayload, ResponseCache};
use sieve_dns_domain::{CacheStats, DnsQuery, DomainError};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Maximum removals per lock acquisition during a sweep.
pub const SWEEP_BATCH_SIZE: usize = 256;

struct CacheEntry {
    payload: DnsPayload,
    expires_at: Instant,
    /// Tie-breaker for this entry's slot in `CacheState::expiries`.
    seq: u64,
}

impl CacheEntry {
    #[inline]
    fn is_fresh(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

struct CacheState {
    // Unbounded: capacity is enforced in `set` so every eviction is counted.
    entries: LruCache<CacheKey, CacheEntry, FxBuildHasher>,
    // One slot per live entry, ordered by deadline.
    expiries: BTreeMap<(Instant, u64), CacheKey>,
    next_seq: u64,
    hits: u64,
    misses: u64,
    evictions: u64,
}

/// TTL + LRU response cache.
///
/// One mutex guards entries and counters together, so insert+evict and
/// clear are each a single critical section. Eviction is purely by recency:
/// a fresh but cold entry goes before a stale but hot one.
pub struct DnsCache {
    state: Mutex<CacheState>,
    capacity: usize,
}

impl CacheState {
    fn forget_expiry(&mut self, entry: &CacheEntry) {
        self.expiries.remove(&(entry.expires_at, entry.seq));
    }
}

impl DnsCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: LruCache::unbounded_with_hasher(FxBuildHasher),
                expiries: BTreeMap::new(),
                next_seq: 0,
                hits: 0,
                misses: 0,
                evictions: 0,
            }),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().map(|state| state.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get_key(&self, key: &CacheKey) -> Result<Option<DnsPayload>, DomainError> {
        let now = Instant::now();
        let mut state = self.lock()?;

        let lookup = state
            .entries
            .get(key)
            .map(|entry| entry.is_fresh(now).then(|| entry.payload.clone()));

        match lookup {
            Some(Some(payload)) => {
                state.hits += 1;
                Ok(Some(payload))
            }
            Some(None) => {
                if let Some(stale) = state.entries.pop(key) {
                    state.forget_expiry(&stale);
                }
                state.misses += 1;
                debug!(key = %key, "Expired cache entry dropped on access");
                Ok(None)
            }
            None => {
                state.misses += 1;
                Ok(None)
            }
        }
    }

    pub fn set_key(
        &self,
        key: CacheKey,
        payload: DnsPayload,
        ttl: Duration,
    ) -> Result<(), DomainError> {
        let expires_at = Instant::now() + ttl;

        let mut state = self.lock()?;
        let seq = state.next_seq;
        state.next_seq = seq.wrapping_add(1);
        state.expiries.insert((expires_at, seq), key.clone());

        let entry = CacheEntry {
            payload,
            expires_at,
            seq,
        };
        if let Some(replaced) = state.entries.put(key, entry) {
            state.forget_expiry(&replaced);
        }

        while state.entries.len() > self.capacity {
            match state.entries.pop_lru() {
                Some((evicted, entry)) => {
                    state.forget_expiry(&entry);
                    state.evictions += 1;
                    debug!(key = %evicted, "Evicted least recently used entry");
                }
                None => break,
            }
        }
        Ok(())
    }

    /// Remove up to [`SWEEP_BATCH_SIZE`] lapsed entries under a single lock
    /// hold. Cost is bounded by the batch size, not by the cache size.
    pub fn sweep_step(&self) -> Result<usize, DomainError> {
        let now = Instant::now();
        let mut state = self.lock()?;

        let mut removed = 0;
        while removed < SWEEP_BATCH_SIZE {
            let Some((&(expires_at, seq), _)) = state.expiries.first_key_value() else {
                break;
            };
            if expires_at > now {
                break;
            }
            if let Some(key) = state.expiries.remove(&(expires_at, seq)) {
                state.entries.pop(&key);
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Remove every lapsed entry, one [`sweep_step`](Self::sweep_step) at a
    /// time. The lock is released between steps so queries are never starved.
    pub fn sweep(&self) -> Result<usize, DomainError> {
        let mut removed = 0;
        loop {
            let step = self.sweep_step()?;
            removed += step;
            if step < SWEEP_BATCH_SIZE {
                return Ok(removed);
            }
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, CacheState>, DomainError> {
        self.state
            .lock()
            .map_err(|_| DomainError::CacheUnavailable("cache lock poisoned".to_string()))
    }
}

impl ResponseCache for DnsCache {
    fn get(&self, query: &DnsQuery) -> Result<Option<DnsPayload>, DomainError> {
        self.get_key(&CacheKey::from_query(query))
    }

    fn set(
        &self,
        query: &DnsQuery,
        payload: DnsPayload,
        ttl: Duration,
    ) -> Result<(), DomainError> {
        self.set_key(CacheKey::from_query(query), payload, ttl)
    }

    fn sweep_expired(&self) -> Result<usize, DomainError> {
        self.sweep()
    }

    fn stats(&self) -> Result<CacheStats, DomainError> {
        let state = self.lock()?;
        Ok(CacheStats::new(
            state.entries.len(),
            self.capacity,
            state.hits,
            state.misses,
            state.evictions,
        ))
    }

    fn clear(&self) -> Result<(), DomainError> {
        let mut state = self.lock()?;
        state.entries.clear();
        state.expiries.clear();
        state.hits = 0;
        state.misses = 0;
        state.evictions = 0;
        Ok(())
    }
}
