use sieve_dns_application::ports::{
    DnsPayload, DomainMatcher, QueryStatsSource, ResponseCache,
};
use sieve_dns_domain::{BlocklistStats, CacheStats, DnsQuery, DomainError, QueryStats};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

// ============================================================================
// Mock ResponseCache
// ============================================================================

pub struct MockCache {
    sweeps: Arc<AtomicU64>,
    stats_calls: Arc<AtomicU64>,
    should_fail: Arc<AtomicBool>,
}

impl MockCache {
    pub fn new() -> Self {
        Self {
            sweeps: Arc::new(AtomicU64::new(0)),
            stats_calls: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn failing() -> Self {
        let cache = Self::new();
        cache.should_fail.store(true, Ordering::Relaxed);
        cache
    }

    pub fn sweeps(&self) -> u64 {
        self.sweeps.load(Ordering::Relaxed)
    }

    pub fn stats_calls(&self) -> u64 {
        self.stats_calls.load(Ordering::Relaxed)
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::CacheUnavailable("mock failure".to_string()));
        }
        Ok(())
    }
}

impl ResponseCache for MockCache {
    fn get(&self, _query: &DnsQuery) -> Result<Option<DnsPayload>, DomainError> {
        self.check()?;
        Ok(None)
    }

    fn set(&self, _query: &DnsQuery, _payload: DnsPayload, _ttl: Duration) -> Result<(), DomainError> {
        self.check()
    }

    fn sweep_expired(&self) -> Result<usize, DomainError> {
        self.sweeps.fetch_add(1, Ordering::Relaxed);
        self.check()?;
        Ok(3)
    }

    fn stats(&self) -> Result<CacheStats, DomainError> {
        self.stats_calls.fetch_add(1, Ordering::Relaxed);
        self.check()?;
        Ok(CacheStats::new(5, 100, 8, 2, 0))
    }

    fn clear(&self) -> Result<(), DomainError> {
        self.check()
    }
}

// ============================================================================
// Mock QueryStatsSource
// ============================================================================

pub struct MockStatsSource {
    calls: Arc<AtomicU64>,
}

impl MockStatsSource {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

impl QueryStatsSource for MockStatsSource {
    fn query_stats(&self) -> QueryStats {
        self.calls.fetch_add(1, Ordering::Relaxed);
        QueryStats {
            total: 10,
            blocked: 2,
            cached: 3,
            forwarded: 4,
            errors: 1,
            bytes_saved: 4250,
            avg_response_time_ms: 1.5,
        }
    }
}

// ============================================================================
// Mock DomainMatcher
// ============================================================================

pub struct MockMatcher {
    stats_calls: Arc<AtomicU64>,
}

impl MockMatcher {
    pub fn new() -> Self {
        Self {
            stats_calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn stats_calls(&self) -> u64 {
        self.stats_calls.load(Ordering::Relaxed)
    }
}

impl DomainMatcher for MockMatcher {
    fn is_blocked(&self, _domain: &str) -> Result<bool, DomainError> {
        Ok(false)
    }

    fn add(&self, _domain: &str) -> bool {
        true
    }

    fn remove(&self, _domain: &str) -> bool {
        false
    }

    fn reload(&self, domains: Vec<String>) -> usize {
        domains.len()
    }

    fn stats(&self) -> BlocklistStats {
        self.stats_calls.fetch_add(1, Ordering::Relaxed);
        BlocklistStats::new(42, Some(SystemTime::now()))
    }
}
