#![allow(dead_code)]

use async_trait::async_trait;
use sieve_dns_application::ports::{
    BlocklistSource, DnsPayload, DomainMatcher, QueryEventSink, QueryForwarder, ResponseCache,
};
use sieve_dns_domain::{
    BlocklistStats, CacheStats, DnsQuery, DomainError, QueryEvent, RecordType,
};
use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub fn upstream_addr() -> SocketAddr {
    "192.0.2.53:53".parse().unwrap()
}

pub fn payload(tag: &[u8]) -> DnsPayload {
    DnsPayload::new(tag.to_vec(), upstream_addr(), 0)
}

// ============================================================================
// Mock DomainMatcher
// ============================================================================

#[derive(Default)]
pub struct MockMatcher {
    blocked: Mutex<HashSet<String>>,
    failing: AtomicBool,
    pub calls: AtomicUsize,
}

impl MockMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blocked(domains: &[&str]) -> Self {
        let matcher = Self::new();
        for d in domains {
            matcher.blocked.lock().unwrap().insert(d.to_string());
        }
        matcher
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DomainMatcher for MockMatcher {
    fn is_blocked(&self, domain: &str) -> Result<bool, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::BlocklistUnavailable("mock failure".to_string()));
        }
        let blocked = self.blocked.lock().unwrap();
        let mut current = domain;
        loop {
            if blocked.contains(current) {
                return Ok(true);
            }
            match current.find('.') {
                Some(pos) => current = &current[pos + 1..],
                None => return Ok(false),
            }
        }
    }

    fn add(&self, domain: &str) -> bool {
        self.blocked.lock().unwrap().insert(domain.to_string());
        true
    }

    fn remove(&self, domain: &str) -> bool {
        self.blocked.lock().unwrap().remove(domain)
    }

    fn reload(&self, domains: Vec<String>) -> usize {
        let mut blocked = self.blocked.lock().unwrap();
        *blocked = domains.into_iter().collect();
        blocked.len()
    }

    fn stats(&self) -> BlocklistStats {
        BlocklistStats::new(self.blocked.lock().unwrap().len(), None)
    }
}

// ============================================================================
// Mock ResponseCache
// ============================================================================

#[derive(Default)]
pub struct MockCache {
    entries: Mutex<HashMap<(String, RecordType), (DnsPayload, Duration)>>,
    failing_get: AtomicBool,
    failing_set: AtomicBool,
    pub gets: AtomicUsize,
    pub sets: AtomicUsize,
    pub sweeps: AtomicUsize,
}

impl MockCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, domain: &str, record_type: RecordType, payload: DnsPayload) {
        self.entries.lock().unwrap().insert(
            (domain.to_string(), record_type),
            (payload, Duration::from_secs(300)),
        );
    }

    pub fn ttl_of(&self, domain: &str, record_type: RecordType) -> Option<Duration> {
        self.entries
            .lock()
            .unwrap()
            .get(&(domain.to_string(), record_type))
            .map(|(_, ttl)| *ttl)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn set_failing_get(&self, failing: bool) {
        self.failing_get.store(failing, Ordering::SeqCst);
    }

    pub fn set_failing_set(&self, failing: bool) {
        self.failing_set.store(failing, Ordering::SeqCst);
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn set_count(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }
}

impl ResponseCache for MockCache {
    fn get(&self, query: &DnsQuery) -> Result<Option<DnsPayload>, DomainError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.failing_get.load(Ordering::SeqCst) {
            return Err(DomainError::CacheUnavailable("mock failure".to_string()));
        }
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(&(query.domain.to_string(), query.record_type))
            .map(|(p, _)| p.clone()))
    }

    fn set(
        &self,
        query: &DnsQuery,
        payload: DnsPayload,
        ttl: Duration,
    ) -> Result<(), DomainError> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        if self.failing_set.load(Ordering::SeqCst) {
            return Err(DomainError::CacheUnavailable("mock failure".to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert((query.domain.to_string(), query.record_type), (payload, ttl));
        Ok(())
    }

    fn sweep_expired(&self) -> Result<usize, DomainError> {
        self.sweeps.fetch_add(1, Ordering::SeqCst);
        Ok(0)
    }

    fn stats(&self) -> Result<CacheStats, DomainError> {
        Ok(CacheStats::new(self.len(), 100, 0, 0, 0))
    }

    fn clear(&self) -> Result<(), DomainError> {
        self.entries.lock().unwrap().clear();
        Ok(())
    }
}

// ============================================================================
// Mock QueryForwarder
// ============================================================================

pub struct MockForwarder {
    response: Mutex<Result<DnsPayload, DomainError>>,
    pub calls: AtomicUsize,
}

impl MockForwarder {
    pub fn answering(payload: DnsPayload) -> Self {
        Self {
            response: Mutex::new(Ok(payload)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn exhausted(attempts: usize) -> Self {
        Self {
            response: Mutex::new(Err(DomainError::ResolutionExhausted { attempts })),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QueryForwarder for MockForwarder {
    async fn forward(&self, _query: &DnsQuery) -> Result<DnsPayload, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.lock().unwrap().clone()
    }
}

// ============================================================================
// Recording QueryEventSink
// ============================================================================

#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<QueryEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<QueryEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl QueryEventSink for RecordingSink {
    fn record(&self, event: QueryEvent) {
        self.events.lock().unwrap().push(event);
    }
}

// ============================================================================
// Mock BlocklistSource
// ============================================================================

pub struct MockBlocklistSource {
    result: Result<Vec<String>, DomainError>,
}

impl MockBlocklistSource {
    pub fn with_domains(domains: &[&str]) -> Self {
        Self {
            result: Ok(domains.iter().map(|d| d.to_string()).collect()),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(DomainError::IoError("blocklist directory missing".to_string())),
        }
    }
}

#[async_trait]
impl BlocklistSource for MockBlocklistSource {
    async fn load(&self) -> Result<Vec<String>, DomainError> {
        self.result.clone()
    }
}
