use crate::ports::{DnsPayload, DomainMatcher, QueryEventSink, QueryForwarder, ResponseCache};
use crate::services::BandwidthEstimator;
use sieve_dns_domain::{DnsQuery, QueryEvent, QueryOutcome};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Where an answered query got its payload from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    Cache,
    Upstream,
}

/// Result of resolving one client query. The front-end turns this into a
/// wire response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsReply {
    /// Blocklisted: answer NXDOMAIN
    Blocked,
    /// Pass the payload through unmodified
    Answer {
        payload: DnsPayload,
        source: AnswerSource,
    },
    /// Every upstream failed: answer SERVFAIL
    ServerFailure,
}

impl DnsReply {
    pub fn outcome(&self) -> QueryOutcome {
        match self {
            DnsReply::Blocked => QueryOutcome::Blocked,
            DnsReply::Answer {
                source: AnswerSource::Cache,
                ..
            } => QueryOutcome::Cached,
            DnsReply::Answer {
                source: AnswerSource::Upstream,
                ..
            } => QueryOutcome::Forwarded,
            DnsReply::ServerFailure => QueryOutcome::Error,
        }
    }
}

/// Resolution pipeline: block check, then cache, then upstream.
///
/// Fails open: a faulty matcher counts as "not blocked" and a faulty cache as
/// a miss, so the filter never turns into an outage. Upstream exhaustion is
/// the only path to SERVFAIL. Exactly one [`QueryEvent`] is recorded per call.
pub struct HandleDnsQueryUseCase {
    matcher: Arc<dyn DomainMatcher>,
    cache: Arc<dyn ResponseCache>,
    forwarder: Arc<dyn QueryForwarder>,
    sink: Arc<dyn QueryEventSink>,
    estimator: BandwidthEstimator,
    cache_ttl: Duration,
}

impl HandleDnsQueryUseCase {
    pub fn new(
        matcher: Arc<dyn DomainMatcher>,
        cache: Arc<dyn ResponseCache>,
        forwarder: Arc<dyn QueryForwarder>,
        sink: Arc<dyn QueryEventSink>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            matcher,
            cache,
            forwarder,
            sink,
            estimator: BandwidthEstimator::new(),
            cache_ttl,
        }
    }

    pub async fn execute(&self, query: &DnsQuery, client_ip: IpAddr) -> DnsReply {
        let start = Instant::now();
        let query = query.normalized();

        let reply = self.resolve(&query).await;

        self.emit(&query, client_ip, reply.outcome(), start);
        reply
    }

    async fn resolve(&self, query: &DnsQuery) -> DnsReply {
        if self.is_blocked(query) {
            debug!(domain = %query.domain, "Blocked");
            return DnsReply::Blocked;
        }

        if let Some(payload) = self.cached(query) {
            debug!(domain = %query.domain, record_type = %query.record_type, "Cache hit");
            return DnsReply::Answer {
                payload,
                source: AnswerSource::Cache,
            };
        }

        match self.forwarder.forward(query).await {
            Ok(payload) => {
                // Upstream TTL is ignored; every entry lives for the configured default.
                if let Err(e) = self.cache.set(query, payload.clone(), self.cache_ttl) {
                    warn!(domain = %query.domain, error = %e, "Cache insert failed");
                }
                DnsReply::Answer {
                    payload,
                    source: AnswerSource::Upstream,
                }
            }
            Err(e) => {
                warn!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    error = %e,
                    "Resolution failed, answering SERVFAIL"
                );
                DnsReply::ServerFailure
            }
        }
    }

    fn is_blocked(&self, query: &DnsQuery) -> bool {
        match self.matcher.is_blocked(&query.domain) {
            Ok(blocked) => blocked,
            Err(e) => {
                warn!(domain = %query.domain, error = %e, "Block check failed, failing open");
                false
            }
        }
    }

    fn cached(&self, query: &DnsQuery) -> Option<DnsPayload> {
        match self.cache.get(query) {
            Ok(hit) => hit,
            Err(e) => {
                warn!(domain = %query.domain, error = %e, "Cache lookup failed, treating as miss");
                None
            }
        }
    }

    fn emit(&self, query: &DnsQuery, client_ip: IpAddr, outcome: QueryOutcome, start: Instant) {
        let bytes_saved = self.estimator.estimate(&query.domain, outcome);
        self.sink.record(QueryEvent::new(
            Arc::clone(&query.domain),
            query.record_type,
            client_ip,
            outcome,
            start.elapsed().as_micros() as u64,
            bytes_saved,
        ));
    }
}
