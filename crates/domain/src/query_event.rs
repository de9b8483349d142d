use crate::dns_record::RecordType;
use std::net::IpAddr;
use std::sync::Arc;

/// How a client query was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryOutcome {
    /// Matched the blocklist; answered with NXDOMAIN
    Blocked,
    /// Served from the response cache
    Cached,
    /// Forwarded to an upstream resolver which answered
    Forwarded,
    /// Every upstream failed; answered with SERVFAIL
    Error,
}

impl QueryOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryOutcome::Blocked => "blocked",
            QueryOutcome::Cached => "cached",
            QueryOutcome::Forwarded => "forwarded",
            QueryOutcome::Error => "error",
        }
    }
}

impl std::fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Telemetry record emitted exactly once for every resolved client query.
///
/// Immutable once built. The resolution pipeline hands it to a sink and keeps
/// no reference afterwards.
///
/// `bytes_saved` is a heuristic estimate for analytics dashboards, not a
/// measured payload size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryEvent {
    /// Normalized domain (Arc for cheap cloning into channels)
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub client_ip: IpAddr,
    pub outcome: QueryOutcome,
    /// End-to-end resolution time in microseconds
    pub response_time_us: u64,
    pub bytes_saved: u64,
}

impl QueryEvent {
    pub fn new(
        domain: impl Into<Arc<str>>,
        record_type: RecordType,
        client_ip: IpAddr,
        outcome: QueryOutcome,
        response_time_us: u64,
        bytes_saved: u64,
    ) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            client_ip,
            outcome,
            response_time_us,
            bytes_saved,
        }
    }

    /// Get response time in milliseconds
    pub fn response_time_ms(&self) -> f64 {
        self.response_time_us as f64 / 1000.0
    }

    pub fn is_blocked(&self) -> bool {
        self.outcome == QueryOutcome::Blocked
    }
}
