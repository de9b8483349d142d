use sieve_dns_domain::QueryEvent;

/// Receives one telemetry event per resolved query.
///
/// Must not block: implementations hand the event off (channel, atomic
/// counters) and return immediately.
pub trait QueryEventSink: Send + Sync {
    fn record(&self, event: QueryEvent);
}

/// Sink that drops everything.
pub struct NoopEventSink;

impl QueryEventSink for NoopEventSink {
    fn record(&self, _event: QueryEvent) {}
}
