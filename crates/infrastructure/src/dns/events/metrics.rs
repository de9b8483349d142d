use sieve_dns_application::ports::QueryStatsSource;
use sieve_dns_domain::{QueryEvent, QueryOutcome, QueryStats};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Query event metrics tracker
///
/// Fixed set of atomic counters: memory does not grow with the number of
/// distinct names queried. Cloning shares the same underlying counters.
#[derive(Clone)]
pub struct QueryMetrics {
    total_events: Arc<AtomicU64>,
    blocked: Arc<AtomicU64>,
    cached: Arc<AtomicU64>,
    forwarded: Arc<AtomicU64>,
    errors: Arc<AtomicU64>,

    /// Sum of heuristic bytes-saved estimates
    bytes_saved: Arc<AtomicU64>,

    total_response_time_us: Arc<AtomicU64>,
}

impl QueryMetrics {
    pub fn new() -> Self {
        Self {
            total_events: Arc::new(AtomicU64::new(0)),
            blocked: Arc::new(AtomicU64::new(0)),
            cached: Arc::new(AtomicU64::new(0)),
            forwarded: Arc::new(AtomicU64::new(0)),
            errors: Arc::new(AtomicU64::new(0)),
            bytes_saved: Arc::new(AtomicU64::new(0)),
            total_response_time_us: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn track(&self, event: &QueryEvent) {
        self.total_events.fetch_add(1, Ordering::Relaxed);
        self.outcome_counter(event.outcome)
            .fetch_add(1, Ordering::Relaxed);
        self.bytes_saved
            .fetch_add(event.bytes_saved, Ordering::Relaxed);
        self.total_response_time_us
            .fetch_add(event.response_time_us, Ordering::Relaxed);
    }

    fn outcome_counter(&self, outcome: QueryOutcome) -> &AtomicU64 {
        match outcome {
            QueryOutcome::Blocked => &self.blocked,
            QueryOutcome::Cached => &self.cached,
            QueryOutcome::Forwarded => &self.forwarded,
            QueryOutcome::Error => &self.errors,
        }
    }

    pub fn total_events(&self) -> u64 {
        self.total_events.load(Ordering::Relaxed)
    }

    pub fn outcome_count(&self, outcome: QueryOutcome) -> u64 {
        self.outcome_counter(outcome).load(Ordering::Relaxed)
    }

    pub fn bytes_saved(&self) -> u64 {
        self.bytes_saved.load(Ordering::Relaxed)
    }

    /// Average response time in microseconds
    pub fn avg_response_time_us(&self) -> f64 {
        let total = self.total_events();
        if total == 0 {
            return 0.0;
        }
        self.total_response_time_us.load(Ordering::Relaxed) as f64 / total as f64
    }

    pub fn avg_response_time_ms(&self) -> f64 {
        self.avg_response_time_us() / 1000.0
    }

    pub fn snapshot(&self) -> QueryStats {
        QueryStats {
            total: self.total_events(),
            blocked: self.outcome_count(QueryOutcome::Blocked),
            cached: self.outcome_count(QueryOutcome::Cached),
            forwarded: self.outcome_count(QueryOutcome::Forwarded),
            errors: self.outcome_count(QueryOutcome::Error),
            bytes_saved: self.bytes_saved(),
            avg_response_time_ms: self.avg_response_time_ms(),
        }
    }

    pub fn reset(&self) {
        self.total_events.store(0, Ordering::Relaxed);
        self.blocked.store(0, Ordering::Relaxed);
        self.cached.store(0, Ordering::Relaxed);
        self.forwarded.store(0, Ordering::Relaxed);
        self.errors.store(0, Ordering::Relaxed);
        self.bytes_saved.store(0, Ordering::Relaxed);
        self.total_response_time_us.store(0, Ordering::Relaxed);
    }
}

impl QueryStatsSource for QueryMetrics {
    fn query_stats(&self) -> QueryStats {
        self.snapshot()
    }
}

impl Default for QueryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sieve_dns_domain::RecordType;

    fn event(domain: &str, outcome: QueryOutcome, us: u64, saved: u64) -> QueryEvent {
        QueryEvent::new(
            domain,
            RecordType::A,
            "10.0.0.2".parse().unwrap(),
            outcome,
            us,
            saved,
        )
    }

    #[test]
    fn test_track_counts_outcomes_and_savings() {
        let metrics = QueryMetrics::new();
        metrics.track(&event("ads.example.com", QueryOutcome::Blocked, 100, 1024));
        metrics.track(&event("example.com", QueryOutcome::Cached, 200, 50));
        metrics.track(&event("example.com", QueryOutcome::Forwarded, 3000, 0));
        metrics.track(&event("down.example", QueryOutcome::Error, 700, 0));

        let stats = metrics.snapshot();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.blocked, 1);
        assert_eq!(stats.cached, 1);
        assert_eq!(stats.forwarded, 1);
        assert_eq!(stats.errors, 1);
        assert_eq!(stats.bytes_saved, 1074);
        assert!((stats.avg_response_time_ms - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distinct_names_only_move_counters() {
        let metrics = QueryMetrics::new();
        for i in 0..10_000 {
            let name = format!("r{i}.flood.example");
            metrics.track(&event(&name, QueryOutcome::Forwarded, 1, 0));
        }

        let stats = metrics.snapshot();
        assert_eq!(stats.total, 10_000);
        assert_eq!(stats.forwarded, 10_000);
        assert_eq!(stats.blocked + stats.cached + stats.errors, 0);
    }

    #[test]
    fn test_reset() {
        let metrics = QueryMetrics::new();
        metrics.track(&event("example.com", QueryOutcome::Cached, 10, 50));
        metrics.reset();
        assert_eq!(metrics.snapshot(), QueryStats::default());
    }
}
