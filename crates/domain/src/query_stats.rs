use crate::query_event::QueryOutcome;

/// Aggregate query counters since process start.
///
/// `bytes_saved` sums the heuristic per-event estimates; treat it as an
/// analytics approximation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryStats {
    pub total: u64,
    pub blocked: u64,
    pub cached: u64,
    pub forwarded: u64,
    pub errors: u64,
    pub bytes_saved: u64,
    pub avg_response_time_ms: f64,
}

impl QueryStats {
    pub fn count_for(&self, outcome: QueryOutcome) -> u64 {
        match outcome {
            QueryOutcome::Blocked => self.blocked,
            QueryOutcome::Cached => self.cached,
            QueryOutcome::Forwarded => self.forwarded,
            QueryOutcome::Error => self.errors,
        }
    }

    /// Share of queries answered locally (blocked or cached), 0.0 when idle.
    pub fn local_answer_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.blocked + self.cached) as f64 / self.total as f64
    }
}
