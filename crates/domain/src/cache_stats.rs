/// Point-in-time view of the response cache counters.
///
/// Counters grow monotonically for the life of the process and only go back
/// to zero on an explicit cache clear.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CacheStats {
    pub size: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    /// hits / (hits + misses), or 0.0 before the first lookup
    pub hit_rate: f64,
}

impl CacheStats {
    pub fn new(size: usize, capacity: usize, hits: u64, misses: u64, evictions: u64) -> Self {
        let total = hits + misses;
        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        Self {
            size,
            capacity,
            hits,
            misses,
            evictions,
            hit_rate,
        }
    }

    pub fn total_requests(&self) -> u64 {
        self.hits + self.misses
    }
}
