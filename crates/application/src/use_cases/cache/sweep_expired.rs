use crate::ports::ResponseCache;
use sieve_dns_domain::DomainError;
use std::sync::Arc;
use tracing::debug;

/// Remove lapsed cache entries between accesses.
///
/// Complements, never replaces, the lazy expiry check done on every lookup.
pub struct SweepExpiredCacheUseCase {
    cache: Arc<dyn ResponseCache>,
}

impl SweepExpiredCacheUseCase {
    pub fn new(cache: Arc<dyn ResponseCache>) -> Self {
        Self { cache }
    }

    pub fn execute(&self) -> Result<usize, DomainError> {
        let removed = self.cache.sweep_expired()?;
        if removed > 0 {
            debug!(removed, "Swept expired cache entries");
        }
        Ok(removed)
    }
}
