use crate::ports::ResponseCache;
use sieve_dns_domain::{CacheStats, DomainError};
use std::sync::Arc;

pub struct GetCacheStatsUseCase {
    cache: Arc<dyn ResponseCache>,
}

impl GetCacheStatsUseCase {
    pub fn new(cache: Arc<dyn ResponseCache>) -> Self {
        Self { cache }
    }

    pub fn execute(&self) -> Result<CacheStats, DomainError> {
        self.cache.stats()
    }
}
