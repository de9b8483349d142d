use crate::ports::ResponseCache;
use sieve_dns_domain::DomainError;
use std::sync::Arc;
use tracing::info;

pub struct ClearCacheUseCase {
    cache: Arc<dyn ResponseCache>,
}

impl ClearCacheUseCase {
    pub fn new(cache: Arc<dyn ResponseCache>) -> Self {
        Self { cache }
    }

    pub fn execute(&self) -> Result<(), DomainError> {
        self.cache.clear()?;
        info!("Response cache cleared");
        Ok(())
    }
}
