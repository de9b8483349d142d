use crate::ports::DomainMatcher;
use sieve_dns_domain::BlocklistStats;
use std::sync::Arc;

pub struct GetBlocklistStatsUseCase {
    matcher: Arc<dyn DomainMatcher>,
}

impl GetBlocklistStatsUseCase {
    pub fn new(matcher: Arc<dyn DomainMatcher>) -> Self {
        Self { matcher }
    }

    pub fn execute(&self) -> BlocklistStats {
        self.matcher.stats()
    }
}
