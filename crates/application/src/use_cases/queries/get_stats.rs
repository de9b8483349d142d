use crate::ports::QueryStatsSource;
use sieve_dns_domain::QueryStats;
use std::sync::Arc;

pub struct GetQueryStatsUseCase {
    source: Arc<dyn QueryStatsSource>,
}

impl GetQueryStatsUseCase {
    pub fn new(source: Arc<dyn QueryStatsSource>) -> Self {
        Self { source }
    }

    pub fn execute(&self) -> QueryStats {
        self.source.query_stats()
    }
}
