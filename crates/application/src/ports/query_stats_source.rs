use sieve_dns_domain::QueryStats;

pub trait QueryStatsSource: Send + Sync {
    fn query_stats(&self) -> QueryStats;
}
