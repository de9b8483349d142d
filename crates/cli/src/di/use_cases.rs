use super::DnsServices;
use sieve_dns_application::use_cases::{
    GetBlocklistStatsUseCase, GetCacheStatsUseCase, GetQueryStatsUseCase,
    HandleDnsQueryUseCase, ReloadBlocklistUseCase, SweepExpiredCacheUseCase,
};
use sieve_dns_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub handle_query: Arc<HandleDnsQueryUseCase>,
    pub reload_blocklist: Arc<ReloadBlocklistUseCase>,
    pub sweep_cache: Arc<SweepExpiredCacheUseCase>,
    pub cache_stats: Arc<GetCacheStatsUseCase>,
    pub query_stats: Arc<GetQueryStatsUseCase>,
    pub blocklist_stats: Arc<GetBlocklistStatsUseCase>,
}

impl UseCases {
    pub fn new(services: &DnsServices, config: &Config) -> Self {
        Self {
            handle_query: Arc::new(HandleDnsQueryUseCase::new(
                services.matcher.clone(),
                services.cache.clone(),
                services.forwarder.clone(),
                services.emitter.clone(),
                config.dns.cache_ttl_duration(),
            )),
            reload_blocklist: Arc::new(ReloadBlocklistUseCase::new(
                services.blocklist_source.clone(),
                services.matcher.clone(),
            )),
            sweep_cache: Arc::new(SweepExpiredCacheUseCase::new(services.cache.clone())),
            cache_stats: Arc::new(GetCacheStatsUseCase::new(services.cache.clone())),
            query_stats: Arc::new(GetQueryStatsUseCase::new(Arc::new(
                services.metrics.clone(),
            ))),
            blocklist_stats: Arc::new(GetBlocklistStatsUseCase::new(services.matcher.clone())),
        }
    }
}
