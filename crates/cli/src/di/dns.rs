use sieve_dns_domain::{Config, QueryEvent};
use sieve_dns_infrastructure::dns::{
    BlocklistMatcher, DnsCache, LocalBlocklistSource, QueryEventEmitter, QueryMetrics,
    UpstreamForwarder,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

/// Infrastructure adapters shared by the use cases.
pub struct DnsServices {
    pub matcher: Arc<BlocklistMatcher>,
    pub blocklist_source: Arc<LocalBlocklistSource>,
    pub cache: Arc<DnsCache>,
    pub forwarder: Arc<UpstreamForwarder>,
    pub emitter: Arc<QueryEventEmitter>,
    pub metrics: QueryMetrics,
    pub events: mpsc::UnboundedReceiver<QueryEvent>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let forwarder = UpstreamForwarder::from_config(
            &config.dns.upstream_servers,
            config.dns.query_timeout_duration(),
        )?;
        info!(
            upstreams = forwarder.upstreams().len(),
            timeout_ms = config.dns.query_timeout,
            "Upstream forwarder ready"
        );

        let cache = DnsCache::new(config.dns.cache_max_entries);
        let (emitter, events) = QueryEventEmitter::new_enabled();

        Ok(Self {
            matcher: Arc::new(BlocklistMatcher::new()),
            blocklist_source: Arc::new(LocalBlocklistSource::new(
                config.blocking.blocklist_dir.clone(),
                config.blocking.custom_blocked.clone(),
            )),
            cache: Arc::new(cache),
            forwarder: Arc::new(forwarder),
            emitter: Arc::new(emitter),
            metrics: QueryMetrics::new(),
            events,
        })
    }
}
