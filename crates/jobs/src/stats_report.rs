use crate::MAX_INTERVAL_SECS;
use sieve_dns_application::use_cases::{
    GetBlocklistStatsUseCase, GetCacheStatsUseCase, GetQueryStatsUseCase,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Logs cache, blocklist and query totals at a fixed interval.
pub struct StatsReportJob {
    cache_stats: Arc<GetCacheStatsUseCase>,
    query_stats: Arc<GetQueryStatsUseCase>,
    blocklist_stats: Option<Arc<GetBlocklistStatsUseCase>>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl StatsReportJob {
    pub fn new(
        cache_stats: Arc<GetCacheStatsUseCase>,
        query_stats: Arc<GetQueryStatsUseCase>,
    ) -> Self {
        Self {
            cache_stats,
            query_stats,
            blocklist_stats: None,
            interval_secs: 300,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_blocklist_stats(mut self, blocklist_stats: Arc<GetBlocklistStatsUseCase>) -> Self {
        self.blocklist_stats = Some(blocklist_stats);
        self
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.clamp(1, MAX_INTERVAL_SECS);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Log one report now.
    pub fn report(&self) {
        let queries = self.query_stats.execute();
        info!(
            total = queries.total,
            blocked = queries.blocked,
            cached = queries.cached,
            forwarded = queries.forwarded,
            errors = queries.errors,
            bytes_saved = queries.bytes_saved,
            avg_response_ms = %format_args!("{:.2}", queries.avg_response_time_ms),
            "Query stats"
        );

        match self.cache_stats.execute() {
            Ok(cache) => info!(
                size = cache.size,
                capacity = cache.capacity,
                hits = cache.hits,
                misses = cache.misses,
                evictions = cache.evictions,
                hit_rate = %format_args!("{:.1}%", cache.hit_rate * 100.0),
                "Cache stats"
            ),
            Err(e) => warn!(error = %e, "Cache stats unavailable"),
        }

        if let Some(ref blocklist) = self.blocklist_stats {
            let stats = blocklist.execute();
            info!(
                domains = stats.total_domains,
                seconds_since_reload = stats.seconds_since_reload(),
                "Blocklist stats"
            );
        }
    }

    pub async fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(interval_secs = self.interval_secs, "Starting stats report job");

        tokio::spawn(async move {
            let period = Duration::from_secs(self.interval_secs);
            let start = Instant::now().checked_add(period).unwrap_or_else(Instant::now);
            let mut interval = interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("StatsReportJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => self.report(),
                }
            }
        })
    }
}
