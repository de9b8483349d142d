use crate::MAX_INTERVAL_SECS;
use sieve_dns_application::use_cases::SweepExpiredCacheUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Periodically removes expired response-cache entries.
///
/// Bounds memory held by dead entries between accesses. Lookups still do
/// their own lazy expiry check.
pub struct CacheSweepJob {
    sweep: Arc<SweepExpiredCacheUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheSweepJob {
    pub fn new(sweep: Arc<SweepExpiredCacheUseCase>) -> Self {
        Self {
            sweep,
            interval_secs: 60,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.clamp(1, MAX_INTERVAL_SECS);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(interval_secs = self.interval_secs, "Starting cache sweep job");

        tokio::spawn(async move {
            let period = Duration::from_secs(self.interval_secs);
            let start = Instant::now().checked_add(period).unwrap_or_else(Instant::now);
            let mut interval = interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheSweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        if let Err(e) = self.sweep.execute() {
                            error!(error = %e, "Cache sweep failed");
                        }
                    }
                }
            }
        })
    }
}
