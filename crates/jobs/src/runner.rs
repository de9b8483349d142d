use crate::{CacheSweepJob, StatsReportJob};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Use the builder pattern to register jobs, then call `.start()` once.
///
/// # Example
///
/// ```rust,ignore
/// let handles = JobRunner::new()
///     .with_cache_sweep(CacheSweepJob::new(sweep).with_cancellation(token.clone()))
///     .with_stats_report(StatsReportJob::new(cache_stats, query_stats))
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    cache_sweep: Option<CacheSweepJob>,
    stats_report: Option<StatsReportJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            cache_sweep: None,
            stats_report: None,
        }
    }

    pub fn with_cache_sweep(mut self, job: CacheSweepJob) -> Self {
        self.cache_sweep = Some(job);
        self
    }

    pub fn with_stats_report(mut self, job: StatsReportJob) -> Self {
        self.stats_report = Some(job);
        self
    }

    /// Start all registered background jobs and return their task handles.
    pub async fn start(self) -> Vec<JoinHandle<()>> {
        info!("Starting background job runner");
        let mut handles = Vec::new();

        if let Some(job) = self.cache_sweep {
            handles.push(Arc::new(job).start().await);
        }

        if let Some(job) = self.stats_report {
            handles.push(Arc::new(job).start().await);
        }

        info!(jobs = handles.len(), "All background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
