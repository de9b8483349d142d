use super::metrics::QueryMetrics;
use sieve_dns_domain::QueryEvent;
use tokio::sync::mpsc;
use tracing::debug;

const MAX_BATCH: usize = 100;

/// Background task that drains query events into [`QueryMetrics`].
///
/// Each event is also logged at `debug!`, which is the hand-off point for
/// anything that wants per-query analytics. Dropping every emitter closes the
/// channel; the task then finishes the pending events and exits.
pub struct QueryEventConsumer {
    metrics: QueryMetrics,
}

impl QueryEventConsumer {
    pub fn new(metrics: QueryMetrics) -> Self {
        Self { metrics }
    }

    pub fn start(self, mut rx: mpsc::UnboundedReceiver<QueryEvent>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            debug!("QueryEventConsumer: started");

            let mut batch = Vec::with_capacity(MAX_BATCH);
            let mut total_events = 0u64;

            while let Some(event) = rx.recv().await {
                batch.push(event);

                while batch.len() < MAX_BATCH {
                    match rx.try_recv() {
                        Ok(event) => batch.push(event),
                        Err(_) => break,
                    }
                }

                total_events += batch.len() as u64;
                for event in batch.drain(..) {
                    self.process(&event);
                }
            }

            debug!(total_events, "QueryEventConsumer: channel closed, exiting");
        })
    }

    fn process(&self, event: &QueryEvent) {
        self.metrics.track(event);
        debug!(
            domain = %event.domain,
            record_type = %event.record_type,
            client = %event.client_ip,
            outcome = %event.outcome,
            response_time_ms = event.response_time_ms(),
            bytes_saved = event.bytes_saved,
            "Query"
        );
    }
}
