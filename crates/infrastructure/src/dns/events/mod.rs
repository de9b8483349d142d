//! DNS query event system
//!
//! The resolution pipeline records one `QueryEvent` per query through the
//! `QueryEventSink` port. Here that port is a channel:
//!
//! - `QueryEventEmitter`: fire-and-forget sender used on the hot path
//! - `QueryEventConsumer`: background task draining the channel
//! - `QueryMetrics`: thread-safe aggregates fed by the consumer
//!
//! ```rust,no_run
//! use sieve_dns_infrastructure::dns::events::{QueryEventConsumer, QueryEventEmitter, QueryMetrics};
//!
//! # async fn run() {
//! let (emitter, rx) = QueryEventEmitter::new_enabled();
//! let metrics = QueryMetrics::new();
//! let handle = QueryEventConsumer::new(metrics.clone()).start(rx);
//! // hand `emitter` to the use case; drop it to stop the consumer
//! drop(emitter);
//! let _ = handle.await;
//! # }
//! ```

pub mod consumer;
pub mod emitter;
pub mod metrics;

pub use consumer::QueryEventConsumer;
pub use emitter::QueryEventEmitter;
pub use metrics::QueryMetrics;
