use sieve_dns_application::ports::QueryEventSink;
use sieve_dns_domain::QueryEvent;
use tokio::sync::mpsc;

/// Non-blocking event emitter for DNS query events.
///
/// Uses an unbounded channel so `emit` never awaits. Events are
/// fire-and-forget: if the emitter is disabled or the consumer is gone they
/// are silently dropped. Telemetry is best-effort and must never delay a
/// DNS response.
#[derive(Clone)]
pub struct QueryEventEmitter {
    /// `None` when disabled; `emit` is then a no-op
    sender: Option<mpsc::UnboundedSender<QueryEvent>>,
}

impl QueryEventEmitter {
    pub fn new_disabled() -> Self {
        Self { sender: None }
    }

    /// Creates an enabled emitter and returns the receiver for the consumer task.
    pub fn new_enabled() -> (Self, mpsc::UnboundedReceiver<QueryEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { sender: Some(tx) }, rx)
    }

    pub fn emit(&self, event: QueryEvent) {
        if let Some(ref tx) = self.sender {
            let _ = tx.send(event);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }
}

impl QueryEventSink for QueryEventEmitter {
    fn record(&self, event: QueryEvent) {
        self.emit(event);
    }
}

impl Default for QueryEventEmitter {
    fn default() -> Self {
        Self::new_disabled()
    }
}

impl std::fmt::Debug for QueryEventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryEventEmitter")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
