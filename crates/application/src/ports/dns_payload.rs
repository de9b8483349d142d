use bytes::Bytes;
use std::net::SocketAddr;

/// A complete upstream DNS response.
///
/// The wire bytes are opaque to the application layer: they are cached and
/// replayed verbatim, and only the front-end that owns the client socket
/// decodes them again. `Bytes` keeps cache hits allocation-free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsPayload {
    pub wire: Bytes,
    pub upstream: SocketAddr,
    /// Upstream RCODE (0 = NOERROR, 3 = NXDOMAIN, ...)
    pub response_code: u16,
    /// Smallest TTL among the upstream answer records. Informational only:
    /// the cache always applies the configured default TTL.
    pub min_ttl: Option<u32>,
}

impl DnsPayload {
    pub fn new(wire: impl Into<Bytes>, upstream: SocketAddr, response_code: u16) -> Self {
        Self {
            wire: wire.into(),
            upstream,
            response_code,
            min_ttl: None,
        }
    }

    pub fn with_min_ttl(mut self, min_ttl: Option<u32>) -> Self {
        self.min_ttl = min_ttl;
        self
    }

    pub fn len(&self) -> usize {
        self.wire.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wire.is_empty()
    }
}
