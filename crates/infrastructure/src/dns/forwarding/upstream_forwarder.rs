use super::message_builder::MessageBuilder;
use super::response_parser::{DnsResponse, ResponseParser};
use crate::dns::transport::UdpTransport;
use async_trait::async_trait;
use sieve_dns_application::ports::{DnsPayload, QueryForwarder};
use sieve_dns_domain::config::parse_upstream_addr;
use sieve_dns_domain::{DnsQuery, DomainError};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, warn};

/// Per-attempt timeout used when none is configured.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Ordered-failover UDP forwarder.
///
/// Upstream order is precedence, not load balancing: each call walks the list
/// from the top, gives every server exactly one attempt bounded by `timeout`,
/// and returns the first good reply. Only immutable configuration is held, so
/// concurrent forwards never contend on anything here.
pub struct UpstreamForwarder {
    upstreams: Vec<SocketAddr>,
    timeout: Duration,
}

impl UpstreamForwarder {
    pub fn new(upstreams: Vec<SocketAddr>, timeout: Duration) -> Self {
        Self { upstreams, timeout }
    }

    /// Build from `ip` / `ip:port` strings; bare IPs use port 53.
    pub fn from_config(upstreams: &[String], timeout: Duration) -> Result<Self, DomainError> {
        let addrs = upstreams
            .iter()
            .map(|s| parse_upstream_addr(s).map_err(DomainError::InvalidDomainName))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(addrs, timeout))
    }

    pub fn upstreams(&self) -> &[SocketAddr] {
        &self.upstreams
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn attempt(&self, server: SocketAddr, query: &DnsQuery) -> Result<DnsResponse, DomainError> {
        let (id, request) = MessageBuilder::build_query(&query.domain, &query.record_type)?;

        let raw = UdpTransport::new(server).send(&request, self.timeout).await?;
        let response = ResponseParser::parse_bytes(raw)?;

        if response.id != id {
            return Err(DomainError::TransportError {
                server: server.to_string(),
                reason: format!("response ID {} does not match query ID {}", response.id, id),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl QueryForwarder for UpstreamForwarder {
    async fn forward(&self, query: &DnsQuery) -> Result<DnsPayload, DomainError> {
        for (position, &server) in self.upstreams.iter().enumerate() {
            match self.attempt(server, query).await {
                Ok(response) => {
                    debug!(
                        domain = %query.domain,
                        record_type = %query.record_type,
                        server = %server,
                        rcode = %ResponseParser::rcode_to_status(response.rcode),
                        "Upstream answered"
                    );
                    return Ok(DnsPayload::new(
                        response.raw_bytes.clone(),
                        server,
                        response.rcode_u16(),
                    )
                    .with_min_ttl(response.min_ttl));
                }
                Err(e @ DomainError::InvalidDomainName(_)) => {
                    // The query itself cannot be encoded; no upstream will do better.
                    warn!(domain = %query.domain, error = %e, "Query not forwardable");
                    return Err(e);
                }
                Err(e) => {
                    warn!(
                        domain = %query.domain,
                        server = %server,
                        attempt = position + 1,
                        error = %e,
                        "Upstream attempt failed, trying next"
                    );
                }
            }
        }

        Err(DomainError::ResolutionExhausted {
            attempts: self.upstreams.len(),
        })
    }
}
