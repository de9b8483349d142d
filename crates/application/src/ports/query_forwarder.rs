use super::DnsPayload;
use async_trait::async_trait;
use sieve_dns_domain::{DnsQuery, DomainError};

#[async_trait]
pub trait QueryForwarder: Send + Sync {
    /// Try each upstream in order; first successful response wins.
    ///
    /// Returns `DomainError::ResolutionExhausted` when every upstream failed.
    async fn forward(&self, query: &DnsQuery) -> Result<DnsPayload, DomainError>;
}
