use async_trait::async_trait;
use sieve_dns_domain::DomainError;

/// Supplies the bulk list of domains to block at load and reload time.
#[async_trait]
pub trait BlocklistSource: Send + Sync {
    async fn load(&self) -> Result<Vec<String>, DomainError>;
}
