use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Upstream {server} timed out")]
    TransportTimeout { server: String },

    #[error("Upstream {server} transport error: {reason}")]
    TransportError { server: String, reason: String },

    #[error("All {attempts} upstream servers failed")]
    ResolutionExhausted { attempts: usize },

    #[error("Response cache unavailable: {0}")]
    CacheUnavailable(String),

    #[error("Blocklist unavailable: {0}")]
    BlocklistUnavailable(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
