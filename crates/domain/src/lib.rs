//! Sieve DNS Domain Layer
pub mod blocklist_stats;
pub mod cache_stats;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod query_event;
pub mod query_stats;
pub mod validators;

pub use blocklist_stats::BlocklistStats;
pub use cache_stats::CacheStats;
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::DnsQuery;
pub use dns_record::RecordType;
pub use errors::DomainError;
pub use query_event::{QueryEvent, QueryOutcome};
pub use query_stats::QueryStats;
