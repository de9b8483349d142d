pub mod blocklist_source;
pub mod dns_payload;
pub mod domain_matcher;
pub mod query_event_sink;
pub mod query_forwarder;
pub mod query_stats_source;
pub mod response_cache;

pub use blocklist_source::BlocklistSource;
pub use dns_payload::DnsPayload;
pub use domain_matcher::DomainMatcher;
pub use query_event_sink::{NoopEventSink, QueryEventSink};
pub use query_forwarder::QueryForwarder;
pub use query_stats_source::QueryStatsSource;
pub use response_cache::ResponseCache;
