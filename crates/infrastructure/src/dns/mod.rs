pub mod block_filter;
pub mod cache;
pub mod events;
pub mod forwarding;
pub mod server;
pub mod transport;

pub use block_filter::{BlocklistMatcher, LocalBlocklistSource};
pub use cache::DnsCache;
pub use events::{QueryEventConsumer, QueryEventEmitter, QueryMetrics};
pub use forwarding::UpstreamForwarder;
pub use server::{DnsServerHandler, UdpDnsServer};
