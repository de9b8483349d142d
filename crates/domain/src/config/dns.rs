use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Port used for upstream entries given as a bare IP address.
pub const DEFAULT_UPSTREAM_PORT: u16 = 53;

/// DNS resolution configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Ordered upstream resolvers. Order is failover precedence, not load balancing.
    /// Entries are `ip` or `ip:port` (`[v6]:port` for IPv6 with a port).
    #[serde(default = "default_upstream_servers")]
    pub upstream_servers: Vec<String>,

    /// Per-attempt forward timeout in milliseconds
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// TTL in seconds applied to every cached upstream response.
    /// The TTL embedded in the upstream answer is not used.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl: u32,

    /// Maximum resident cache entries
    #[serde(default = "default_cache_max_entries")]
    pub cache_max_entries: usize,

    /// Seconds between background sweeps of expired cache entries
    #[serde(default = "default_cache_sweep_interval")]
    pub cache_sweep_interval: u64,
}

impl DnsConfig {
    pub fn query_timeout_duration(&self) -> Duration {
        Duration::from_millis(self.query_timeout)
    }

    pub fn cache_ttl_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.cache_ttl))
    }

    pub fn cache_sweep_duration(&self) -> Duration {
        Duration::from_secs(self.cache_sweep_interval)
    }

    /// Parse every upstream entry, preserving order.
    pub fn upstream_addrs(&self) -> Result<Vec<SocketAddr>, String> {
        self.upstream_servers
            .iter()
            .map(|s| parse_upstream_addr(s))
            .collect()
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            upstream_servers: default_upstream_servers(),
            query_timeout: default_query_timeout(),
            cache_ttl: default_cache_ttl(),
            cache_max_entries: default_cache_max_entries(),
            cache_sweep_interval: default_cache_sweep_interval(),
        }
    }
}

/// Parse an upstream entry: `8.8.8.8`, `8.8.8.8:5353`, `2001:db8::1` or `[2001:db8::1]:53`.
pub fn parse_upstream_addr(entry: &str) -> Result<SocketAddr, String> {
    let entry = entry.trim();
    if let Ok(addr) = entry.parse::<SocketAddr>() {
        return Ok(addr);
    }
    if let Ok(ip) = entry.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, DEFAULT_UPSTREAM_PORT));
    }
    Err(format!("Invalid upstream address '{}'", entry))
}

// Default functions for DNS config
fn default_upstream_servers() -> Vec<String> {
    vec![
        "8.8.8.8".to_string(),
        "8.8.4.4".to_string(),
        "1.1.1.1".to_string(),
    ]
}

fn default_query_timeout() -> u64 {
    5000
}

fn default_cache_ttl() -> u32 {
    300
}

fn default_cache_max_entries() -> usize {
    10_000
}

fn default_cache_sweep_interval() -> u64 {
    60
}
