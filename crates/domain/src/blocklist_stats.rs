use std::time::SystemTime;

/// Size and freshness of the active blocklist snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlocklistStats {
    pub total_domains: usize,
    /// `None` until the first reload
    pub last_reload: Option<SystemTime>,
}

impl BlocklistStats {
    pub fn new(total_domains: usize, last_reload: Option<SystemTime>) -> Self {
        Self {
            total_domains,
            last_reload,
        }
    }

    /// Seconds since the last reload, if one happened.
    pub fn seconds_since_reload(&self) -> Option<u64> {
        self.last_reload
            .and_then(|t| t.elapsed().ok())
            .map(|d| d.as_secs())
    }
}
