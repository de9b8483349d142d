use sieve_dns_domain::QueryOutcome;

/// Estimated bytes saved for a blocked ad or tracker domain.
pub const AD_TRACKER_BLOCKED_BYTES: u64 = 2048;
/// Estimated bytes saved for any other blocked domain.
pub const BLOCKED_BYTES: u64 = 1024;
/// Estimated bytes saved by answering from cache instead of upstream.
pub const CACHED_BYTES: u64 = 50;

/// Domains whose blocked requests typically carry heavy ad or tracking payloads.
const AD_TRACKER_DOMAINS: &[&str] = &[
    "googleadservices.com",
    "googlesyndication.com",
    "doubleclick.net",
    "facebook.com",
    "connect.facebook.net",
    "graph.facebook.com",
    "amazon-adsystem.com",
    "ads.yahoo.com",
    "adsystem.com",
];

/// Heuristic bytes-saved figures for query analytics.
///
/// These are fixed approximations, never measured payload sizes. They exist so
/// dashboards can show an order-of-magnitude bandwidth figure.
#[derive(Debug, Clone, Copy, Default)]
pub struct BandwidthEstimator;

impl BandwidthEstimator {
    pub fn new() -> Self {
        Self
    }

    /// `domain` must already be normalized.
    pub fn estimate(&self, domain: &str, outcome: QueryOutcome) -> u64 {
        match outcome {
            QueryOutcome::Blocked if Self::is_ad_tracker(domain) => AD_TRACKER_BLOCKED_BYTES,
            QueryOutcome::Blocked => BLOCKED_BYTES,
            QueryOutcome::Cached => CACHED_BYTES,
            QueryOutcome::Forwarded | QueryOutcome::Error => 0,
        }
    }

    /// Dot-suffix match against the curated ad/tracker list.
    pub fn is_ad_tracker(domain: &str) -> bool {
        AD_TRACKER_DOMAINS.iter().any(|known| {
            domain == *known
                || domain
                    .strip_suffix(known)
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ad_tracker_suffix_match() {
        assert!(BandwidthEstimator::is_ad_tracker("doubleclick.net"));
        assert!(BandwidthEstimator::is_ad_tracker("stats.g.doubleclick.net"));
        assert!(BandwidthEstimator::is_ad_tracker("pixel.facebook.com"));
        assert!(!BandwidthEstimator::is_ad_tracker("notdoubleclick.net"));
        assert!(!BandwidthEstimator::is_ad_tracker("example.com"));
    }

    #[test]
    fn test_estimates_per_outcome() {
        let est = BandwidthEstimator::new();
        assert_eq!(est.estimate("ad.doubleclick.net", QueryOutcome::Blocked), 2048);
        assert_eq!(est.estimate("ads.example.com", QueryOutcome::Blocked), 1024);
        assert_eq!(est.estimate("example.com", QueryOutcome::Cached), 50);
        assert_eq!(est.estimate("example.com", QueryOutcome::Forwarded), 0);
        assert_eq!(est.estimate("doubleclick.net", QueryOutcome::Error), 0);
    }
}
