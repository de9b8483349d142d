use super::RecordType;
use crate::validators::normalize_domain;
use std::sync::Arc;

/// DNS query (domain + record type).
/// Uses `Arc<str>` for cheap cloning across orchestrator → cache → forwarder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    /// Same query with the name lowercased and the trailing dot stripped.
    ///
    /// Returns `self` unchanged (no allocation) when already normalized.
    pub fn normalized(&self) -> Self {
        let normalized = normalize_domain(&self.domain);
        if normalized.as_str() == &*self.domain {
            return self.clone();
        }
        Self {
            domain: Arc::from(normalized.as_str()),
            record_type: self.record_type,
        }
    }
}
