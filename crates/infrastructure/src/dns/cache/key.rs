use compact_str::CompactString;
use sieve_dns_domain::{DnsQuery, RecordType};

/// Cache key: (normalized query name, query type).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub domain: CompactString,
    pub record_type: RecordType,
}

impl CacheKey {
    #[inline]
    pub fn new(domain: &str, record_type: RecordType) -> Self {
        Self {
            domain: CompactString::new(domain),
            record_type,
        }
    }

    #[inline]
    pub fn from_query(query: &DnsQuery) -> Self {
        Self::new(&query.domain, query.record_type)
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.domain, self.record_type)
    }
}
