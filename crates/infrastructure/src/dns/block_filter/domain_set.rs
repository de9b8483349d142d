use compact_str::CompactString;
use dashmap::DashSet;
use rustc_hash::FxBuildHasher;

/// Normalized blocked domains with parent-suffix lookup.
///
/// Entries are lowercase without a trailing dot. Listing `example.com` blocks
/// `example.com` and every `*.example.com`, never its parent `com`.
pub struct DomainSet {
    domains: DashSet<CompactString, FxBuildHasher>,
}

impl DomainSet {
    pub fn new() -> Self {
        Self {
            domains: DashSet::with_hasher(FxBuildHasher),
        }
    }

    /// Checks `domain` and then each shorter parent suffix; stops at the first hit.
    #[inline]
    pub fn matches(&self, domain: &str) -> bool {
        let mut current = domain;
        loop {
            if self.domains.contains(current) {
                return true;
            }
            match current.find('.') {
                Some(pos) => current = &current[pos + 1..],
                None => return false,
            }
        }
    }

    /// Returns false when the domain was already present.
    pub fn insert(&self, domain: &str) -> bool {
        self.domains.insert(CompactString::new(domain))
    }

    pub fn remove(&self, domain: &str) -> bool {
        self.domains.remove(domain).is_some()
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl Default for DomainSet {
    fn default() -> Self {
        Self::new()
    }
}
