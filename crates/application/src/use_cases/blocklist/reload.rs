use crate::ports::{BlocklistSource, DomainMatcher};
use sieve_dns_domain::DomainError;
use std::sync::Arc;
use tracing::{error, info};

/// Pull the full domain list from the source and publish it as the new
/// blocklist snapshot.
///
/// When the source fails the active snapshot is left untouched.
pub struct ReloadBlocklistUseCase {
    source: Arc<dyn BlocklistSource>,
    matcher: Arc<dyn DomainMatcher>,
}

impl ReloadBlocklistUseCase {
    pub fn new(source: Arc<dyn BlocklistSource>, matcher: Arc<dyn DomainMatcher>) -> Self {
        Self { source, matcher }
    }

    pub async fn execute(&self) -> Result<usize, DomainError> {
        let domains = match self.source.load().await {
            Ok(domains) => domains,
            Err(e) => {
                error!(error = %e, "Blocklist source failed, keeping current blocklist");
                return Err(e);
            }
        };

        let fetched = domains.len();
        let accepted = self.matcher.reload(domains);
        info!(fetched, accepted, "Blocklist reloaded");
        Ok(accepted)
    }
}
