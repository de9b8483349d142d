pub mod blocklist;
pub mod cache;
pub mod dns;
pub mod queries;

// Re-export use cases
pub use blocklist::{GetBlocklistStatsUseCase, ReloadBlocklistUseCase};
pub use cache::{ClearCacheUseCase, GetCacheStatsUseCase, SweepExpiredCacheUseCase};
pub use dns::{AnswerSource, DnsReply, HandleDnsQueryUseCase};
pub use queries::GetQueryStatsUseCase;
