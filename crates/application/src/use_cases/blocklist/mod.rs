pub mod get_stats;
pub mod reload;

pub use get_stats::GetBlocklistStatsUseCase;
pub use reload::ReloadBlocklistUseCase;
