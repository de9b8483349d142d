pub mod clear;
pub mod get_stats;
pub mod sweep_expired;

pub use clear::ClearCacheUseCase;
pub use get_stats::GetCacheStatsUseCase;
pub use sweep_expired::SweepExpiredCacheUseCase;
