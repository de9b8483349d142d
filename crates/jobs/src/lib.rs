pub mod cache_sweep;
pub mod runner;
pub mod stats_report;

pub use cache_sweep::CacheSweepJob;
pub use runner::JobRunner;
pub use stats_report::StatsReportJob;

/// Longest accepted job interval, in seconds. Larger values are clamped.
pub const MAX_INTERVAL_SECS: u64 = 7 * 24 * 60 * 60;
