pub mod key;
pub mod storage;

pub use key::CacheKey;
pub use storage::{DnsCache, SWEEP_BATCH_SIZE};
