//! Configuration module for Sieve DNS
//!
//! This module contains all configuration structures organized by domain:
//! - `root`: Main configuration and CLI overrides
//! - `server`: Listener binding
//! - `dns`: Upstreams, forward timeout and response cache settings
//! - `blocking`: Blocklist settings
//! - `logging`: Logging and periodic stats settings
//! - `errors`: Configuration errors

pub mod blocking;
pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use blocking::BlockingConfig;
pub use dns::{parse_upstream_addr, DnsConfig};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config, MAX_JOB_INTERVAL_SECS};
pub use server::ServerConfig;
