use super::blocking::BlockingConfig;
use super::dns::{parse_upstream_addr, DnsConfig};
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound for periodic job intervals, in seconds (one week).
pub const MAX_JOB_INTERVAL_SECS: u64 = 7 * 24 * 60 * 60;

/// Root configuration, deserialized from TOML.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub blocking: BlockingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub upstream_servers: Option<Vec<String>>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from `path` (defaults when the file is absent) and
    /// apply CLI overrides on top.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) if Path::new(p).exists() => Self::from_file(p)?,
            _ => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(upstreams) = overrides.upstream_servers {
            if !upstreams.is_empty() {
                self.dns.upstream_servers = upstreams;
            }
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dns.upstream_servers.is_empty() {
            return Err(ConfigError::Validation(
                "at least one upstream server must be configured".to_string(),
            ));
        }
        for entry in &self.dns.upstream_servers {
            parse_upstream_addr(entry).map_err(ConfigError::Validation)?;
        }
        if self.dns.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "dns.query_timeout must be greater than zero".to_string(),
            ));
        }
        if self.dns.cache_max_entries == 0 {
            return Err(ConfigError::Validation(
                "dns.cache_max_entries must be greater than zero".to_string(),
            ));
        }
        if self.dns.cache_sweep_interval == 0 {
            return Err(ConfigError::Validation(
                "dns.cache_sweep_interval must be greater than zero".to_string(),
            ));
        }
        if self.dns.cache_sweep_interval > MAX_JOB_INTERVAL_SECS {
            return Err(ConfigError::Validation(format!(
                "dns.cache_sweep_interval must be at most {MAX_JOB_INTERVAL_SECS} seconds"
            )));
        }
        if self.logging.stats_interval > MAX_JOB_INTERVAL_SECS {
            return Err(ConfigError::Validation(format!(
                "logging.stats_interval must be at most {MAX_JOB_INTERVAL_SECS} seconds"
            )));
        }
        Ok(())
    }
}
