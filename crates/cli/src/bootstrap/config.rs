use sieve_dns_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Log the effective configuration. Called once logging is up.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        dns_port = config.server.dns_port,
        bind = %config.server.bind_address,
        upstreams = ?config.dns.upstream_servers,
        query_timeout_ms = config.dns.query_timeout,
        cache_ttl_secs = config.dns.cache_ttl,
        cache_max_entries = config.dns.cache_max_entries,
        blocking = config.blocking.enabled,
        "Configuration loaded"
    );
}
