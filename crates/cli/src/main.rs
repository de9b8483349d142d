//! # Sieve DNS
//!
//! Entry point for the filtering DNS forwarder.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use sieve_dns_domain::CliOverrides;
use sieve_dns_infrastructure::dns::{DnsServerHandler, QueryEventConsumer};
use sieve_dns_jobs::{CacheSweepJob, JobRunner, StatsReportJob};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "sieve-dns")]
#[command(version)]
#[command(about = "A small DNS forwarder with domain blocking and response caching")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long, default_value = "sieve-dns.toml")]
    config: String,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Upstream resolver (`ip` or `ip:port`), in failover order. Repeatable.
    #[arg(short = 'u', long = "upstream")]
    upstreams: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            dns_port: self.dns_port,
            bind_address: self.bind.clone(),
            upstream_servers: (!self.upstreams.is_empty()).then(|| self.upstreams.clone()),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(Some(&cli.config), cli.overrides())?;
    bootstrap::init_logging(&config);
    bootstrap::log_config(Some(&cli.config), &config);

    info!("Sieve DNS starting");

    let services = di::DnsServices::new(&config)?;
    let use_cases = di::UseCases::new(&services, &config);

    let metrics = services.metrics.clone();
    let _consumer = QueryEventConsumer::new(metrics.clone()).start(services.events);

    if config.blocking.enabled {
        match use_cases.reload_blocklist.execute().await {
            Ok(count) => info!(domains = count, "Blocklist loaded"),
            Err(e) => warn!(error = %e, "Blocklist unavailable, starting with an empty blocklist"),
        }
    } else {
        info!("Blocking disabled, all queries will be resolved");
    }

    let shutdown = CancellationToken::new();

    let mut runner = JobRunner::new().with_cache_sweep(
        CacheSweepJob::new(use_cases.sweep_cache.clone())
            .with_interval(config.dns.cache_sweep_interval)
            .with_cancellation(shutdown.clone()),
    );
    if config.logging.stats_interval > 0 {
        runner = runner.with_stats_report(
            StatsReportJob::new(use_cases.cache_stats.clone(), use_cases.query_stats.clone())
                .with_blocklist_stats(use_cases.blocklist_stats.clone())
                .with_interval(config.logging.stats_interval)
                .with_cancellation(shutdown.clone()),
        );
    }
    let jobs = runner.start().await;

    let handler = DnsServerHandler::new(use_cases.handle_query.clone());
    let mut dns_task = tokio::spawn(server::start_dns_server(
        config.server.dns_bind(),
        handler,
        shutdown.clone(),
    ));

    let server_result = tokio::select! {
        result = &mut dns_task => result,
        signal = tokio::signal::ctrl_c() => {
            if let Err(e) = signal {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
            info!("Shutdown requested");
            shutdown.cancel();
            dns_task.await
        }
    };
    // Also stops the jobs when the server exits on its own.
    shutdown.cancel();

    for job in jobs {
        if let Err(e) = job.await {
            error!(error = %e, "Background job panicked");
        }
    }

    let totals = metrics.snapshot();
    info!(
        total = totals.total,
        blocked = totals.blocked,
        cached = totals.cached,
        forwarded = totals.forwarded,
        errors = totals.errors,
        bytes_saved = totals.bytes_saved,
        "Sieve DNS stopped"
    );

    server_result?
}
