use sieve_dns_infrastructure::dns::{DnsServerHandler, UdpDnsServer};
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn start_dns_server(
    bind_addr: String,
    handler: DnsServerHandler,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    info!(bind_address = %bind_addr, "Starting DNS server");

    let server = UdpDnsServer::bind(&bind_addr, handler).await?;
    server.run(shutdown).await;

    info!("DNS server stopped");
    Ok(())
}
