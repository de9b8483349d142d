use super::handler::DnsServerHandler;
use crate::dns::transport::MAX_UDP_RESPONSE_SIZE;
use sieve_dns_domain::DomainError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// UDP listener: one task per inbound datagram.
pub struct UdpDnsServer {
    socket: Arc<UdpSocket>,
    handler: DnsServerHandler,
}

impl UdpDnsServer {
    pub async fn bind(addr: &str, handler: DnsServerHandler) -> Result<Self, DomainError> {
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind {addr}: {e}")))?;
        Ok(Self {
            socket: Arc::new(socket),
            handler,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        self.socket
            .local_addr()
            .map_err(|e| DomainError::IoError(e.to_string()))
    }

    /// Serve until `shutdown` is cancelled. In-flight queries finish on their own.
    pub async fn run(self, shutdown: CancellationToken) {
        let mut buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        info!(
            bind_address = %self.local_addr().map(|a| a.to_string()).unwrap_or_default(),
            protocol = "UDP",
            "DNS server ready to accept queries"
        );

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("DNS server shutting down");
                    break;
                }
                received = self.socket.recv_from(&mut buf) => {
                    let (len, peer) = match received {
                        Ok(r) => r,
                        Err(e) => {
                            warn!(error = %e, "UDP receive failed");
                            continue;
                        }
                    };

                    let packet = buf[..len].to_vec();
                    let socket = Arc::clone(&self.socket);
                    let handler = self.handler.clone();

                    tokio::spawn(async move {
                        let Some(reply) = handler.handle_packet(&packet, peer.ip()).await else {
                            return;
                        };
                        if let Err(e) = socket.send_to(&reply, peer).await {
                            debug!(client = %peer, error = %e, "Failed to send DNS reply");
                        }
                    });
                }
            }
        }
    }
}
