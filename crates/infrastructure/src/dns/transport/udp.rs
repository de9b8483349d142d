use bytes::Bytes;
use sieve_dns_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Maximum UDP DNS response size with EDNS(0)
pub const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP, one socket per exchange.
///
/// Each call binds its own ephemeral socket and drops it on return, so
/// concurrent exchanges share nothing and a failed attempt releases its
/// socket before the caller moves on.
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    /// Send one query and wait for one reply. `timeout` bounds the whole exchange.
    pub async fn send(&self, message_bytes: &[u8], timeout: Duration) -> Result<Bytes, DomainError> {
        match tokio::time::timeout(timeout, self.exchange(message_bytes)).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::TransportTimeout {
                server: self.server_addr.to_string(),
            }),
        }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Bytes, DomainError> {
        let bind_addr = if self.server_addr.is_ipv4() {
            SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0)
        } else {
            SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0)
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.transport_error("bind", e))?;

        // Connected socket: datagrams from any other source are discarded by the kernel.
        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| self.transport_error("connect", e))?;

        let bytes_sent = socket
            .send(message_bytes)
            .await
            .map_err(|e| self.transport_error("send", e))?;

        debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let bytes_received = socket
            .recv(&mut recv_buf)
            .await
            .map_err(|e| self.transport_error("recv", e))?;
        recv_buf.truncate(bytes_received);

        debug!(server = %self.server_addr, bytes_received, "UDP response received");

        Ok(Bytes::from(recv_buf))
    }

    fn transport_error(&self, op: &str, err: std::io::Error) -> DomainError {
        DomainError::TransportError {
            server: self.server_addr.to_string(),
            reason: format!("{op}: {err}"),
        }
    }
}
