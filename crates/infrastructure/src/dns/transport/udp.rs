//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! The socket is `connect`ed to the configured resolver, so the kernel drops
//! datagrams from any other source and ICMP port-unreachable surfaces as
//! `ConnectionRefused`. Messages are sent as-is (no framing).

use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;
use vpncheck_domain::DomainError;

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport bound to a single resolver
#[derive(Debug, Clone)]
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    /// Send one query and wait for the datagram carrying `query_id`.
    ///
    /// Datagrams with any other ID are skipped. The whole exchange shares a
    /// single deadline; there is no retransmission.
    pub async fn exchange(
        &self,
        query_id: u16,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.io_error("bind UDP socket", e))?;

        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| self.io_error("connect UDP socket", e))?;

        let exchange = async {
            let bytes_sent = socket.send(message_bytes).await?;

            debug!(
                server = %self.server_addr,
                bytes_sent = bytes_sent,
                query_id = query_id,
                "UDP query sent"
            );

            let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
            loop {
                let len = socket.recv(&mut recv_buf).await?;

                if len >= 2 && u16::from_be_bytes([recv_buf[0], recv_buf[1]]) == query_id {
                    recv_buf.truncate(len);
                    return Ok::<_, io::Error>(recv_buf);
                }

                debug!(
                    server = %self.server_addr,
                    bytes_received = len,
                    "Ignoring UDP datagram with mismatched ID"
                );
            }
        };

        let response = tokio::time::timeout(timeout, exchange)
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: self.server_addr.to_string(),
            })?
            .map_err(|e| self.io_error("exchange UDP query", e))?;

        debug!(
            server = %self.server_addr,
            bytes_received = response.len(),
            "UDP response received"
        );

        Ok(response)
    }

    fn io_error(&self, action: &str, e: io::Error) -> DomainError {
        match e.kind() {
            io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused {
                server: self.server_addr.to_string(),
            },
            io::ErrorKind::TimedOut => DomainError::TransportTimeout {
                server: self.server_addr.to_string(),
            },
            _ => DomainError::TransportError {
                server: self.server_addr.to_string(),
                reason: format!("failed to {}: {}", action, e),
            },
        }
    }
}
