use super::{io_error, timeout_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use ferrous_resolver_domain::DomainError;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Receive buffer for a single UDP response
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP. A fresh ephemeral socket is bound per exchange and closed
/// when it goes out of scope.
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpTransport;

impl UdpTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let bind_addr = if server.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| io_error(server, "bind UDP socket for", e))?;

        let bytes_sent = tokio::time::timeout(timeout, socket.send_to(message_bytes, server))
            .await
            .map_err(|_| timeout_error(server))?
            .map_err(|e| io_error(server, "send UDP query to", e))?;

        debug!(server = %server, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let bytes_received =
            tokio::time::timeout(timeout, recv_from_server(&socket, server, &mut recv_buf))
                .await
                .map_err(|_| timeout_error(server))?
                .map_err(|e| io_error(server, "receive UDP response from", e))?;

        recv_buf.truncate(bytes_received);

        debug!(server = %server, bytes_received, "UDP response received");

        Ok(TransportResponse {
            bytes: Bytes::from(recv_buf),
            protocol_used: "UDP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

/// Waits for a datagram whose source is `server`. Anything else is dropped
/// and the wait continues; the caller bounds it with the exchange timeout.
async fn recv_from_server(
    socket: &UdpSocket,
    server: SocketAddr,
    buf: &mut [u8],
) -> io::Result<usize> {
    loop {
        let (len, from_addr) = socket.recv_from(buf).await?;
        if from_addr == server {
            return Ok(len);
        }
        warn!(
            expected = %server,
            received_from = %from_addr,
            "Dropping UDP datagram from unexpected source"
        );
    }
}
