pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use bytes::Bytes;
use ferrous_resolver_domain::DomainError;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

pub use tcp::TcpTransport;
pub use udp::UdpTransport;

/// Result of a raw DNS transport operation
#[derive(Debug)]
pub struct TransportResponse {
    /// Raw DNS response bytes (wire format)
    pub bytes: Bytes,
    /// Which protocol was used
    pub protocol_used: &'static str,
}

/// Sends one raw DNS message to `server` and returns the raw reply.
///
/// Every step is bounded by `timeout`. Errors carry the server address.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

pub(crate) fn timeout_error(server: SocketAddr) -> DomainError {
    DomainError::TransportTimeout {
        server: server.to_string(),
    }
}

pub(crate) fn io_error(server: SocketAddr, context: &str, err: io::Error) -> DomainError {
    match err.kind() {
        io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused {
            server: server.to_string(),
        },
        _ => DomainError::IoError(format!("{} {}: {}", context, server, err)),
    }
}
