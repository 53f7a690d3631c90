use crate::dns::transport::{DnsTransport, TransportResponse};
use crate::dns::wire::header::RCODE_NXDOMAIN;
use crate::dns::wire::{decode_response, QueryBuilder};
use ferrous_resolver_domain::{DomainError, RecordType, ResourceRecord};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// What one nameserver said. Empty when it stayed silent or its reply was
/// unusable.
#[derive(Debug, Clone, Default)]
pub struct NameserverReply {
    pub records: Vec<ResourceRecord>,
    pub rcode: Option<u8>,
}

impl NameserverReply {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_nxdomain(&self) -> bool {
        self.rcode == Some(RCODE_NXDOMAIN)
    }
}

/// One query/response round trip with a nameserver: UDP first, TCP when
/// the UDP reply is truncated.
pub struct NameserverExchange {
    udp: Arc<dyn DnsTransport>,
    tcp: Arc<dyn DnsTransport>,
    port: u16,
    timeout: Duration,
}

impl NameserverExchange {
    pub fn new(
        udp: Arc<dyn DnsTransport>,
        tcp: Arc<dyn DnsTransport>,
        port: u16,
        timeout: Duration,
    ) -> Self {
        Self {
            udp,
            tcp,
            port,
            timeout,
        }
    }

    /// Transport failures, undecodable headers and id mismatches all yield an
    /// empty reply. A name that cannot be encoded is an error.
    pub async fn query(
        &self,
        nameserver: Ipv4Addr,
        domain: &str,
        record_type: RecordType,
    ) -> Result<NameserverReply, DomainError> {
        let query = QueryBuilder::build(domain, record_type)?;
        let server = SocketAddr::from((nameserver, self.port));

        let Some(response) = self.send(&*self.udp, server, &query.bytes).await? else {
            return Ok(NameserverReply::default());
        };

        let Some((reply, truncated)) = accept(server, query.id, &response) else {
            return Ok(NameserverReply::default());
        };
        if !truncated {
            return Ok(reply);
        }

        debug!(server = %server, domain, "Truncated UDP reply, retrying over TCP");

        let reply = self
            .send(&*self.tcp, server, &query.bytes)
            .await?
            .and_then(|response| accept(server, query.id, &response))
            .map(|(reply, _)| reply)
            .unwrap_or_default();
        Ok(reply)
    }

    /// `Ok(None)` when the server did not answer. Errors that are not
    /// transport failures propagate.
    async fn send(
        &self,
        transport: &dyn DnsTransport,
        server: SocketAddr,
        message: &[u8],
    ) -> Result<Option<TransportResponse>, DomainError> {
        match transport.send(server, message, self.timeout).await {
            Ok(response) => Ok(Some(response)),
            Err(e) if e.is_transport_error() => {
                debug!(
                    server = %server,
                    protocol = transport.protocol_name(),
                    error = %e,
                    "Exchange failed"
                );
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

/// Decodes `response` and checks it answers query `id`. Returns the reply
/// and its TC bit.
fn accept(
    server: SocketAddr,
    id: u16,
    response: &TransportResponse,
) -> Option<(NameserverReply, bool)> {
    let decoded = match decode_response(&response.bytes) {
        Ok(decoded) => decoded,
        Err(e) => {
            debug!(
                server = %server,
                protocol = response.protocol_used,
                error = %e,
                "Discarding undecodable reply"
            );
            return None;
        }
    };

    if decoded.header.id != id {
        warn!(
            server = %server,
            protocol = response.protocol_used,
            expected = id,
            received = decoded.header.id,
            "Discarding reply with mismatched transaction id"
        );
        return None;
    }

    let truncated = decoded.header.is_truncated();
    Some((
        NameserverReply {
            records: decoded.records,
            rcode: Some(decoded.header.rcode()),
        },
        truncated,
    ))
}
