use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Truncated DNS message: {0}")]
    TruncatedMessage(String),

    #[error("No response from {server}")]
    NoResponse { server: String },

    #[error("Delegation loop: no answer after {steps} referral steps")]
    DelegationLoop { steps: usize },

    #[error("Glue recursion exceeded depth {depth}")]
    GlueRecursionExceeded { depth: usize },

    #[error("Domain not found (NXDOMAIN)")]
    NxDomain,

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// True for errors that mean "the server did not answer", which the
    /// resolution engine treats the same as an empty response.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
                | DomainError::IoError(_)
                | DomainError::NoResponse { .. }
        )
    }
}
