use ferrous_resolver_domain::DomainError;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    #[error("message truncated at offset {offset}")]
    Truncated { offset: usize },

    #[error("too many compression pointers (last at offset {offset})")]
    PointerLoop { offset: usize },

    #[error("label of {len} bytes exceeds 63")]
    LabelTooLong { len: usize },

    #[error("name exceeds 255 bytes on the wire")]
    NameTooLong,

    #[error("empty label in name")]
    EmptyLabel,

    #[error("reserved label type 0x{byte:02x}")]
    ReservedLabelType { byte: u8 },
}

impl From<WireError> for DomainError {
    fn from(err: WireError) -> Self {
        match err {
            WireError::Truncated { .. } => DomainError::TruncatedMessage(err.to_string()),
            WireError::LabelTooLong { .. } | WireError::NameTooLong | WireError::EmptyLabel => {
                DomainError::InvalidDomainName(err.to_string())
            }
            WireError::PointerLoop { .. } | WireError::ReservedLabelType { .. } => {
                DomainError::InvalidDnsResponse(err.to_string())
            }
        }
    }
}
