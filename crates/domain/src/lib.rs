//! Ferrous Resolver Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod root_hints;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::DnsQuery;
pub use dns_record::{RecordData, RecordType, ResourceRecord};
pub use errors::DomainError;
pub use root_hints::ROOT_SERVERS;
