pub mod dns_cache_port;
pub mod dns_resolver;

pub use dns_cache_port::DnsCachePort;
pub use dns_resolver::{DnsResolution, DnsResolver};
