pub mod cache;
pub mod resolver;
pub mod transport;
pub mod wire;

pub use cache::{CacheKey, TtlCache};
pub use resolver::{IterativeResolver, ResolverBuilder};
pub use transport::{DnsTransport, TcpTransport, TransportResponse, UdpTransport};
