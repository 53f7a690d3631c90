//! Configuration module for Ferrous Resolver
//!
//! - `root`: top-level configuration, file search and CLI overrides
//! - `resolver`: root servers, timeouts and delegation caps
//! - `cache`: TTL bounds for the answer cache
//! - `logging`: log level
//! - `errors`: configuration errors

pub mod cache;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
