//! Ferrous Resolver Infrastructure Layer
//!
//! Wire codec, UDP/TCP transports, the TTL answer cache and the iterative
//! resolution engine.

pub mod dns;
