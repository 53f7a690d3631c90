//! Ferrous Resolver Application Layer
//!
//! Ports implemented by the infrastructure crate and the use cases the
//! binary drives through them.

pub mod ports;
pub mod use_cases;
