#![allow(unused_imports)]

pub mod builders;
pub mod dns_server_mock;

pub use builders::{Reply, Rr};
pub use dns_server_mock::MockDnsServer;
pub use scripted_transport::{ScriptedNetwork, ScriptedTransport, SentQuery};
