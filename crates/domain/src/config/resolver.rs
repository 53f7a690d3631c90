use crate::root_hints::ROOT_SERVERS;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::time::Duration;

/// Iterative resolution settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Root servers probed in order when a resolution starts
    #[serde(default = "default_root_servers")]
    pub root_servers: Vec<String>,

    #[serde(default = "default_nameserver_port")]
    pub nameserver_port: u16,

    /// Per-exchange receive timeout in milliseconds
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Referral steps allowed before giving up with a delegation loop
    #[serde(default = "default_max_delegation_steps")]
    pub max_delegation_steps: usize,

    /// Nested missing-glue resolutions allowed
    #[serde(default = "default_max_glue_depth")]
    pub max_glue_depth: usize,
}

impl ResolverConfig {
    /// Parses `root_servers`, returning the first entry that is not an IPv4 address on failure.
    pub fn root_server_addrs(&self) -> Result<Vec<Ipv4Addr>, String> {
        self.root_servers
            .iter()
            .map(|s| s.trim().parse::<Ipv4Addr>().map_err(|_| s.clone()))
            .collect()
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_servers: default_root_servers(),
            nameserver_port: default_nameserver_port(),
            query_timeout_ms: default_query_timeout_ms(),
            max_delegation_steps: default_max_delegation_steps(),
            max_glue_depth: default_max_glue_depth(),
        }
    }
}

fn default_root_servers() -> Vec<String> {
    ROOT_SERVERS.iter().map(|ip| ip.to_string()).collect()
}

fn default_nameserver_port() -> u16 {
    53
}

fn default_query_timeout_ms() -> u64 {
    2000
}

fn default_max_delegation_steps() -> usize {
    32
}

fn default_max_glue_depth() -> usize {
    4
}
