use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// TTL applied to an empty answer set, in seconds
    #[serde(default = "default_ttl")]
    pub default_ttl: u32,

    /// Upper bound on how long any answer set stays cached, in seconds
    #[serde(default = "default_max_ttl")]
    pub max_ttl: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: default_ttl(),
            max_ttl: default_max_ttl(),
        }
    }
}

fn default_ttl() -> u32 {
    3600
}

fn default_max_ttl() -> u32 {
    3600
}
