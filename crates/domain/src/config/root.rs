use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOCAL_CONFIG_FILE: &str = "ferrous-resolver.toml";
const SYSTEM_CONFIG_FILE: &str = "/etc/ferrous-resolver/config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub query_timeout_ms: Option<u64>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads configuration from the first file found, in order: `path`,
    /// `./ferrous-resolver.toml`, `/etc/ferrous-resolver/config.toml`.
    /// Falls back to defaults when none exists. An explicit `path` that
    /// cannot be read is an error.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::search_default_locations()?,
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    fn search_default_locations() -> Result<Self, ConfigError> {
        for candidate in [LOCAL_CONFIG_FILE, SYSTEM_CONFIG_FILE] {
            if Path::new(candidate).exists() {
                return Self::from_file(candidate);
            }
        }
        Ok(Self::default())
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|message| ConfigError::Parse {
            path: path.to_string(),
            message,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(timeout) = overrides.query_timeout_ms {
            self.resolver.query_timeout_ms = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.root_servers.is_empty() {
            return Err(ConfigError::Validation(
                "resolver.root_servers must not be empty".to_string(),
            ));
        }
        if let Err(bad) = self.resolver.root_server_addrs() {
            return Err(ConfigError::Validation(format!(
                "resolver.root_servers contains '{}', which is not an IPv4 address",
                bad
            )));
        }
        if self.resolver.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "resolver.query_timeout_ms must be greater than 0".to_string(),
            ));
        }
        if self.resolver.max_delegation_steps == 0 {
            return Err(ConfigError::Validation(
                "resolver.max_delegation_steps must be greater than 0".to_string(),
            ));
        }
        if self.resolver.max_glue_depth == 0 {
            return Err(ConfigError::Validation(
                "resolver.max_glue_depth must be greater than 0".to_string(),
            ));
        }
        if self.cache.default_ttl > self.cache.max_ttl {
            return Err(ConfigError::Validation(format!(
                "cache.default_ttl ({}) exceeds cache.max_ttl ({})",
                self.cache.default_ttl, self.cache.max_ttl
            )));
        }
        Ok(())
    }
}
