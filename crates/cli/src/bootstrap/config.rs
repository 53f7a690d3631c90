use ferrous_resolver_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged once the subscriber is installed, since logging itself is configured from the file.
pub fn log_loaded(config: &Config, config_path: Option<&str>) {
    info!(
        config_file = config_path.unwrap_or("default"),
        roots = config.resolver.root_servers.len(),
        port = config.resolver.nameserver_port,
        timeout_ms = config.resolver.query_timeout_ms,
        max_ttl = config.cache.max_ttl,
        "Configuration loaded"
    );
}
