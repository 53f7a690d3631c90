use ferrous_resolver_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs the stdout subscriber. `RUST_LOG` wins over the configured
/// level; `debug` forces the debug level.
pub fn init_logging(config: &Config, debug: bool) {
    let level = if debug {
        "debug"
    } else {
        config.logging.level.as_str()
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(true)
        .init();

    info!("Logging initialized at level: {}", level);
}
