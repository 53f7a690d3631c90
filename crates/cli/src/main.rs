//! # Ferrous Resolver
//!
//! Resolves a name iteratively from the root servers and prints the answer
//! records.

mod bootstrap;
mod di;
mod output;

use clap::Parser;
use ferrous_resolver_domain::{CliOverrides, DomainError, RecordType};
use std::process::ExitCode;
use tracing::warn;

const CLEAR_CACHE: &str = "clear-cache";

#[derive(Parser, Debug)]
#[command(name = "ferrous-resolver")]
#[command(version)]
#[command(about = "Iterative DNS resolver starting from the root servers")]
struct Cli {
    /// `<domain> <type>` or `clear-cache`
    #[arg(value_name = "ARGS")]
    args: Vec<String>,

    /// Print every delegation step
    #[arg(short = 'd', long)]
    debug: bool,

    /// Configuration file
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Per-exchange timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

enum Command {
    ClearCache,
    Resolve { domain: String, record_type: String },
}

impl Cli {
    fn command(&self) -> Option<Command> {
        match self.args.as_slice() {
            [first, ..] if first == CLEAR_CACHE => Some(Command::ClearCache),
            [domain, record_type, ..] => Some(Command::Resolve {
                domain: domain.clone(),
                record_type: record_type.clone(),
            }),
            _ => None,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let Some(command) = cli.command() else {
        println!("{}", output::USAGE);
        return Ok(ExitCode::FAILURE);
    };

    let overrides = CliOverrides {
        query_timeout_ms: cli.timeout_ms,
        log_level: cli.log_level.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config, cli.debug);
    bootstrap::config::log_loaded(&config, cli.config.as_deref());

    let services = di::Services::build(&config, cli.debug)?;

    match command {
        Command::ClearCache => {
            services.clear_cache.execute();
            println!("{}", output::CACHE_CLEARED);
            Ok(ExitCode::SUCCESS)
        }
        Command::Resolve {
            domain,
            record_type,
        } => {
            let record_type = parse_record_type(&record_type);
            match services.resolve_query.execute(&domain, record_type).await {
                Ok(resolution) => {
                    print!("{}", output::render_resolution(&resolution));
                    Ok(ExitCode::SUCCESS)
                }
                Err(DomainError::NxDomain) => {
                    println!("{}", output::NO_RECORDS);
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => Err(e.into()),
            }
        }
    }
}

/// Unsupported types fall back to A.
fn parse_record_type(input: &str) -> RecordType {
    input.parse().unwrap_or_else(|e: String| {
        warn!("{}, falling back to A", e);
        RecordType::A
    })
}
