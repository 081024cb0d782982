//! Talent Intelligence: terminal front-end for the job board.
//!
//! Loads configuration, initializes logging and dispatches to the command
//! tree in `talent-cli`.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use talent_cli::Cli;
use talent_core::config::{AppConfig, LogFormat};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::debug!(
        origin = %config.api.origin(),
        env = %cli.env,
        "Starting talent v{}",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = cli.execute(config).await {
        tracing::debug!(kind = %e.kind, status = ?e.status, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging. Output goes to stderr so table and JSON
/// output on stdout stay clean.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Pretty => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
