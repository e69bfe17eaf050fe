//! MovieHub CLI - Command-line interface
//!
//! Runs the web UI or queries the catalog and trending store directly.

mod commands;

use clap::Parser;
use moviehub_core::MovieHubError;
use moviehub_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "moviehub")]
#[command(about = "Movie discovery with debounced search and trending titles")]
struct Cli {
    /// Console log level; `RUST_LOG` overrides it
    #[arg(long, value_enum, default_value_t = CliLogLevel::Info, global = true)]
    log_level: CliLogLevel,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_level.as_tracing_level(), None).map_err(|e| {
        MovieHubError::Configuration {
            reason: format!("logging setup failed: {e}"),
        }
    })?;

    commands::handle_command(cli.command).await
}
