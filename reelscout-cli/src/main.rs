//! ReelScout CLI - Command-line interface
//!
//! Serves the web interface or runs one search or details lookup in the
//! terminal.

mod commands;

use std::path::PathBuf;

use clap::Parser;
use reelscout_core::ReelScoutError;
use reelscout_core::tracing_setup::{CliLogLevel, init_tracing};
use tracing::error;

#[derive(Parser)]
#[command(name = "reelscout")]
#[command(about = "Search the Open Movie Database")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,

    /// Console log level (RUST_LOG overrides)
    #[arg(long, value_enum, default_value_t = CliLogLevel::default())]
    log_level: CliLogLevel,

    /// Directory for the per-run debug log
    #[arg(long, default_value = "logs")]
    logs_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_tracing_level(), Some(&cli.logs_dir))?;

    let result = commands::handle_command(cli.command).await;
    if let Err(e) = &result {
        if let Some(failure) = e.downcast_ref::<ReelScoutError>() {
            error!(user_error = failure.is_user_error(), "{}", failure.user_message());
        }
    }
    result
}
