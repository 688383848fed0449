//! RIMS CLI
//!
//! Command-line interface for the RIMS recruitment portal: browse and search
//! the job catalog, and manage the candidate's saved jobs.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rims")]
#[command(about = "RIMS recruitment portal CLI", long_about = None)]
struct Cli {
    /// Portal backend URL
    #[arg(long, env = "RIMS_API_URL", default_value = "https://localhost:7272")]
    api_url: String,

    /// Development bypass: fixed candidate identity and local-only saved set
    #[arg(long, env = "RIMS_DEV_BYPASS")]
    dev: bool,

    /// Session file path (defaults to the per-user data directory)
    #[arg(long, env = "RIMS_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rims_cli=info,rims_saved=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        dev_bypass: cli.dev,
        session_file: cli.session_file,
    };

    handle_command(cli.command, &config).await
}
