//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod jobs;
mod saved;
mod session;

pub use jobs::JobCommands;
pub use saved::SavedCommands;
pub use session::SessionCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Browse and search the job catalog
    Jobs {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// Manage the candidate's saved jobs
    Saved {
        #[command(subcommand)]
        command: SavedCommands,
    },
    /// Inspect the local session
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Jobs { command } => jobs::handle_job_command(command, config).await,
        Commands::Saved { command } => saved::handle_saved_command(command, config).await,
        Commands::Session { command } => session::handle_session_command(command, config).await,
    }
}
