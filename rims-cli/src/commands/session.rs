//! Session inspection command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use rims_session::{IdentitySource, resolve_identity};

use crate::config::Config;

/// Session subcommands
#[derive(Subcommand)]
pub enum SessionCommands {
    /// Show the resolved candidate identity and where it came from
    Whoami,
}

/// Handle session commands
pub async fn handle_session_command(command: SessionCommands, config: &Config) -> Result<()> {
    match command {
        SessionCommands::Whoami => {
            let store = config.session_store();
            let (candidate, source) = resolve_identity(&store, config.dev_bypass);

            if candidate.is_anonymous() {
                println!("{}", "Not signed in.".yellow());
            } else {
                println!("Candidate: {}", candidate.to_string().cyan());
            }
            println!("Source:    {}", describe_source(&source).dimmed());
            println!("Session:   {}", store.path().display().to_string().dimmed());
        }
    }

    Ok(())
}

fn describe_source(source: &IdentitySource) -> String {
    match source {
        IdentitySource::DevBypass => "development bypass".to_string(),
        IdentitySource::DirectKey(key) => format!("session key '{key}'"),
        IdentitySource::SessionObject(key) => format!("session object '{key}'"),
        IdentitySource::TokenPayload => "bearer token payload".to_string(),
        IdentitySource::None => "none".to_string(),
    }
}
