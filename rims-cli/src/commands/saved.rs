//! Saved-jobs command handlers
//!
//! Wires the session store, portal client and store implementation together
//! and drives the saved-jobs manager the way the portal screens do.

use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use rims_core::domain::JobId;
use rims_saved::{LocalStore, RemoteStore, SavedJobStore, SavedJobsManager, ToggleStatus};
use rims_session::{LocalSavedCache, resolve_candidate_id};

use crate::config::Config;

/// Saved-jobs subcommands
#[derive(Subcommand)]
pub enum SavedCommands {
    /// List saved jobs as full records
    List,
    /// List saved job ids only
    Ids,
    /// Toggle saved/unsaved for one job
    Toggle {
        /// Job id
        id: String,
    },
    /// Remove one job from the saved set
    Remove {
        /// Job id
        id: String,
    },
}

/// Handle saved-jobs commands
pub async fn handle_saved_command(command: SavedCommands, config: &Config) -> Result<()> {
    let manager = build_manager(config);

    match command {
        SavedCommands::List => {
            let jobs = manager.saved_jobs().await?;
            if jobs.is_empty() {
                println!("{}", "No saved jobs yet.".yellow());
            } else {
                println!("{}", format!("{} saved job(s):", jobs.len()).bold());
                println!();
                for job in jobs {
                    println!(
                        "  {} {} {}",
                        "♥".red(),
                        job.title.bold(),
                        format!("[{}]", job.id).dimmed()
                    );
                    if let Some(location) = &job.location {
                        println!("    {}", location.dimmed());
                    }
                }
            }
        }
        SavedCommands::Ids => {
            manager.refresh().await?;
            let ids = manager.saved_ids();
            if ids.is_empty() {
                println!("{}", "No saved jobs yet.".yellow());
            } else {
                for id in ids {
                    println!("{id}");
                }
            }
        }
        SavedCommands::Toggle { id } => {
            manager.refresh().await?;
            match manager.toggle(&JobId::new(id.clone())).await? {
                ToggleStatus::Saved => println!("{} job {}", "Saved".green().bold(), id),
                ToggleStatus::Unsaved => println!("{} job {}", "Unsaved".yellow().bold(), id),
                ToggleStatus::SkippedInFlight => {
                    println!("{}", "A request for this job is already in flight.".dimmed())
                }
            }
        }
        SavedCommands::Remove { id } => {
            manager.refresh().await?;
            if manager.remove(&JobId::new(id.clone())).await? {
                println!("{} job {}", "Removed".yellow().bold(), id);
            } else {
                println!("{}", "A request for this job is already in flight.".dimmed());
            }
        }
    }

    Ok(())
}

/// Construct the manager with the store for the active mode.
///
/// The choice between local and remote happens once, here; nothing past this
/// point branches on the bypass flag.
fn build_manager(config: &Config) -> SavedJobsManager {
    let session = config.session_store();
    let client = config.portal_client(&session);
    let candidate = resolve_candidate_id(&session, config.dev_bypass);

    let store: Arc<dyn SavedJobStore> = if config.dev_bypass {
        Arc::new(LocalStore::new(LocalSavedCache::new(session), client))
    } else {
        Arc::new(RemoteStore::new(client))
    };

    SavedJobsManager::new(store, candidate)
}
