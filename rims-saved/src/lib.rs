//! RIMS Saved Jobs
//!
//! The saved-jobs synchronization service: one store interface with a
//! remote-backed and a local (development) implementation, plus the
//! reconciliation manager that keeps the in-memory saved set consistent with
//! whichever store is active.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use rims_client::PortalClient;
//! use rims_core::domain::{CandidateId, JobId};
//! use rims_saved::{RemoteStore, SavedJobsManager};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PortalClient::new("https://localhost:7272");
//!     let store = Arc::new(RemoteStore::new(client));
//!     let manager = SavedJobsManager::new(store, CandidateId::new("c-1"));
//!
//!     manager.refresh().await?;
//!     let status = manager.toggle(&JobId::new("5")).await?;
//!     println!("{status:?}");
//!     Ok(())
//! }
//! ```

mod error;
mod local;
mod manager;
mod remote;
mod store;

pub use error::{Result, SavedJobsError};
pub use local::LocalStore;
pub use manager::{SavedJobsManager, ToggleStatus};
pub use remote::RemoteStore;
pub use store::SavedJobStore;
