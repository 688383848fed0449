//! Development-mode saved-jobs store
//!
//! Used under the development bypass when no backend session exists. The
//! session-file cache is authoritative; it is never reconciled against the
//! backend, so the two sets can diverge if both modes are used for the same
//! candidate across sessions.

use async_trait::async_trait;

use rims_client::PortalClient;
use rims_core::domain::{CandidateId, JobId, JobPost};
use rims_core::dto::saved::ToggleOutcome;
use rims_session::LocalSavedCache;

use crate::error::Result;
use crate::store::SavedJobStore;

/// Saved-jobs store backed by the local session cache.
///
/// Toggle and remove mutate the cache directly; listing full records is
/// synthesized by fetching the job catalog and filtering to cached ids, since
/// no backend saved-jobs endpoint applies in this mode.
#[derive(Debug, Clone)]
pub struct LocalStore {
    cache: LocalSavedCache,
    client: PortalClient,
}

impl LocalStore {
    pub fn new(cache: LocalSavedCache, client: PortalClient) -> Self {
        Self { cache, client }
    }
}

#[async_trait]
impl SavedJobStore for LocalStore {
    async fn list_ids(&self, _candidate: &CandidateId) -> Result<Vec<JobId>> {
        Ok(self.cache.read())
    }

    async fn list_jobs(&self, _candidate: &CandidateId) -> Result<Vec<JobPost>> {
        let ids = self.cache.read();
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let catalog = self.client.list_jobs().await?;
        Ok(catalog
            .into_iter()
            .filter(|job| ids.contains(&job.id))
            .collect())
    }

    async fn toggle(&self, _candidate: &CandidateId, job: &JobId) -> Result<ToggleOutcome> {
        let mut ids = self.cache.read();
        let saved = if let Some(position) = ids.iter().position(|id| id == job) {
            ids.remove(position);
            false
        } else {
            ids.push(job.clone());
            true
        };
        self.cache.write(&ids)?;
        tracing::debug!("local toggle {} -> saved={}", job, saved);
        Ok(ToggleOutcome { saved })
    }

    async fn remove(&self, _candidate: &CandidateId, job: &JobId) -> Result<()> {
        let mut ids = self.cache.read();
        ids.retain(|id| id != job);
        self.cache.write(&ids)?;
        Ok(())
    }
}
