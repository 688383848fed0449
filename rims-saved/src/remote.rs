//! Backend-authoritative saved-jobs store

use async_trait::async_trait;

use rims_client::PortalClient;
use rims_core::domain::{CandidateId, JobId, JobPost};
use rims_core::dto::saved::ToggleOutcome;

use crate::error::Result;
use crate::store::SavedJobStore;

/// Saved-jobs store backed by the portal backend.
///
/// The server is authoritative: toggle reports the state it decided on, and
/// the caller applies that outcome to its in-memory set.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: PortalClient,
}

impl RemoteStore {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SavedJobStore for RemoteStore {
    async fn list_ids(&self, candidate: &CandidateId) -> Result<Vec<JobId>> {
        Ok(self.client.saved_job_ids(candidate).await?)
    }

    async fn list_jobs(&self, candidate: &CandidateId) -> Result<Vec<JobPost>> {
        Ok(self.client.saved_jobs(candidate).await?)
    }

    async fn toggle(&self, candidate: &CandidateId, job: &JobId) -> Result<ToggleOutcome> {
        let outcome = self.client.toggle_saved(candidate, job).await?;
        tracing::debug!("toggle {} for {} -> saved={}", job, candidate, outcome.saved);
        Ok(outcome)
    }

    async fn remove(&self, candidate: &CandidateId, job: &JobId) -> Result<()> {
        Ok(self.client.unsave(candidate, job).await?)
    }
}
