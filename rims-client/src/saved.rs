//! Saved-jobs endpoints

use crate::PortalClient;
use crate::error::Result;
use rims_core::domain::{CandidateId, JobId, JobPost};
use rims_core::dto::saved::{SavedJobKey, ToggleOutcome};

impl PortalClient {
    // =============================================================================
    // Saved-Jobs Membership
    // =============================================================================

    /// List the ids of jobs the candidate has saved
    pub async fn saved_job_ids(&self, candidate_id: &CandidateId) -> Result<Vec<JobId>> {
        let url = format!("{}/api/saved-jobs/{}/ids", self.base_url, candidate_id);
        let response = self.authorize(self.client.get(&url)).send().await?;

        self.handle_response(response).await
    }

    /// List the full job records the candidate has saved
    pub async fn saved_jobs(&self, candidate_id: &CandidateId) -> Result<Vec<JobPost>> {
        let url = format!("{}/api/saved-jobs/{}", self.base_url, candidate_id);
        let response = self.authorize(self.client.get(&url)).send().await?;

        self.handle_response(response).await
    }

    /// Toggle saved membership for one (candidate, job) pair
    ///
    /// A single idempotent round trip; the server is authoritative for the
    /// resulting state.
    ///
    /// # Example
    /// ```no_run
    /// # use rims_client::PortalClient;
    /// # use rims_core::domain::{CandidateId, JobId};
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = PortalClient::new("https://localhost:7272");
    /// let outcome = client
    ///     .toggle_saved(&CandidateId::new("c-1"), &JobId::new("5"))
    ///     .await?;
    /// println!("saved = {}", outcome.saved);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn toggle_saved(
        &self,
        candidate_id: &CandidateId,
        job_id: &JobId,
    ) -> Result<ToggleOutcome> {
        let url = format!("{}/api/saved-jobs/toggle", self.base_url);
        let response = self
            .authorize(self.client.post(&url).json(&SavedJobKey {
                candidate_id: candidate_id.clone(),
                job_id: job_id.clone(),
            }))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Remove one job from the candidate's saved set
    pub async fn unsave(&self, candidate_id: &CandidateId, job_id: &JobId) -> Result<()> {
        let url = format!("{}/api/saved-jobs", self.base_url);
        let response = self
            .authorize(self.client.delete(&url).json(&SavedJobKey {
                candidate_id: candidate_id.clone(),
                job_id: job_id.clone(),
            }))
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
