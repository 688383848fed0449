//! Job catalog and search endpoints

use crate::PortalClient;
use crate::error::Result;
use rims_core::domain::{JobId, JobPost};
use rims_core::dto::job::JobFilter;

impl PortalClient {
    // =============================================================================
    // Job Catalog
    // =============================================================================

    /// Fetch the full job catalog
    ///
    /// Used for listing-page filter population and for synthesizing the
    /// saved-jobs page in development mode.
    pub async fn list_jobs(&self) -> Result<Vec<JobPost>> {
        let url = format!("{}/api/jobs", self.base_url);
        let response = self.authorize(self.client.get(&url)).send().await?;

        self.handle_response(response).await
    }

    /// Search jobs with pagination and filters
    ///
    /// # Arguments
    /// * `filter` - Search text, location, experience, job type and paging
    ///
    /// # Example
    /// ```no_run
    /// # use rims_client::PortalClient;
    /// # use rims_core::dto::job::JobFilter;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = PortalClient::new("https://localhost:7272");
    /// let jobs = client.filter_jobs(&JobFilter {
    ///     search: Some("rust".to_string()),
    ///     ..Default::default()
    /// }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn filter_jobs(&self, filter: &JobFilter) -> Result<Vec<JobPost>> {
        let url = format!("{}/api/jobs/filter", self.base_url);
        let response = self
            .authorize(self.client.get(&url).query(filter))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a single job posting by id
    pub async fn get_job(&self, job_id: &JobId) -> Result<JobPost> {
        let url = format!("{}/api/jobs/{}", self.base_url, job_id);
        let response = self.authorize(self.client.get(&url)).send().await?;

        self.handle_response(response).await
    }
}
