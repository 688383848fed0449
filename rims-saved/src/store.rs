//! The saved-jobs store seam
//!
//! One capability set, two implementations selected at construction time:
//! [`crate::RemoteStore`] against the backend and [`crate::LocalStore`] for
//! the development bypass. Business logic never branches on a mode flag.

use async_trait::async_trait;

use rims_core::domain::{CandidateId, JobId, JobPost};
use rims_core::dto::saved::ToggleOutcome;

use crate::error::Result;

/// Source of truth for a candidate's saved-jobs membership.
#[async_trait]
pub trait SavedJobStore: Send + Sync {
    /// List the saved job ids for a candidate.
    async fn list_ids(&self, candidate: &CandidateId) -> Result<Vec<JobId>>;

    /// List the saved jobs as full records.
    async fn list_jobs(&self, candidate: &CandidateId) -> Result<Vec<JobPost>>;

    /// Flip saved/unsaved for one (candidate, job) pair and report the
    /// resulting state.
    async fn toggle(&self, candidate: &CandidateId, job: &JobId) -> Result<ToggleOutcome>;

    /// Remove one job from the saved set. Removing an absent id succeeds.
    async fn remove(&self, candidate: &CandidateId, job: &JobId) -> Result<()>;
}
