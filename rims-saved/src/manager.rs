//! Saved-set reconciliation
//!
//! Keeps the in-memory saved set consistent with the active store. Per job
//! id, at most one toggle/remove round trip is outstanding at a time: a call
//! for an id that is already in flight is skipped, not queued. Calls for
//! different ids proceed independently. No optimistic updates are applied, so
//! a failed request leaves the set exactly as it was.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use rims_core::domain::{CandidateId, JobId, JobPost};

use crate::error::{Result, SavedJobsError};
use crate::store::SavedJobStore;

/// Outcome of a toggle as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleStatus {
    /// The job is now in the saved set
    Saved,
    /// The job is no longer in the saved set
    Unsaved,
    /// A round trip for this id was already in flight; nothing was done
    SkippedInFlight,
}

#[derive(Debug, Default)]
struct State {
    saved: HashSet<JobId>,
    in_flight: HashSet<JobId>,
}

/// In-memory saved set plus the per-id in-flight guard.
///
/// Constructed once per session with the resolved candidate identity and the
/// store selected for the active mode; shared by reference between consumers.
pub struct SavedJobsManager {
    store: Arc<dyn SavedJobStore>,
    candidate: CandidateId,
    state: Mutex<State>,
}

impl SavedJobsManager {
    pub fn new(store: Arc<dyn SavedJobStore>, candidate: CandidateId) -> Self {
        Self {
            store,
            candidate,
            state: Mutex::new(State::default()),
        }
    }

    pub fn candidate(&self) -> &CandidateId {
        &self.candidate
    }

    /// Whether a job is currently in the saved set.
    pub fn is_saved(&self, job: &JobId) -> bool {
        self.state.lock().unwrap().saved.contains(job)
    }

    /// Snapshot of the saved set, sorted for stable display.
    pub fn saved_ids(&self) -> Vec<JobId> {
        let state = self.state.lock().unwrap();
        let mut ids: Vec<JobId> = state.saved.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Replace the in-memory set with the store's current membership.
    pub async fn refresh(&self) -> Result<()> {
        self.require_identity()?;
        let ids = self.store.list_ids(&self.candidate).await?;
        let mut state = self.state.lock().unwrap();
        state.saved = ids.into_iter().collect();
        Ok(())
    }

    /// List the saved jobs as full records.
    pub async fn saved_jobs(&self) -> Result<Vec<JobPost>> {
        self.require_identity()?;
        self.store.list_jobs(&self.candidate).await
    }

    /// Toggle saved membership for one job.
    ///
    /// The set is only mutated after the store reports the resulting state;
    /// on failure it is left unchanged and the error is surfaced for user
    /// notification.
    pub async fn toggle(&self, job: &JobId) -> Result<ToggleStatus> {
        self.require_identity()?;
        if !self.begin(job) {
            tracing::debug!("toggle for {} already in flight, skipping", job);
            return Ok(ToggleStatus::SkippedInFlight);
        }

        let outcome = self.store.toggle(&self.candidate, job).await;

        let mut state = self.state.lock().unwrap();
        state.in_flight.remove(job);
        match outcome {
            Ok(outcome) if outcome.saved => {
                state.saved.insert(job.clone());
                Ok(ToggleStatus::Saved)
            }
            Ok(_) => {
                state.saved.remove(job);
                Ok(ToggleStatus::Unsaved)
            }
            Err(err) => Err(err),
        }
    }

    /// Remove one job from the saved set.
    ///
    /// Shares the in-flight guard with [`Self::toggle`] so a remove cannot
    /// race a toggle for the same id; a guarded call is skipped the same way.
    pub async fn remove(&self, job: &JobId) -> Result<bool> {
        self.require_identity()?;
        if !self.begin(job) {
            tracing::debug!("remove for {} already in flight, skipping", job);
            return Ok(false);
        }

        let outcome = self.store.remove(&self.candidate, job).await;

        let mut state = self.state.lock().unwrap();
        state.in_flight.remove(job);
        match outcome {
            Ok(()) => {
                state.saved.remove(job);
                Ok(true)
            }
            Err(err) => Err(err),
        }
    }

    fn require_identity(&self) -> Result<()> {
        if self.candidate.is_anonymous() {
            return Err(SavedJobsError::NotAuthenticated);
        }
        Ok(())
    }

    /// Set the in-flight guard for an id; false when one is already set.
    fn begin(&self, job: &JobId) -> bool {
        self.state.lock().unwrap().in_flight.insert(job.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rims_client::ClientError;
    use rims_core::dto::saved::ToggleOutcome;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::{Notify, Semaphore};

    /// Store whose toggle can be held open to observe the in-flight guard.
    #[derive(Default)]
    struct MockStore {
        saved: Mutex<HashSet<JobId>>,
        toggle_calls: AtomicUsize,
        fail_with: Mutex<Option<(u16, String)>>,
        entered: Notify,
        gate: Mutex<Option<Arc<Semaphore>>>,
    }

    impl MockStore {
        fn failing(status: u16, body: &str) -> Self {
            let store = Self::default();
            *store.fail_with.lock().unwrap() = Some((status, body.to_string()));
            store
        }

        fn gated(gate: Arc<Semaphore>) -> Self {
            let store = Self::default();
            *store.gate.lock().unwrap() = Some(gate);
            store
        }
    }

    #[async_trait]
    impl SavedJobStore for MockStore {
        async fn list_ids(&self, _candidate: &CandidateId) -> Result<Vec<JobId>> {
            Ok(self.saved.lock().unwrap().iter().cloned().collect())
        }

        async fn list_jobs(&self, _candidate: &CandidateId) -> Result<Vec<JobPost>> {
            Ok(Vec::new())
        }

        async fn toggle(&self, _candidate: &CandidateId, job: &JobId) -> Result<ToggleOutcome> {
            self.toggle_calls.fetch_add(1, Ordering::SeqCst);
            self.entered.notify_one();

            let gate = self.gate.lock().unwrap().clone();
            if let Some(gate) = gate {
                gate.acquire().await.unwrap().forget();
            }

            if let Some((status, body)) = self.fail_with.lock().unwrap().clone() {
                return Err(ClientError::from_response(status, &body).into());
            }

            let mut saved = self.saved.lock().unwrap();
            let now_saved = if saved.contains(job) {
                saved.remove(job);
                false
            } else {
                saved.insert(job.clone());
                true
            };
            Ok(ToggleOutcome { saved: now_saved })
        }

        async fn remove(&self, _candidate: &CandidateId, job: &JobId) -> Result<()> {
            self.saved.lock().unwrap().remove(job);
            Ok(())
        }
    }

    fn manager(store: Arc<MockStore>) -> SavedJobsManager {
        SavedJobsManager::new(store, CandidateId::new("c-1"))
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_original_membership() {
        let store = Arc::new(MockStore::default());
        let manager = manager(store);
        let job = JobId::new("5");

        assert_eq!(manager.toggle(&job).await.unwrap(), ToggleStatus::Saved);
        assert!(manager.is_saved(&job));

        assert_eq!(manager.toggle(&job).await.unwrap(), ToggleStatus::Unsaved);
        assert!(!manager.is_saved(&job));
        assert!(manager.saved_ids().is_empty());
    }

    #[tokio::test]
    async fn test_in_flight_guard_skips_second_toggle() {
        let gate = Arc::new(Semaphore::new(0));
        let store = Arc::new(MockStore::gated(gate.clone()));
        let manager = Arc::new(manager(store.clone()));
        let job = JobId::new("5");

        let first = {
            let manager = manager.clone();
            let job = job.clone();
            tokio::spawn(async move { manager.toggle(&job).await })
        };

        // Wait until the first toggle is inside the store call.
        store.entered.notified().await;

        assert_eq!(
            manager.toggle(&job).await.unwrap(),
            ToggleStatus::SkippedInFlight
        );

        gate.add_permits(1);
        assert_eq!(first.await.unwrap().unwrap(), ToggleStatus::Saved);
        assert_eq!(store.toggle_calls.load(Ordering::SeqCst), 1);
        assert!(manager.is_saved(&job));
    }

    #[tokio::test]
    async fn test_toggles_on_different_ids_proceed_independently() {
        let gate = Arc::new(Semaphore::new(0));
        let store = Arc::new(MockStore::gated(gate.clone()));
        let manager = Arc::new(manager(store.clone()));

        let first = {
            let manager = manager.clone();
            tokio::spawn(async move { manager.toggle(&JobId::new("1")).await })
        };
        store.entered.notified().await;

        let second = {
            let manager = manager.clone();
            tokio::spawn(async move { manager.toggle(&JobId::new("2")).await })
        };
        store.entered.notified().await;

        gate.add_permits(2);
        assert_eq!(first.await.unwrap().unwrap(), ToggleStatus::Saved);
        assert_eq!(second.await.unwrap().unwrap(), ToggleStatus::Saved);
        assert_eq!(store.toggle_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_toggle_leaves_set_unchanged_and_clears_guard() {
        let store = Arc::new(MockStore::failing(500, "{\"message\":\"db down\"}"));
        let manager = manager(store);
        let job = JobId::new("5");

        let err = manager.toggle(&job).await.unwrap_err();
        assert_eq!(err.to_string(), "db down");
        assert!(!manager.is_saved(&job));

        // The guard is released on failure, so a retry is not skipped.
        let err = manager.toggle(&job).await.unwrap_err();
        assert_eq!(err.to_string(), "db down");
    }

    #[tokio::test]
    async fn test_anonymous_candidate_refuses_without_store_call() {
        let store = Arc::new(MockStore::default());
        let manager = SavedJobsManager::new(store.clone(), CandidateId::anonymous());

        let err = manager.toggle(&JobId::new("5")).await.unwrap_err();
        assert!(matches!(err, SavedJobsError::NotAuthenticated));
        assert_eq!(store.toggle_calls.load(Ordering::SeqCst), 0);

        assert!(matches!(
            manager.refresh().await.unwrap_err(),
            SavedJobsError::NotAuthenticated
        ));
    }

    #[tokio::test]
    async fn test_remove_drops_id_from_set() {
        let store = Arc::new(MockStore::default());
        let manager = manager(store);
        let job = JobId::new("5");

        manager.toggle(&job).await.unwrap();
        assert!(manager.is_saved(&job));

        assert!(manager.remove(&job).await.unwrap());
        assert!(!manager.is_saved(&job));
    }

    #[tokio::test]
    async fn test_refresh_replaces_membership() {
        let store = Arc::new(MockStore::default());
        store.saved.lock().unwrap().insert(JobId::new("7"));
        let manager = manager(store);

        manager.refresh().await.unwrap();
        assert!(manager.is_saved(&JobId::new("7")));
        assert_eq!(manager.saved_ids(), vec![JobId::new("7")]);
    }
}
