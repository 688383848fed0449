//! Development-mode saved-jobs cache
//!
//! Persists the saved-id set under one session key when the development
//! bypass is active and no backend session exists. Writes replace the whole
//! array; callers read-modify-write the full set.

use rims_core::domain::JobId;

use crate::error::SessionError;
use crate::store::SessionStore;

/// Storage key holding the development saved-id array.
pub const DEV_SAVED_JOBS_KEY: &str = "dev_saved_job_ids";

/// Local saved-set cache backed by the session store.
#[derive(Debug, Clone)]
pub struct LocalSavedCache {
    store: SessionStore,
}

impl LocalSavedCache {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    /// Read the cached saved ids. Corrupt or missing data reads as empty.
    ///
    /// Duplicates are dropped on read so the result is usable as a set.
    pub fn read(&self) -> Vec<JobId> {
        let raw = match self.store.get(DEV_SAVED_JOBS_KEY) {
            Some(raw) => raw,
            None => return Vec::new(),
        };
        let ids: Vec<JobId> = match serde_json::from_str(&raw) {
            Ok(ids) => ids,
            Err(err) => {
                tracing::warn!("ignoring corrupt saved-jobs cache: {}", err);
                return Vec::new();
            }
        };
        let mut unique = Vec::with_capacity(ids.len());
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        unique
    }

    /// Persist the full saved set, replacing any prior value.
    pub fn write(&self, ids: &[JobId]) -> Result<(), SessionError> {
        let encoded = serde_json::to_string(ids)?;
        self.store.set(DEV_SAVED_JOBS_KEY, &encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_cache() -> (tempfile::TempDir, LocalSavedCache) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("session.json"));
        (dir, LocalSavedCache::new(store))
    }

    #[test]
    fn test_empty_cache_reads_empty() {
        let (_dir, cache) = temp_cache();
        assert!(cache.read().is_empty());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let (_dir, cache) = temp_cache();
        cache.write(&[JobId::new("5"), JobId::new("7")]).unwrap();
        assert_eq!(cache.read(), vec![JobId::new("5"), JobId::new("7")]);
    }

    #[test]
    fn test_write_replaces_prior_value() {
        let (_dir, cache) = temp_cache();
        cache.write(&[JobId::new("5")]).unwrap();
        cache.write(&[]).unwrap();
        assert!(cache.read().is_empty());
    }

    #[test]
    fn test_corrupt_cache_reads_empty() {
        let (dir, cache) = temp_cache();
        let store = SessionStore::open(dir.path().join("session.json"));
        store.set(DEV_SAVED_JOBS_KEY, "oops").unwrap();
        assert!(cache.read().is_empty());
    }

    #[test]
    fn test_numeric_ids_in_cache_are_normalized() {
        let (dir, cache) = temp_cache();
        let store = SessionStore::open(dir.path().join("session.json"));
        store.set(DEV_SAVED_JOBS_KEY, "[5, \"5\", \"7\"]").unwrap();
        assert_eq!(cache.read(), vec![JobId::new("5"), JobId::new("7")]);
    }
}
