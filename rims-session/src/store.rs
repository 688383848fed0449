//! Persistent string key/value session store
//!
//! One JSON file holding plain string pairs, mirroring the semantics of
//! browser local storage: single writer (one process), last write wins, no
//! cross-process locking.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SessionError;

/// File-backed session store.
///
/// Every read loads the file fresh; every write is a read-modify-write of the
/// whole map. A missing or corrupt file reads as empty rather than failing.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Open a store at an explicit path. The file is created lazily on the
    /// first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the store at the per-user default location.
    pub fn at_default_path() -> Self {
        Self::open(Self::default_path())
    }

    /// Default session file location under the user data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rims")
            .join("session.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a stored value.
    pub fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    /// Store a value, replacing any prior one.
    pub fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut map = self.load();
        map.insert(key.to_string(), value.to_string());
        self.persist(&map)
    }

    /// Remove a key. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut map = self.load();
        if map.remove(key).is_some() {
            self.persist(&map)?;
        }
        Ok(())
    }

    fn load(&self) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return BTreeMap::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(err) => {
                tracing::warn!(
                    "session file {} is not valid JSON, treating as empty: {}",
                    self.path.display(),
                    err
                );
                BTreeMap::new()
            }
        }
    }

    fn persist(&self, map: &BTreeMap<String, String>) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SessionError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        let encoded = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, encoded).map_err(|source| SessionError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("session.json"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let (_dir, store) = temp_store();
        assert_eq!(store.get("token"), None);
    }

    #[test]
    fn test_set_then_get() {
        let (_dir, store) = temp_store();
        store.set("candidateId", "c-42").unwrap();
        assert_eq!(store.get("candidateId"), Some("c-42".to_string()));
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let (_dir, store) = temp_store();
        store.set("token", "old").unwrap();
        store.set("token", "new").unwrap();
        assert_eq!(store.get("token"), Some("new".to_string()));
    }

    #[test]
    fn test_corrupt_file_reads_empty() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.get("token"), None);
    }

    #[test]
    fn test_remove() {
        let (_dir, store) = temp_store();
        store.set("profile", "{}").unwrap();
        store.remove("profile").unwrap();
        assert_eq!(store.get("profile"), None);
    }
}
