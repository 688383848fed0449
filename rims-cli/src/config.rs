//! Configuration module
//!
//! Handles CLI configuration including the backend URL, development bypass
//! and session file location.

use std::path::PathBuf;

use rims_client::PortalClient;
use rims_session::{SessionStore, TOKEN_KEY};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the portal backend
    pub api_url: String,
    /// Development bypass flag
    pub dev_bypass: bool,
    /// Session file override
    pub session_file: Option<PathBuf>,
}

impl Config {
    /// Open the session store at the configured (or default) location.
    pub fn session_store(&self) -> SessionStore {
        match &self.session_file {
            Some(path) => SessionStore::open(path),
            None => SessionStore::at_default_path(),
        }
    }

    /// Build a portal client, attaching the stored bearer token when present.
    pub fn portal_client(&self, store: &SessionStore) -> PortalClient {
        PortalClient::new(&self.api_url).with_token(store.get(TOKEN_KEY))
    }
}
