//! RIMS HTTP Client
//!
//! A type-safe HTTP client for the RIMS recruitment-portal backend.
//!
//! This crate wraps the job catalog, job search and saved-jobs endpoints so
//! that CLI and library consumers share one request/error path instead of
//! hand-rolling fetches per screen.
//!
//! # Example
//!
//! ```no_run
//! use rims_client::PortalClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PortalClient::new("https://localhost:7272");
//!
//!     let jobs = client.list_jobs().await?;
//!     println!("{} jobs in the catalog", jobs.len());
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;
mod saved;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// HTTP client for the RIMS portal API
///
/// Provides methods for the endpoints the portal screens consume:
/// - Job catalog, filtered search, and job detail
/// - Saved-jobs membership (list, toggle, remove)
#[derive(Debug, Clone)]
pub struct PortalClient {
    /// Base URL of the backend (e.g., "https://localhost:7272")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Bearer token attached to every request when present
    token: Option<String>,
}

impl PortalClient {
    /// Create a new portal client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend API (e.g., "https://localhost:7272")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            token: None,
        }
    }

    /// Create a new portal client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            token: None,
        }
    }

    /// Attach a bearer token to all subsequent requests.
    ///
    /// The portal tolerates anonymous requests for public endpoints, so a
    /// client without a token is still usable for the job catalog.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a bearer token is attached
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and converts failures into a `ClientError::Api`
    /// carrying the message extracted from the body, or deserializes the body
    /// on success.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("request failed with status {}: {}", status, body);
            return Err(ClientError::from_response(status.as_u16(), &body));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body the caller does not need
    /// (e.g., DELETE operations returning a success payload).
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::from_response(status.as_u16(), &body));
        }

        Ok(())
    }
}
