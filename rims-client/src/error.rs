//! Error types for the RIMS portal client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the portal backend
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Backend returned a non-success status.
    ///
    /// The message is what gets shown to the user, never the raw status code,
    /// so it displays without any status prefix.
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message extracted from the response body
        message: String,
    },

    /// Failed to parse a response body
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create an API error from a status code and response body.
    ///
    /// The user-facing message is extracted best-effort from the body: a JSON
    /// `message`, `error` or `title` field wins, then the raw text, then a
    /// generic fallback naming the status.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Api {
            status,
            message: extract_message(status, body),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 500)
    }
}

fn extract_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["message", "error", "title"] {
            if let Some(text) = parsed.get(field).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        trimmed.to_string()
    } else {
        format!("Request failed with status {status}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_field_wins() {
        let err = ClientError::from_response(500, "{\"message\":\"db down\"}");
        assert_eq!(err.to_string(), "db down");
        assert!(err.is_server_error());
    }

    #[test]
    fn test_error_and_title_fields() {
        let err = ClientError::from_response(400, "{\"error\":\"bad id\"}");
        assert_eq!(err.to_string(), "bad id");

        let err = ClientError::from_response(400, "{\"title\":\"One or more errors occurred\"}");
        assert_eq!(err.to_string(), "One or more errors occurred");
    }

    #[test]
    fn test_plain_text_body_used_verbatim() {
        let err = ClientError::from_response(502, "upstream unavailable");
        assert_eq!(err.to_string(), "upstream unavailable");
    }

    #[test]
    fn test_empty_body_falls_back_to_status() {
        let err = ClientError::from_response(503, "  ");
        assert_eq!(err.to_string(), "Request failed with status 503");
    }

    #[test]
    fn test_not_found_helper() {
        let err = ClientError::from_response(404, "{\"message\":\"no such job\"}");
        assert!(err.is_not_found());
        assert!(err.is_client_error());
    }
}
