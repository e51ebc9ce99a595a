//! Error types for persistence-API access.

use panotour_models::HotspotError;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the persistence service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Required configuration is missing or invalid.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The HTTP request could not be sent or completed.
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("api error {status}: {message}")]
    Api { status: u16, message: String },

    /// A response body could not be parsed.
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// A stored record failed validation at the boundary.
    #[error("invalid record: {0}")]
    InvalidRecord(#[from] HotspotError),

    /// The requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// No authenticated session for an operation that needs one.
    #[error("not authenticated")]
    Unauthenticated,
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Parse(err.to_string())
    }
}
