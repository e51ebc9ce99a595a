//! Error types for tour store operations.

use panotour_client::ClientError;
use panotour_models::TourStatus;
use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during tour store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Operation requires an authenticated user.
    #[error("user not authenticated")]
    Unauthenticated,

    /// The caller's cancellation token fired before completion.
    #[error("operation cancelled")]
    Cancelled,

    /// A status update would move backwards.
    #[error("status cannot regress from {from} to {to}")]
    StatusRegression { from: TourStatus, to: TourStatus },

    /// Publish requires a tour in `processing` status.
    #[error("cannot publish a {status} tour")]
    PublishPrecondition { status: TourStatus },

    /// The tour is not in the local mirror.
    #[error("tour not found: {0}")]
    NotFound(String),

    /// The persistence service rejected or failed the call.
    #[error("backend error: {0}")]
    Backend(#[from] ClientError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regression_display() {
        let err = StoreError::StatusRegression {
            from: TourStatus::Published,
            to: TourStatus::Draft,
        };
        assert_eq!(err.to_string(), "status cannot regress from published to draft");
    }

    #[test]
    fn test_client_error_converts() {
        let err: StoreError = ClientError::Unauthenticated.into();
        assert!(matches!(err, StoreError::Backend(_)));
    }
}
