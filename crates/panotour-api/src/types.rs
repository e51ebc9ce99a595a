//! Response DTOs for the auth service.

use serde::Serialize;

use panotour_models::UserId;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
}

/// Successful auth-check response.
#[derive(Debug, Clone, Serialize)]
pub struct AuthCheckResponse {
    /// The user the verified token identifies.
    pub user_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_check_serialization() {
        let resp = AuthCheckResponse {
            user_id: UserId::from("user-9"),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"user_id":"user-9"}"#);
    }
}
