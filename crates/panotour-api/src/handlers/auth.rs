//! Auth-check handler.

use axum::{extract::State, http::header::AUTHORIZATION, http::HeaderMap, Json};
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::token::verify_token;
use crate::types::AuthCheckResponse;

/// Extracts the bearer token from the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
}

/// POST /api/auth/check - Verify a bearer token.
///
/// 401 with an error body on a missing or invalid token; otherwise the
/// decoded user identifier is returned to the caller.
pub async fn check(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AuthCheckResponse>> {
    let token = bearer_token(&headers).ok_or(ApiError::NoToken)?;
    let user_id = verify_token(token, &state.config.auth_secret).map_err(|err| {
        debug!("token verification failed: {}", err);
        ApiError::InvalidToken
    })?;

    Ok(Json(AuthCheckResponse { user_id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::token::issue_token;
    use panotour_models::UserId;

    fn make_state() -> AppState {
        AppState::new(ApiConfig::new("127.0.0.1", 3000, "shared-secret"))
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[tokio::test]
    async fn test_missing_header() {
        let result = check(State(make_state()), HeaderMap::new()).await;
        assert!(matches!(result, Err(ApiError::NoToken)));
    }

    #[tokio::test]
    async fn test_non_bearer_header() {
        let result = check(State(make_state()), headers_with("Basic abc")).await;
        assert!(matches!(result, Err(ApiError::NoToken)));
    }

    #[tokio::test]
    async fn test_invalid_token() {
        let result = check(State(make_state()), headers_with("Bearer garbage")).await;
        assert!(matches!(result, Err(ApiError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_valid_token() {
        let user = UserId::from("user-7");
        let token = issue_token(&user, "shared-secret");

        let response = check(
            State(make_state()),
            headers_with(&format!("Bearer {}", token)),
        )
        .await
        .unwrap();

        assert_eq!(response.user_id, user);
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret() {
        let token = issue_token(&UserId::from("user-7"), "other-secret");
        let result = check(
            State(make_state()),
            headers_with(&format!("Bearer {}", token)),
        )
        .await;
        assert!(matches!(result, Err(ApiError::InvalidToken)));
    }
}
