//! Optional bearer-token authentication.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Reject requests that do not carry the configured bearer token.
///
/// A service started without `API_TOKEN` accepts everything; token
/// issuance and storage live outside this service.
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(expected) = state.config.api_token.as_deref() {
        let provided = request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match provided {
            Some(token) if token == expected => {}
            _ => {
                return Err(ApiError::Unauthorized(
                    "missing or invalid bearer token".to_string(),
                ))
            }
        }
    }

    Ok(next.run(request).await)
}
