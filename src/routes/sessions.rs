//! Balance session endpoints.

use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::BalanceSession;
use crate::error::ApiError;
use crate::services::session_service;
use crate::state::AppState;

/// Handler for GET /api/balance-sessions
///
/// All sessions, newest close first.
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<BalanceSession>>, ApiError> {
    Ok(Json(state.sessions.list().await))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseSessionRequest {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub closed_by: String,
    pub notes: Option<String>,
}

/// Handler for POST /api/balance-sessions/close
///
/// Closes the books for a period. A second close for the same period
/// returns 409; the winner's stored figures stand.
pub async fn close_session_handler(
    State(state): State<AppState>,
    Json(request): Json<CloseSessionRequest>,
) -> Result<(StatusCode, Json<BalanceSession>), ApiError> {
    let session = session_service::close_session(
        &state,
        request.period_start,
        request.period_end,
        &request.closed_by,
        request.notes,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(session)))
}
