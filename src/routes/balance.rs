//! Balance summary endpoint.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::ApiError;
use crate::reports::balance::BalanceSummary;
use crate::services::report_service::{self, RangeParams};
use crate::state::AppState;

/// Handler for GET /api/balance/summary
///
/// Accepts either an explicit startDate/endDate pair or a named
/// period (today, week, month, year); defaults to the current month.
pub async fn get_balance_summary(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Result<Json<BalanceSummary>, ApiError> {
    let summary = report_service::balance(&state, &params).await?;
    Ok(Json(summary))
}
