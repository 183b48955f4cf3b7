//! Report endpoints.
//!
//! Thin handlers: parse query parameters, delegate to the report
//! service, serialize the fixed-shape result.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::ApiError;
use crate::reports::assets_liabilities::AssetsLiabilitiesReport;
use crate::reports::bank::BankTransactionsReport;
use crate::reports::commissions::CommissionReport;
use crate::reports::daily::DailyIncomeLossReport;
use crate::reports::liquid_cash::LiquidCashReport;
use crate::reports::outstanding::OutstandingFeesReport;
use crate::reports::parties::{CustomerReport, SupplierReport};
use crate::services::report_service::{self, RangeParams};
use crate::state::AppState;

/// Handler for GET /api/reports/customer
pub async fn get_customer_report(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Result<Json<CustomerReport>, ApiError> {
    let report = report_service::customers(&state, &params).await?;
    Ok(Json(report))
}

/// Handler for GET /api/reports/supplier
pub async fn get_supplier_report(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Result<Json<SupplierReport>, ApiError> {
    let report = report_service::suppliers(&state, &params).await?;
    Ok(Json(report))
}

/// Handler for GET /api/reports/outstanding-fees
pub async fn get_outstanding_fees(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Result<Json<OutstandingFeesReport>, ApiError> {
    let report = report_service::outstanding(&state, &params).await?;
    Ok(Json(report))
}

/// Handler for GET /api/reports/liquid-cash
///
/// Point-in-time position; takes no date parameters.
pub async fn get_liquid_cash(
    State(state): State<AppState>,
) -> Result<Json<LiquidCashReport>, ApiError> {
    let report = report_service::liquid(&state).await?;
    Ok(Json(report))
}

/// Query parameters for the income/loss endpoint: a date window plus
/// the bucket granularity.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub period: Option<String>,
    pub date: Option<NaiveDate>,
    /// daily (default), weekly, or monthly.
    pub granularity: Option<String>,
}

/// Handler for GET /api/reports/daily-income-loss?date=YYYY-MM-DD&granularity=daily
pub async fn get_daily_income_loss(
    State(state): State<AppState>,
    Query(params): Query<DailyParams>,
) -> Result<Json<DailyIncomeLossReport>, ApiError> {
    let range_params = RangeParams {
        start_date: params.start_date,
        end_date: params.end_date,
        period: params.period.clone(),
        date: params.date,
    };
    let report =
        report_service::daily(&state, &range_params, params.granularity.as_deref()).await?;
    Ok(Json(report))
}

/// Handler for GET /api/reports/assets-liabilities
pub async fn get_assets_liabilities(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Result<Json<AssetsLiabilitiesReport>, ApiError> {
    let report = report_service::assets(&state, &params).await?;
    Ok(Json(report))
}

/// Query parameters for the bank transactions endpoint: a date window
/// plus pagination over the raw movement list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub period: Option<String>,
    pub date: Option<NaiveDate>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// Handler for GET /api/reports/bank-transactions
///
/// The summary always covers the whole window; limit/offset page the
/// transaction list only.
pub async fn get_bank_transactions(
    State(state): State<AppState>,
    Query(params): Query<BankParams>,
) -> Result<Json<BankTransactionsReport>, ApiError> {
    let range_params = RangeParams {
        start_date: params.start_date,
        end_date: params.end_date,
        period: params.period.clone(),
        date: params.date,
    };
    let mut report = report_service::bank(&state, &range_params).await?;

    let offset = params.offset.unwrap_or(0);
    let page: Vec<_> = report
        .transactions
        .into_iter()
        .skip(offset)
        .take(params.limit.unwrap_or(usize::MAX))
        .collect();
    report.transactions = page;

    Ok(Json(report))
}

/// Handler for GET /api/reports/commissions
pub async fn get_commissions(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Result<Json<CommissionReport>, ApiError> {
    let report = report_service::commissions(&state, &params).await?;
    Ok(Json(report))
}
