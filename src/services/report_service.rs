//! Report orchestration.
//!
//! Every report follows the same shape: take store snapshots at query
//! start, resolve the requested window, run the pure aggregation on a
//! blocking worker under the configured timeout. A timeout surfaces as
//! an error, never as partial data.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::error::ApiError;
use crate::reports::assets_liabilities::{assets_liabilities, AssetsLiabilitiesReport};
use crate::reports::balance::{balance_summary, BalanceSummary};
use crate::reports::bank::{bank_transactions, BankTransactionsReport};
use crate::reports::commissions::{commission_report, CommissionReport};
use crate::reports::daily::{daily_income_loss, DailyIncomeLossReport};
use crate::reports::liquid_cash::{liquid_cash, LiquidCashReport};
use crate::reports::outstanding::{outstanding_fees, OutstandingFeesReport};
use crate::reports::parties::{customer_report, supplier_report, CustomerReport, SupplierReport};
use crate::reports::{DateRange, Granularity, PeriodError};
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Period(#[from] PeriodError),

    #[error("{0}")]
    Validation(String),

    #[error("report computation exceeded {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("report worker failed: {0}")]
    Worker(String),
}

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Period(e) => ApiError::Validation(e.to_string()),
            ReportError::Validation(msg) => ApiError::Validation(msg),
            ReportError::Timeout { timeout_ms } => ApiError::Timeout { timeout_ms },
            ReportError::Worker(detail) => ApiError::Internal(detail),
        }
    }
}

/// Query parameters accepted by ranged report endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub period: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Resolve query parameters into a concrete date range.
///
/// Precedence: an explicit startDate/endDate pair, then a single date,
/// then a named period, then `default_period`.
pub fn resolve_range(params: &RangeParams, default_period: &str) -> Result<DateRange, ReportError> {
    let today = Utc::now().date_naive();
    match (params.start_date, params.end_date) {
        (Some(start), Some(end)) => Ok(DateRange::new(start, end)?),
        (Some(_), None) | (None, Some(_)) => Err(ReportError::Validation(
            "startDate and endDate must be provided together".to_string(),
        )),
        (None, None) => {
            if let Some(date) = params.date {
                return Ok(DateRange::single(date));
            }
            let period = params.period.as_deref().unwrap_or(default_period);
            Ok(DateRange::named(period, today)?)
        }
    }
}

/// Resolve an optional granularity keyword; defaults to daily.
pub fn resolve_granularity(value: Option<&str>) -> Result<Granularity, ReportError> {
    match value.unwrap_or("daily") {
        "daily" => Ok(Granularity::Daily),
        "weekly" => Ok(Granularity::Weekly),
        "monthly" => Ok(Granularity::Monthly),
        other => Err(ReportError::Validation(format!(
            "unknown granularity: {other} (expected daily, weekly, or monthly)"
        ))),
    }
}

/// Run a pure aggregation on the blocking pool, bounded by
/// `timeout_ms`. An elapsed timeout abandons the worker and returns an
/// error; callers never see partial output.
pub async fn run_bounded<T, F>(timeout_ms: u64, compute: F) -> Result<T, ReportError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let bounded = tokio::time::timeout(
        Duration::from_millis(timeout_ms),
        tokio::task::spawn_blocking(compute),
    );
    match bounded.await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(join)) => Err(ReportError::Worker(join.to_string())),
        Err(_) => Err(ReportError::Timeout { timeout_ms }),
    }
}

pub async fn balance(state: &AppState, params: &RangeParams) -> Result<BalanceSummary, ReportError> {
    let range = resolve_range(params, "month")?;
    let invoices = state.registry.invoices().await;
    let transactions = state.ledger.snapshot().await;
    run_bounded(state.config.report_timeout_ms, move || {
        balance_summary(&invoices, &transactions, &range)
    })
    .await
}

pub async fn outstanding(
    state: &AppState,
    params: &RangeParams,
) -> Result<OutstandingFeesReport, ReportError> {
    let range = resolve_range(params, "month")?;
    let invoices = state.registry.invoices().await;
    let orders = state.registry.orders().await;
    run_bounded(state.config.report_timeout_ms, move || {
        outstanding_fees(&invoices, &orders, &range)
    })
    .await
}

pub async fn liquid(state: &AppState) -> Result<LiquidCashReport, ReportError> {
    // Point-in-time position over the whole ledger; no window applies.
    let transactions = state.ledger.snapshot().await;
    run_bounded(state.config.report_timeout_ms, move || {
        liquid_cash(&transactions)
    })
    .await
}

pub async fn daily(
    state: &AppState,
    params: &RangeParams,
    granularity: Option<&str>,
) -> Result<DailyIncomeLossReport, ReportError> {
    let range = resolve_range(params, "today")?;
    let granularity = resolve_granularity(granularity)?;
    let transactions = state.ledger.snapshot().await;
    run_bounded(state.config.report_timeout_ms, move || {
        daily_income_loss(&transactions, &range, granularity)
    })
    .await
}

pub async fn assets(
    state: &AppState,
    params: &RangeParams,
) -> Result<AssetsLiabilitiesReport, ReportError> {
    let range = resolve_range(params, "month")?;
    let invoices = state.registry.invoices().await;
    let orders = state.registry.orders().await;
    let employees = state.registry.employees().await;
    let transactions = state.ledger.snapshot().await;
    run_bounded(state.config.report_timeout_ms, move || {
        assets_liabilities(&invoices, &orders, &employees, &transactions, &range)
    })
    .await
}

pub async fn bank(
    state: &AppState,
    params: &RangeParams,
) -> Result<BankTransactionsReport, ReportError> {
    let range = resolve_range(params, "month")?;
    let transactions = state.ledger.snapshot().await;
    run_bounded(state.config.report_timeout_ms, move || {
        bank_transactions(&transactions, &range)
    })
    .await
}

pub async fn commissions(
    state: &AppState,
    params: &RangeParams,
) -> Result<CommissionReport, ReportError> {
    let range = resolve_range(params, "month")?;
    let transactions = state.ledger.snapshot().await;
    let orders = state.registry.orders().await;
    run_bounded(state.config.report_timeout_ms, move || {
        commission_report(&transactions, &orders, &range)
    })
    .await
}

pub async fn customers(
    state: &AppState,
    params: &RangeParams,
) -> Result<CustomerReport, ReportError> {
    let range = resolve_range(params, "month")?;
    let invoices = state.registry.invoices().await;
    run_bounded(state.config.report_timeout_ms, move || {
        customer_report(&invoices, &range)
    })
    .await
}

pub async fn suppliers(
    state: &AppState,
    params: &RangeParams,
) -> Result<SupplierReport, ReportError> {
    let range = resolve_range(params, "month")?;
    let orders = state.registry.orders().await;
    run_bounded(state.config.report_timeout_ms, move || {
        supplier_report(&orders, &range)
    })
    .await
}
