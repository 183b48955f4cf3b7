//! Balance session close.
//!
//! Closing a period computes the current figures, seals them with a
//! deterministic SHA-256 hash, and inserts the session under the
//! period key. Exactly one concurrent close for a period wins; the
//! stored figures are never recomputed afterward.

use chrono::{NaiveDate, Utc};
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{BalanceSession, SessionStatus, SessionSummary};
use crate::error::ApiError;
use crate::reports::balance::balance_summary;
use crate::reports::liquid_cash::liquid_cash;
use crate::reports::{DateRange, PeriodError};
use crate::state::AppState;
use crate::store::SessionStoreError;

#[derive(Debug, Error)]
pub enum CloseError {
    #[error(transparent)]
    Period(#[from] PeriodError),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Conflict(#[from] SessionStoreError),
}

impl From<CloseError> for ApiError {
    fn from(err: CloseError) -> Self {
        match err {
            CloseError::Period(e) => ApiError::Validation(e.to_string()),
            CloseError::Validation(msg) => ApiError::Validation(msg),
            CloseError::Conflict(e) => ApiError::Conflict(e.to_string()),
        }
    }
}

/// Compute the deterministic seal hash for a session.
///
/// Format: SHA-256(period_start|period_end|sales_total|sales_collected|
/// procurement_total|expenses_total|net_balance|net_profit|liquid_total),
/// hex encoded. Recomputing over unchanged stored figures must
/// reproduce the stored hash; any edit to a figure breaks it.
pub fn compute_seal_hash(
    period_start: NaiveDate,
    period_end: NaiveDate,
    summary: &SessionSummary,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(period_start.to_string().as_bytes());
    hasher.update(b"|");
    hasher.update(period_end.to_string().as_bytes());
    hasher.update(b"|");
    hasher.update(summary.sales_total.to_string().as_bytes());
    hasher.update(b"|");
    hasher.update(summary.sales_collected.to_string().as_bytes());
    hasher.update(b"|");
    hasher.update(summary.procurement_total.to_string().as_bytes());
    hasher.update(b"|");
    hasher.update(summary.expenses_total.to_string().as_bytes());
    hasher.update(b"|");
    hasher.update(summary.net_balance.to_string().as_bytes());
    hasher.update(b"|");
    hasher.update(summary.net_profit.to_string().as_bytes());
    hasher.update(b"|");
    hasher.update(summary.liquid_total.to_string().as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Close the books for a period.
///
/// Takes snapshots at close time, freezes the aggregate figures into a
/// sealed session, and inserts it keyed on (period_start, period_end).
/// A concurrent close for the same period loses with a conflict.
pub async fn close_session(
    state: &AppState,
    period_start: NaiveDate,
    period_end: NaiveDate,
    closed_by: &str,
    notes: Option<String>,
) -> Result<BalanceSession, CloseError> {
    if closed_by.trim().is_empty() {
        return Err(CloseError::Validation(
            "closedBy cannot be empty".to_string(),
        ));
    }
    let range = DateRange::new(period_start, period_end)?;

    let invoices = state.registry.invoices().await;
    let transactions = state.ledger.snapshot().await;

    let balance = balance_summary(&invoices, &transactions, &range);
    let liquid = liquid_cash(&transactions);

    let summary = SessionSummary {
        sales_total: balance.sales.total,
        sales_collected: balance.sales.collected,
        sales_count: balance.sales.count,
        procurement_total: balance.procurement.total,
        procurement_count: balance.procurement.count,
        expenses_total: balance.expenses.total,
        expenses_count: balance.expenses.count,
        net_balance: balance.net_balance,
        net_profit: balance.net_profit,
        liquid_total: liquid.net.total,
    };

    let session = BalanceSession {
        id: Uuid::new_v4(),
        period_start,
        period_end,
        status: SessionStatus::Closed,
        closed_at: Utc::now(),
        closed_by: closed_by.to_string(),
        notes,
        seal_hash: compute_seal_hash(period_start, period_end, &summary),
        summary,
    };

    state.sessions.insert_closed(session.clone()).await?;
    tracing::info!(
        session_id = %session.id,
        period_start = %period_start,
        period_end = %period_end,
        closed_by = %closed_by,
        "balance session closed"
    );
    Ok(session)
}
