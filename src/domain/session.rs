//! Balance sessions: immutable closing snapshots.
//!
//! A session is created when an operator closes the books for a
//! period. The stored figures are historical fact from that moment on;
//! corrections appended to the ledger later never rewrite them.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Close lifecycle. OPEN → CLOSED is the only transition and CLOSED is
/// terminal; there is no reopening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Open,
    Closed,
}

/// Aggregate figures frozen into a session at close time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub sales_total: Decimal,
    pub sales_collected: Decimal,
    pub sales_count: u64,
    pub procurement_total: Decimal,
    pub procurement_count: u64,
    pub expenses_total: Decimal,
    pub expenses_count: u64,
    /// Cash basis: collected − procurement − expenses.
    pub net_balance: Decimal,
    /// Accrual basis: billed revenue − (procurement + expenses).
    pub net_profit: Decimal,
    /// Net liquid cash across all payment methods at close.
    pub liquid_total: Decimal,
}

/// An immutable closing snapshot for one period.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSession {
    pub id: Uuid,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub status: SessionStatus,
    pub closed_at: DateTime<Utc>,
    pub closed_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// SHA-256 over the stored figures, for tamper detection.
    pub seal_hash: String,
    pub summary: SessionSummary,
}
