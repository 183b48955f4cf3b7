//! Procurement order snapshots.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    Received,
    Partial,
    Cancelled,
}

/// A purchase order placed with a supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementOrder {
    pub id: Uuid,
    pub number: String,
    pub supplier: String,
    pub total: Decimal,
    pub paid: Decimal,
    pub status: OrderStatus,
    pub date: DateTime<Utc>,
}

impl ProcurementOrder {
    /// Amount still owed to the supplier.
    ///
    /// Cancelled orders carry no liability regardless of amounts.
    pub fn outstanding(&self) -> Decimal {
        if self.status == OrderStatus::Cancelled {
            Decimal::ZERO
        } else {
            self.total - self.paid
        }
    }
}
