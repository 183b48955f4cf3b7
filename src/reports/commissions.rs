//! Commission report: commission income joined to procurement orders.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::{ProcurementOrder, Transaction, TransactionType};
use crate::reports::period::DateRange;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionSummary {
    pub total: Decimal,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionRow {
    pub id: Uuid,
    /// Always positive: commissions are income, never netted against cost.
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub recorded_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionReport {
    pub summary: CommissionSummary,
    pub data: Vec<CommissionRow>,
}

/// Commission transactions in range, joined to their originating
/// order and supplier for display.
///
/// A row whose order reference no longer resolves is dropped from the
/// output with a warning; one dangling reference never fails the
/// whole report. Rows without a reference are kept, unjoined.
pub fn commission_report(
    transactions: &[Transaction],
    orders: &[ProcurementOrder],
    range: &DateRange,
) -> CommissionReport {
    let orders_by_id: HashMap<Uuid, &ProcurementOrder> =
        orders.iter().map(|o| (o.id, o)).collect();

    let mut rows = Vec::new();
    for tx in transactions.iter().filter(|t| {
        t.tx_type == TransactionType::Commission && range.contains(t.date)
    }) {
        let order = match tx.reference {
            Some(order_id) => match orders_by_id.get(&order_id) {
                Some(order) => Some(*order),
                None => {
                    tracing::warn!(
                        transaction_id = %tx.id,
                        order_id = %order_id,
                        "commission references a missing procurement order, row omitted"
                    );
                    continue;
                }
            },
            None => None,
        };

        rows.push(CommissionRow {
            id: tx.id,
            amount: tx.amount,
            date: tx.date,
            recorded_by: tx.recorded_by.clone(),
            order_number: order.map(|o| o.number.clone()),
            supplier: order.map(|o| o.supplier.clone()),
            notes: tx.description.clone(),
        });
    }

    rows.sort_by(|a, b| b.date.cmp(&a.date));

    let summary = CommissionSummary {
        total: rows.iter().map(|r| r.amount).sum(),
        count: rows.len() as u64,
    };

    CommissionReport { summary, data: rows }
}
