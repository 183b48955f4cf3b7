//! Bank transactions report: movement ledger with display signs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{PaymentMethod, Transaction};
use crate::reports::period::DateRange;

/// Display classification of a movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowKind {
    Income,
    Expense,
    Transfer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankTransactionRow {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: FlowKind,
    pub amount: Decimal,
    pub method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_to: Option<PaymentMethod>,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankSummary {
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
    /// All rows in range, transfers included.
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankTransactionsReport {
    pub summary: BankSummary,
    pub transactions: Vec<BankTransactionRow>,
}

/// Classify and total ledger movements in a date range.
///
/// Transfers appear in the raw list but are excluded from the
/// income/expense totals: they move cash between methods without
/// creating or consuming it.
pub fn bank_transactions(transactions: &[Transaction], range: &DateRange) -> BankTransactionsReport {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    let mut rows = Vec::new();

    for tx in transactions.iter().filter(|t| range.contains(t.date)) {
        let kind = if tx.tx_type.is_income() {
            income += tx.amount;
            FlowKind::Income
        } else if tx.tx_type.is_expense() {
            expenses += tx.amount;
            FlowKind::Expense
        } else {
            FlowKind::Transfer
        };

        rows.push(BankTransactionRow {
            id: tx.id,
            kind,
            amount: tx.amount,
            method: tx.method,
            transfer_to: tx.transfer_to,
            date: tx.date,
            description: tx.description.clone(),
        });
    }

    rows.sort_by(|a, b| b.date.cmp(&a.date));

    BankTransactionsReport {
        summary: BankSummary {
            income,
            expenses,
            net: income - expenses,
            count: rows.len() as u64,
        },
        transactions: rows,
    }
}
