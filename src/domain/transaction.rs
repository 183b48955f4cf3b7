//! Ledger transaction types.
//!
//! A `Transaction` is the unit of record in the append-only ledger.
//! Corrections are modeled as new offsetting transactions, never
//! in-place edits, which keeps every aggregate reproducible from raw
//! history at any point in time.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of financial movement a transaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    SalesPayment,
    ProcurementPayment,
    Expense,
    Income,
    Salary,
    Advance,
    BankTransfer,
    Commission,
}

impl TransactionType {
    /// True for types that bring money into the business.
    ///
    /// Commissions are income, never netted against procurement cost.
    pub fn is_income(self) -> bool {
        matches!(
            self,
            TransactionType::SalesPayment | TransactionType::Income | TransactionType::Commission
        )
    }

    /// True for types that move money out of the business.
    pub fn is_expense(self) -> bool {
        matches!(
            self,
            TransactionType::ProcurementPayment
                | TransactionType::Expense
                | TransactionType::Salary
                | TransactionType::Advance
        )
    }

    /// Transfers reshuffle cash between methods; they are excluded
    /// from income/expense totals but kept in raw listings.
    pub fn is_transfer(self) -> bool {
        matches!(self, TransactionType::BankTransfer)
    }
}

/// Payment method a transaction settled through.
///
/// The set is closed: reports must emit a row for every method even
/// when it saw no activity, so callers can rely on a stable shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Bank,
    BankNile,
}

impl PaymentMethod {
    /// All methods, in the order reports present them.
    pub const ALL: [PaymentMethod; 3] =
        [PaymentMethod::Cash, PaymentMethod::Bank, PaymentMethod::BankNile];
}

/// An immutable ledger record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    /// Always non-negative; direction comes from `tx_type`.
    pub amount: Decimal,
    pub method: PaymentMethod,
    /// For `BANK_TRANSFER`: the receiving method (`method` is the source).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_to: Option<PaymentMethod>,
    pub date: DateTime<Utc>,
    /// Source document: invoice, procurement order, or employee id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Uuid>,
    pub recorded_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
