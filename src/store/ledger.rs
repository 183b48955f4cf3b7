//! Append-only transaction ledger.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{PaymentMethod, Transaction, TransactionType};

/// Errors raised when appending to the ledger.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("amount must be non-negative, got {0}")]
    NegativeAmount(Decimal),

    #[error("BANK_TRANSFER requires a transferTo method distinct from the source method")]
    InvalidTransfer,

    #[error("transferTo is only valid on BANK_TRANSFER transactions")]
    UnexpectedTransferTarget,

    #[error("recordedBy cannot be empty")]
    MissingRecorder,
}

/// Payload for a ledger append. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub tx_type: TransactionType,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub transfer_to: Option<PaymentMethod>,
    pub date: DateTime<Utc>,
    pub reference: Option<Uuid>,
    pub recorded_by: String,
    pub description: Option<String>,
}

/// Filter for ledger queries. Unset fields match everything.
///
/// The window is half-open: `from <= date < to`.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub types: Option<Vec<TransactionType>>,
    pub methods: Option<Vec<PaymentMethod>>,
}

impl TransactionFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(from) = self.from {
            if tx.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if tx.date >= to {
                return false;
            }
        }
        if let Some(types) = &self.types {
            if !types.contains(&tx.tx_type) {
                return false;
            }
        }
        if let Some(methods) = &self.methods {
            if !methods.contains(&tx.method) {
                return false;
            }
        }
        true
    }
}

/// The append-only record of financial transactions.
///
/// No update or delete is exposed; corrections are new offsetting
/// transactions. This is what makes every downstream total
/// reproducible from raw history.
#[derive(Default)]
pub struct LedgerStore {
    transactions: RwLock<Vec<Transaction>>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append one transaction. Atomic: concurrent readers
    /// see either the ledger before or after this record, never a
    /// partial state.
    pub async fn append(&self, new: NewTransaction) -> Result<Uuid, LedgerError> {
        if new.amount.is_sign_negative() {
            return Err(LedgerError::NegativeAmount(new.amount));
        }
        if new.recorded_by.trim().is_empty() {
            return Err(LedgerError::MissingRecorder);
        }
        match (new.tx_type, new.transfer_to) {
            (TransactionType::BankTransfer, Some(to)) if to != new.method => {}
            (TransactionType::BankTransfer, _) => return Err(LedgerError::InvalidTransfer),
            (_, Some(_)) => return Err(LedgerError::UnexpectedTransferTarget),
            (_, None) => {}
        }

        let id = Uuid::new_v4();
        let tx = Transaction {
            id,
            tx_type: new.tx_type,
            amount: new.amount,
            method: new.method,
            transfer_to: new.transfer_to,
            date: new.date,
            reference: new.reference,
            recorded_by: new.recorded_by,
            description: new.description,
        };

        self.transactions.write().await.push(tx);
        tracing::debug!(transaction_id = %id, "transaction appended");
        Ok(id)
    }

    /// Point-in-time view of the full ledger, taken at query start.
    pub async fn snapshot(&self) -> Arc<[Transaction]> {
        let guard = self.transactions.read().await;
        Arc::from(guard.as_slice())
    }

    /// Filtered query over a fresh snapshot. Callers paginate; the
    /// store itself never truncates.
    pub async fn query(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        let guard = self.transactions.read().await;
        guard.iter().filter(|tx| filter.matches(tx)).cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.transactions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
