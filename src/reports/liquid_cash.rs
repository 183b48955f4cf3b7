//! Liquid cash: net cash-equivalent position by payment method.
//!
//! This is a point-in-time position over the whole ledger, not a
//! ranged report: accrued-but-uncollected amounts never appear here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::{PaymentMethod, Transaction};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetByMethod {
    pub total: Decimal,
    pub cash: Decimal,
    pub bank: Decimal,
    pub bank_nile: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodActivity {
    pub method: PaymentMethod,
    pub total: Decimal,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidCashReport {
    pub net: NetByMethod,
    pub by_method: Vec<MethodActivity>,
}

/// Net deposits minus withdrawals per method.
///
/// Transfers move value between methods without changing the overall
/// total. Every method appears in the output even with zero activity;
/// callers rely on the stable method set.
pub fn liquid_cash(transactions: &[Transaction]) -> LiquidCashReport {
    let mut totals: HashMap<PaymentMethod, Decimal> = HashMap::new();
    let mut counts: HashMap<PaymentMethod, u64> = HashMap::new();

    for tx in transactions {
        if tx.tx_type.is_income() {
            *totals.entry(tx.method).or_default() += tx.amount;
            *counts.entry(tx.method).or_default() += 1;
        } else if tx.tx_type.is_expense() {
            *totals.entry(tx.method).or_default() -= tx.amount;
            *counts.entry(tx.method).or_default() += 1;
        } else if tx.tx_type.is_transfer() {
            *totals.entry(tx.method).or_default() -= tx.amount;
            *counts.entry(tx.method).or_default() += 1;
            if let Some(to) = tx.transfer_to {
                *totals.entry(to).or_default() += tx.amount;
                *counts.entry(to).or_default() += 1;
            }
        }
    }

    let value = |m: PaymentMethod| totals.get(&m).copied().unwrap_or(Decimal::ZERO);
    let cash = value(PaymentMethod::Cash);
    let bank = value(PaymentMethod::Bank);
    let bank_nile = value(PaymentMethod::BankNile);

    let by_method = PaymentMethod::ALL
        .into_iter()
        .map(|method| MethodActivity {
            method,
            total: value(method),
            count: counts.get(&method).copied().unwrap_or(0),
        })
        .collect();

    LiquidCashReport {
        net: NetByMethod {
            total: cash + bank + bank_nile,
            cash,
            bank,
            bank_nile,
        },
        by_method,
    }
}
