//! Balance summary: the dashboard's headline figures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Invoice, Transaction, TransactionType};
use crate::reports::period::DateRange;

/// Count-and-total pair used for procurement and expense buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total: Decimal,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesTotals {
    pub total: Decimal,
    pub count: u64,
    pub collected: Decimal,
}

/// Fixed-shape balance summary.
///
/// `net_balance` is cash basis (what actually moved); `net_profit` is
/// accrual basis (what was billed and incurred). The two differ by
/// design and are both exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSummary {
    pub sales: SalesTotals,
    pub procurement: Totals,
    pub expenses: Totals,
    pub net_balance: Decimal,
    pub net_profit: Decimal,
    /// Percentage, 0 when there is no revenue.
    pub profit_margin: Decimal,
}

/// Compute the balance summary for a date range.
///
/// Sales figures come from invoice snapshots; procurement and expense
/// figures from ledger transactions of the matching type.
pub fn balance_summary(
    invoices: &[Invoice],
    transactions: &[Transaction],
    range: &DateRange,
) -> BalanceSummary {
    let mut sales = SalesTotals {
        total: Decimal::ZERO,
        count: 0,
        collected: Decimal::ZERO,
    };
    for invoice in invoices.iter().filter(|i| range.contains(i.date)) {
        sales.total += invoice.total;
        sales.collected += invoice.paid_amount;
        sales.count += 1;
    }

    let mut procurement = Totals { total: Decimal::ZERO, count: 0 };
    let mut expenses = Totals { total: Decimal::ZERO, count: 0 };
    for tx in transactions.iter().filter(|t| range.contains(t.date)) {
        match tx.tx_type {
            TransactionType::ProcurementPayment => {
                procurement.total += tx.amount;
                procurement.count += 1;
            }
            TransactionType::Expense => {
                expenses.total += tx.amount;
                expenses.count += 1;
            }
            _ => {}
        }
    }

    let net_balance = sales.collected - procurement.total - expenses.total;
    let net_profit = sales.total - (procurement.total + expenses.total);
    // Guard: margin is 0 when there is no revenue, never NaN/Infinity.
    let profit_margin = if sales.total.is_zero() {
        Decimal::ZERO
    } else {
        (net_profit * Decimal::ONE_HUNDRED / sales.total).round_dp(2)
    };

    BalanceSummary {
        sales,
        procurement,
        expenses,
        net_balance,
        net_profit,
        profit_margin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeliveryStatus, PaymentMethod};
    use chrono::{NaiveDate, TimeZone, Utc};
    use uuid::Uuid;

    fn range_june() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        )
        .unwrap()
    }

    fn invoice(total: i64, paid: i64) -> Invoice {
        Invoice {
            id: Uuid::new_v4(),
            number: Uuid::new_v4().to_string(),
            customer: "customer".to_string(),
            total: Decimal::from(total),
            paid_amount: Decimal::from(paid),
            delivery_status: DeliveryStatus::Delivered,
            items: vec![],
            date: Utc.with_ymd_and_hms(2025, 6, 10, 9, 0, 0).unwrap(),
        }
    }

    fn tx(tx_type: TransactionType, amount: i64) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            tx_type,
            amount: Decimal::from(amount),
            method: PaymentMethod::Cash,
            transfer_to: None,
            date: Utc.with_ymd_and_hms(2025, 6, 12, 10, 0, 0).unwrap(),
            reference: None,
            recorded_by: "tester".to_string(),
            description: None,
        }
    }

    #[test]
    fn test_summary_figures() {
        let invoices = vec![invoice(1000, 600), invoice(500, 500)];
        let transactions = vec![
            tx(TransactionType::ProcurementPayment, 400),
            tx(TransactionType::Expense, 100),
            tx(TransactionType::SalesPayment, 999), // not a summary bucket
        ];

        let summary = balance_summary(&invoices, &transactions, &range_june());
        assert_eq!(summary.sales.total, Decimal::from(1500));
        assert_eq!(summary.sales.collected, Decimal::from(1100));
        assert_eq!(summary.sales.count, 2);
        assert_eq!(summary.procurement.total, Decimal::from(400));
        assert_eq!(summary.expenses.total, Decimal::from(100));
        // Cash basis: 1100 - 400 - 100.
        assert_eq!(summary.net_balance, Decimal::from(600));
        // Accrual basis: 1500 - 500.
        assert_eq!(summary.net_profit, Decimal::from(1000));
    }

    #[test]
    fn test_collected_never_exceeds_billed() {
        let invoices = vec![invoice(1000, 600), invoice(200, 0), invoice(50, 50)];
        let summary = balance_summary(&invoices, &[], &range_june());
        assert!(summary.sales.collected <= summary.sales.total);
    }

    #[test]
    fn test_empty_range_yields_zeroes() {
        let summary = balance_summary(&[], &[], &range_june());
        assert_eq!(summary.sales.total, Decimal::ZERO);
        assert_eq!(summary.net_balance, Decimal::ZERO);
        assert_eq!(summary.net_profit, Decimal::ZERO);
        assert_eq!(summary.profit_margin, Decimal::ZERO);
    }

    #[test]
    fn test_margin_zero_when_no_revenue() {
        let transactions = vec![tx(TransactionType::Expense, 100)];
        let summary = balance_summary(&[], &transactions, &range_june());
        // No revenue: margin must be 0, not a division error.
        assert_eq!(summary.profit_margin, Decimal::ZERO);
    }

    #[test]
    fn test_idempotent_over_same_snapshot() {
        let invoices = vec![invoice(1000, 250)];
        let transactions = vec![tx(TransactionType::Expense, 75)];
        let a = balance_summary(&invoices, &transactions, &range_june());
        let b = balance_summary(&invoices, &transactions, &range_june());
        assert_eq!(a, b);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut late = invoice(1000, 1000);
        late.date = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let summary = balance_summary(&[late], &[], &range_june());
        assert_eq!(summary.sales.count, 0);
    }
}
