//! Assets and liabilities position.
//!
//! Composes figures the other reports already derive: assets are
//! liquid cash plus customer receivables plus outstanding employee
//! advances; liabilities are supplier payables plus unpaid salaries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Employee, Invoice, ProcurementOrder, Transaction};
use crate::reports::liquid_cash::liquid_cash;
use crate::reports::outstanding::outstanding_fees;
use crate::reports::period::DateRange;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionItem {
    pub name: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSide {
    pub total: Decimal,
    pub items: Vec<PositionItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetsLiabilitiesReport {
    pub assets: PositionSide,
    pub liabilities: PositionSide,
    /// assets.total − liabilities.total.
    pub net_position: Decimal,
}

fn side(items: Vec<PositionItem>) -> PositionSide {
    let total = items.iter().map(|i| i.amount).sum();
    PositionSide { total, items }
}

/// Compute the assets/liabilities position.
///
/// Receivables and payables respect the date range; liquid cash and
/// employee balances are point-in-time over the whole ledger, matching
/// the reports they come from.
pub fn assets_liabilities(
    invoices: &[Invoice],
    orders: &[ProcurementOrder],
    employees: &[Employee],
    transactions: &[Transaction],
    range: &DateRange,
) -> AssetsLiabilitiesReport {
    let liquid = liquid_cash(transactions);
    let outstanding = outstanding_fees(invoices, orders, range);

    let advances: Decimal = employees.iter().map(Employee::outstanding_advances).sum();
    let unpaid_salaries: Decimal = employees.iter().map(Employee::unpaid_salaries).sum();

    let assets = side(vec![
        PositionItem {
            name: "Liquid cash".to_string(),
            amount: liquid.net.total,
        },
        PositionItem {
            name: "Customer receivables".to_string(),
            amount: outstanding.summary.customers_owes_us,
        },
        PositionItem {
            name: "Employee advances".to_string(),
            amount: advances,
        },
    ]);
    let liabilities = side(vec![
        PositionItem {
            name: "Supplier payables".to_string(),
            amount: outstanding.summary.we_owe_suppliers,
        },
        PositionItem {
            name: "Unpaid salaries".to_string(),
            amount: unpaid_salaries,
        },
    ]);

    let net_position = assets.total - liabilities.total;
    AssetsLiabilitiesReport {
        assets,
        liabilities,
        net_position,
    }
}
