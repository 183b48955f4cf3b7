//! Outstanding fees: receivables by customer, liabilities by supplier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::{Invoice, PaymentStatus, ProcurementOrder};
use crate::reports::period::DateRange;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutstandingSummary {
    pub customers_owes_us: Decimal,
    pub total_customers_outstanding: u64,
    pub we_owe_suppliers: Decimal,
    pub total_suppliers_outstanding: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOutstanding {
    pub name: String,
    pub outstanding: Decimal,
    pub invoice_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierOutstanding {
    pub name: String,
    pub outstanding: Decimal,
    pub order_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutstandingFeesReport {
    pub summary: OutstandingSummary,
    pub customers: Vec<CustomerOutstanding>,
    pub suppliers: Vec<SupplierOutstanding>,
}

/// Compute outstanding fees for a date range.
///
/// Customer side: Σ(total − paid) over CREDIT/PARTIAL invoices grouped
/// by customer. Supplier side: symmetric over procurement orders,
/// excluding CANCELLED. Rows are ordered by outstanding amount
/// descending, then name ascending, so pagination is deterministic.
pub fn outstanding_fees(
    invoices: &[Invoice],
    orders: &[ProcurementOrder],
    range: &DateRange,
) -> OutstandingFeesReport {
    let mut by_customer: HashMap<&str, (Decimal, u64)> = HashMap::new();
    for invoice in invoices.iter().filter(|i| range.contains(i.date)) {
        if matches!(
            invoice.payment_status(),
            PaymentStatus::Credit | PaymentStatus::Partial
        ) {
            let entry = by_customer.entry(invoice.customer.as_str()).or_default();
            entry.0 += invoice.receivable();
            entry.1 += 1;
        }
    }

    let mut by_supplier: HashMap<&str, (Decimal, u64)> = HashMap::new();
    for order in orders.iter().filter(|o| range.contains(o.date)) {
        let owed = order.outstanding();
        if owed > Decimal::ZERO {
            let entry = by_supplier.entry(order.supplier.as_str()).or_default();
            entry.0 += owed;
            entry.1 += 1;
        }
    }

    let mut customers: Vec<CustomerOutstanding> = by_customer
        .into_iter()
        .map(|(name, (outstanding, invoice_count))| CustomerOutstanding {
            name: name.to_string(),
            outstanding,
            invoice_count,
        })
        .collect();
    customers.sort_by(|a, b| {
        b.outstanding
            .cmp(&a.outstanding)
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut suppliers: Vec<SupplierOutstanding> = by_supplier
        .into_iter()
        .map(|(name, (outstanding, order_count))| SupplierOutstanding {
            name: name.to_string(),
            outstanding,
            order_count,
        })
        .collect();
    suppliers.sort_by(|a, b| {
        b.outstanding
            .cmp(&a.outstanding)
            .then_with(|| a.name.cmp(&b.name))
    });

    let summary = OutstandingSummary {
        customers_owes_us: customers.iter().map(|c| c.outstanding).sum(),
        total_customers_outstanding: customers.len() as u64,
        we_owe_suppliers: suppliers.iter().map(|s| s.outstanding).sum(),
        total_suppliers_outstanding: suppliers.len() as u64,
    };

    OutstandingFeesReport {
        summary,
        customers,
        suppliers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeliveryStatus, OrderStatus};
    use chrono::{NaiveDate, TimeZone, Utc};
    use uuid::Uuid;

    fn range_june() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        )
        .unwrap()
    }

    fn invoice(customer: &str, total: i64, paid: i64) -> Invoice {
        Invoice {
            id: Uuid::new_v4(),
            number: Uuid::new_v4().to_string(),
            customer: customer.to_string(),
            total: Decimal::from(total),
            paid_amount: Decimal::from(paid),
            delivery_status: DeliveryStatus::Delivered,
            items: vec![],
            date: Utc.with_ymd_and_hms(2025, 6, 5, 12, 0, 0).unwrap(),
        }
    }

    fn order(supplier: &str, total: i64, paid: i64, status: OrderStatus) -> ProcurementOrder {
        ProcurementOrder {
            id: Uuid::new_v4(),
            number: Uuid::new_v4().to_string(),
            supplier: supplier.to_string(),
            total: Decimal::from(total),
            paid: Decimal::from(paid),
            status,
            date: Utc.with_ymd_and_hms(2025, 6, 5, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_partial_invoice_outstanding() {
        let report = outstanding_fees(&[invoice("acme", 500, 200)], &[], &range_june());
        assert_eq!(report.customers.len(), 1);
        assert_eq!(report.customers[0].outstanding, Decimal::from(300));
        assert_eq!(report.summary.customers_owes_us, Decimal::from(300));
        assert_eq!(report.summary.total_customers_outstanding, 1);
    }

    #[test]
    fn test_paid_invoices_excluded() {
        let report = outstanding_fees(&[invoice("acme", 500, 500)], &[], &range_june());
        assert!(report.customers.is_empty());
        assert_eq!(report.summary.customers_owes_us, Decimal::ZERO);
    }

    #[test]
    fn test_cancelled_orders_excluded() {
        let orders = vec![
            order("north", 1000, 0, OrderStatus::Cancelled),
            order("south", 800, 300, OrderStatus::Partial),
        ];
        let report = outstanding_fees(&[], &orders, &range_june());
        assert_eq!(report.suppliers.len(), 1);
        assert_eq!(report.suppliers[0].name, "south");
        assert_eq!(report.summary.we_owe_suppliers, Decimal::from(500));
    }

    #[test]
    fn test_ordering_amount_desc_then_name() {
        let invoices = vec![
            invoice("beta", 100, 0),
            invoice("alpha", 100, 0),
            invoice("gamma", 900, 0),
        ];
        let report = outstanding_fees(&invoices, &[], &range_june());
        let names: Vec<&str> = report.customers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["gamma", "alpha", "beta"]);
    }

    #[test]
    fn test_multiple_invoices_same_customer_grouped() {
        let invoices = vec![invoice("acme", 100, 0), invoice("acme", 200, 50)];
        let report = outstanding_fees(&invoices, &[], &range_june());
        assert_eq!(report.customers.len(), 1);
        assert_eq!(report.customers[0].outstanding, Decimal::from(250));
        assert_eq!(report.customers[0].invoice_count, 2);
    }
}
