//! Per-party reports: sales by customer, procurement by supplier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::{Invoice, ProcurementOrder};
use crate::reports::period::DateRange;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub total_sales: Decimal,
    pub total_paid: Decimal,
    pub total_outstanding: Decimal,
    pub customer_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRow {
    pub name: String,
    pub total_sales: Decimal,
    pub total_paid: Decimal,
    pub outstanding: Decimal,
    pub invoice_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerReport {
    pub summary: CustomerSummary,
    pub data: Vec<CustomerRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierSummary {
    pub total_procurement: Decimal,
    pub total_paid: Decimal,
    pub total_outstanding: Decimal,
    pub supplier_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRow {
    pub name: String,
    pub total_procurement: Decimal,
    pub total_paid: Decimal,
    pub outstanding: Decimal,
    pub order_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierReport {
    pub summary: SupplierSummary,
    pub data: Vec<SupplierRow>,
}

/// Sales activity grouped by customer over a date range.
///
/// Rows are ordered by total sales descending, then name ascending.
pub fn customer_report(invoices: &[Invoice], range: &DateRange) -> CustomerReport {
    let mut by_customer: HashMap<&str, (Decimal, Decimal, u64)> = HashMap::new();
    for invoice in invoices.iter().filter(|i| range.contains(i.date)) {
        let entry = by_customer.entry(invoice.customer.as_str()).or_default();
        entry.0 += invoice.total;
        entry.1 += invoice.paid_amount;
        entry.2 += 1;
    }

    let mut data: Vec<CustomerRow> = by_customer
        .into_iter()
        .map(|(name, (total_sales, total_paid, invoice_count))| CustomerRow {
            name: name.to_string(),
            total_sales,
            total_paid,
            outstanding: total_sales - total_paid,
            invoice_count,
        })
        .collect();
    data.sort_by(|a, b| {
        b.total_sales
            .cmp(&a.total_sales)
            .then_with(|| a.name.cmp(&b.name))
    });

    let summary = CustomerSummary {
        total_sales: data.iter().map(|r| r.total_sales).sum(),
        total_paid: data.iter().map(|r| r.total_paid).sum(),
        total_outstanding: data.iter().map(|r| r.outstanding).sum(),
        customer_count: data.len() as u64,
    };

    CustomerReport { summary, data }
}

/// Procurement activity grouped by supplier over a date range.
///
/// Cancelled orders carry no outstanding balance but still appear in
/// the procurement totals they were paid against.
pub fn supplier_report(orders: &[ProcurementOrder], range: &DateRange) -> SupplierReport {
    let mut by_supplier: HashMap<&str, (Decimal, Decimal, Decimal, u64)> = HashMap::new();
    for order in orders.iter().filter(|o| range.contains(o.date)) {
        let entry = by_supplier.entry(order.supplier.as_str()).or_default();
        entry.0 += order.total;
        entry.1 += order.paid;
        entry.2 += order.outstanding();
        entry.3 += 1;
    }

    let mut data: Vec<SupplierRow> = by_supplier
        .into_iter()
        .map(
            |(name, (total_procurement, total_paid, outstanding, order_count))| SupplierRow {
                name: name.to_string(),
                total_procurement,
                total_paid,
                outstanding,
                order_count,
            },
        )
        .collect();
    data.sort_by(|a, b| {
        b.total_procurement
            .cmp(&a.total_procurement)
            .then_with(|| a.name.cmp(&b.name))
    });

    let summary = SupplierSummary {
        total_procurement: data.iter().map(|r| r.total_procurement).sum(),
        total_paid: data.iter().map(|r| r.total_paid).sum(),
        total_outstanding: data.iter().map(|r| r.outstanding).sum(),
        supplier_count: data.len() as u64,
    };

    SupplierReport { summary, data }
}
